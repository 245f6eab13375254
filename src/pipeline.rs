use crate::city::{build_city_tables, write_city_tables};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::loader::load_area_table;
use crate::province::{summarize_provinces, write_province_table};
use crate::types::{CityDailySummary, ProvinceDailySummary};
use chrono::NaiveDate;
use log::{info, warn};
use std::path::PathBuf;

/// What a transform run produced.
#[derive(Debug, Clone)]
pub struct TransformReport {
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    pub province_rows: Vec<ProvinceDailySummary>,
    pub city_files: Vec<PathBuf>,
    /// First city table written, kept for the console preview.
    pub sample_city_rows: Vec<CityDailySummary>,
    pub skipped_provinces: Vec<String>,
    pub date_span: Option<(NaiveDate, NaiveDate)>,
}

/// Loads the stored raw snapshot and rewrites every output table from it.
pub fn run_transform(config: &PipelineConfig) -> Result<TransformReport, PipelineError> {
    let table = load_area_table(&config.area_path())?;
    if table.is_empty() {
        warn!("raw area table {} has no rows", config.area_path().display());
    }
    info!(
        "loaded {} raw rows covering {} province names",
        table.len(),
        table.province_names().len()
    );

    let province_rows = summarize_provinces(&table, config.province_mode);
    write_province_table(&config.province_path(), &province_rows)?;
    info!(
        "wrote {} province rows to {}",
        province_rows.len(),
        config.province_path().display()
    );

    let city_tables = build_city_tables(&table);
    let city_files = write_city_tables(&config.city_dir(), &city_tables)?;
    info!(
        "wrote {} city tables to {}",
        city_files.len(),
        config.city_dir().display()
    );

    Ok(TransformReport {
        rows_loaded: table.len(),
        rows_skipped: table.skipped_rows(),
        province_rows,
        city_files,
        sample_city_rows: city_tables
            .tables
            .first()
            .map(|t| t.rows.clone())
            .unwrap_or_default(),
        skipped_provinces: city_tables.skipped,
        date_span: table.date_span(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::{area_line, HEADER};
    use crate::province::ProvinceMode;
    use std::fs;
    use tempfile::TempDir;

    fn setup(raw: &str) -> (TempDir, PipelineConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::with_data_dir(dir.path());
        fs::write(config.area_path(), raw).unwrap();
        (dir, config)
    }

    fn hubei_duplicates() -> String {
        format!(
            "{HEADER}{}{}",
            area_line("湖北省", "武汉市", [100, 0, 0, 0], [90, 0, 0, 0], "2020-02-03 18:00:00"),
            area_line("湖北省", "武汉市", [100, 0, 0, 0], [90, 0, 0, 0], "2020-02-03 09:00:00"),
        )
    }

    #[test]
    fn hubei_duplicates_collapse_end_to_end() {
        let (_dir, config) = setup(&hubei_duplicates());
        let report = run_transform(&config).unwrap();
        assert_eq!(report.rows_loaded, 2);

        let provinces = fs::read_to_string(config.province_path()).unwrap();
        assert_eq!(
            provinces,
            "name,confirmed,suspected,discharged,deceased,updatedAtDate\n湖北省,100,0,0,0,2020-02-03\n"
        );

        let cities = fs::read_to_string(config.city_dir().join("hu_bei.csv")).unwrap();
        assert_eq!(
            cities,
            "name,confirmed,suspected,discharged,deceased,updatedAtDate\n武汉市,90,0,0,0,2020-02-03\n"
        );
        assert_eq!(report.city_files, vec![config.city_dir().join("hu_bei.csv")]);
    }

    #[test]
    fn rerun_is_byte_identical() {
        let raw = format!(
            "{}{}{}",
            hubei_duplicates(),
            area_line("浙江省", "杭州", [30, 1, 2, 0], [12, 0, 1, 0], "2020-02-04 07:00:00"),
            area_line("待明确地区", "待明确", [4, 0, 0, 0], [4, 0, 0, 0], "2020-02-02 07:00:00"),
        );
        let (_dir, config) = setup(&raw);

        run_transform(&config).unwrap();
        let first_province = fs::read(config.province_path()).unwrap();
        let first_hubei = fs::read(config.city_dir().join("hu_bei.csv")).unwrap();
        let first_zhejiang = fs::read(config.city_dir().join("zhe_jiang.csv")).unwrap();

        let report = run_transform(&config).unwrap();
        assert_eq!(fs::read(config.province_path()).unwrap(), first_province);
        assert_eq!(fs::read(config.city_dir().join("hu_bei.csv")).unwrap(), first_hubei);
        assert_eq!(fs::read(config.city_dir().join("zhe_jiang.csv")).unwrap(), first_zhejiang);
        assert_eq!(report.skipped_provinces, vec!["待明确地区".to_string()]);
        assert_eq!(fs::read_dir(config.city_dir()).unwrap().count(), 2);
    }

    #[test]
    fn latest_timestamp_wins_regardless_of_file_order() {
        let raw = format!(
            "{HEADER}{}{}{}",
            area_line("湖北省", "武汉市", [100, 0, 0, 0], [90, 0, 0, 0], "2020-02-03 09:00:00"),
            area_line("湖北省", "武汉市", [130, 0, 0, 0], [120, 0, 0, 0], "2020-02-03 21:00:00"),
            area_line("湖北省", "武汉市", [110, 0, 0, 0], [100, 0, 0, 0], "2020-02-03 12:00:00"),
        );
        let (_dir, config) = setup(&raw);
        let report = run_transform(&config).unwrap();
        assert_eq!(report.province_rows.len(), 1);
        assert_eq!(report.province_rows[0].confirmed, "130");
        assert_eq!(report.sample_city_rows[0].confirmed, "120");
    }

    #[test]
    fn filtered_mode_applies_to_province_table_only() {
        let raw = format!(
            "{}{}",
            hubei_duplicates(),
            area_line("钻石公主号邮轮", "", [700, 0, 0, 0], [0, 0, 0, 0], "2020-02-03 10:00:00"),
        );
        let (_dir, mut config) = setup(&raw);
        config.province_mode = ProvinceMode::KnownFullNames;
        let report = run_transform(&config).unwrap();
        assert_eq!(report.province_rows.len(), 1);
        assert_eq!(report.province_rows[0].name, "湖北省");
        assert_eq!(report.skipped_provinces, vec!["钻石公主号邮轮".to_string()]);
    }

    #[test]
    fn schema_error_aborts_before_writing() {
        let (_dir, config) = setup("provinceName,updateTime\n湖北省,2020-02-03 18:00:00\n");
        let result = run_transform(&config);
        assert!(matches!(result, Err(PipelineError::Schema { .. })));
        assert!(!config.province_path().exists());
        assert!(!config.city_dir().exists());
    }
}
