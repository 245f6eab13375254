use crate::error::PipelineError;
use crate::types::{AreaRecord, AREA_COLUMNS};
use crate::util::{date_part, parse_date_safe};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::{debug, warn};
use std::collections::HashSet;
use std::io;
use std::path::Path;

/// The raw area file, newest rows first, `updateTime` cut down to its date.
#[derive(Debug, Clone, Default)]
pub struct RawAreaTable {
    records: Vec<AreaRecord>,
    skipped_rows: usize,
}

impl RawAreaTable {
    /// Sorts descending by the full timestamp, then truncates it.
    ///
    /// The sort is stable, so rows sharing a timestamp keep their file order.
    pub fn from_records(mut records: Vec<AreaRecord>) -> Self {
        records.sort_by(|a, b| b.update_time.cmp(&a.update_time));
        for r in &mut records {
            let date = date_part(&r.update_time).to_string();
            r.update_time = date;
        }
        RawAreaTable { records, skipped_rows: 0 }
    }

    pub fn records(&self) -> &[AreaRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows the csv reader could not decode, such as fields with bad utf-8.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Distinct raw province names in the order they first appear.
    pub fn province_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.province_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Earliest and latest dates that parse; `None` if none do.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.records
            .iter()
            .filter_map(|r| parse_date_safe(&r.update_time))
            .fold(None, |span, d| match span {
                None => Some((d, d)),
                Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
            })
    }
}

pub fn load_area_table(path: &Path) -> Result<RawAreaTable, PipelineError> {
    debug!("reading raw area table from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_area_table(file)
}

pub fn read_area_table<R: io::Read>(reader: R) -> Result<RawAreaTable, PipelineError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = AREA_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(PipelineError::Schema { missing });
    }

    let mut records = Vec::new();
    let mut skipped_rows = 0usize;
    for result in rdr.deserialize::<AreaRecord>() {
        match result {
            Ok(r) => records.push(r),
            Err(e) => {
                skipped_rows += 1;
                debug!("skipping unreadable row: {}", e);
            }
        }
    }
    if skipped_rows > 0 {
        warn!("{} raw rows could not be read and were skipped", skipped_rows);
    }

    let mut table = RawAreaTable::from_records(records);
    table.skipped_rows = skipped_rows;
    Ok(table)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::province::{summarize_provinces, ProvinceMode};

    pub(crate) const HEADER: &str = "provinceName,provinceEnglishName,cityName,province_confirmedCount,province_suspectedCount,province_curedCount,province_deadCount,city_confirmedCount,city_suspectedCount,city_curedCount,city_deadCount,updateTime\n";

    pub(crate) fn area_line(
        province: &str,
        city: &str,
        province_counts: [u32; 4],
        city_counts: [u32; 4],
        update_time: &str,
    ) -> String {
        let p = province_counts;
        let c = city_counts;
        format!(
            "{province},ignored,{city},{},{},{},{},{},{},{},{},{update_time}\n",
            p[0], p[1], p[2], p[3], c[0], c[1], c[2], c[3]
        )
    }

    #[test]
    fn sorts_newest_first_and_truncates_dates() {
        let csv = format!(
            "{HEADER}{}{}{}",
            area_line("湖北省", "武汉市", [1, 0, 0, 0], [1, 0, 0, 0], "2020-02-01 08:00:00"),
            area_line("湖北省", "武汉市", [3, 0, 0, 0], [3, 0, 0, 0], "2020-02-03 18:34:00"),
            area_line("湖北省", "武汉市", [2, 0, 0, 0], [2, 0, 0, 0], "2020-02-02 12:00:00"),
        );
        let table = read_area_table(csv.as_bytes()).unwrap();
        let dates: Vec<&str> = table.records().iter().map(|r| r.update_time.as_str()).collect();
        assert_eq!(dates, vec!["2020-02-03", "2020-02-02", "2020-02-01"]);
        assert_eq!(table.records()[0].city_confirmed, "3");
    }

    #[test]
    fn equal_timestamps_keep_file_order() {
        let csv = format!(
            "{HEADER}{}{}",
            area_line("广东省", "广州", [5, 0, 0, 0], [2, 0, 0, 0], "2020-02-03 10:00:00"),
            area_line("广东省", "深圳", [5, 0, 0, 0], [3, 0, 0, 0], "2020-02-03 10:00:00"),
        );
        let table = read_area_table(csv.as_bytes()).unwrap();
        assert_eq!(table.records()[0].city_name, "广州");
        assert_eq!(table.records()[1].city_name, "深圳");
    }

    #[test]
    fn missing_columns_are_a_schema_error() {
        let csv = "provinceName,cityName,updateTime\n湖北省,武汉市,2020-02-03 18:00:00\n";
        match read_area_table(csv.as_bytes()) {
            Err(PipelineError::Schema { missing }) => {
                assert_eq!(missing.len(), 8);
                assert!(missing.contains(&"city_deadCount".to_string()));
                assert!(!missing.contains(&"cityName".to_string()));
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn counts_pass_through_unvalidated() {
        let csv = format!(
            "{HEADER}湖北省,x,武汉市,n/a,0,0,0,12.0,,0,0,2020-02-03 18:00:00\n"
        );
        let table = read_area_table(csv.as_bytes()).unwrap();
        let r = &table.records()[0];
        assert_eq!(r.province_confirmed, "n/a");
        assert_eq!(r.city_confirmed, "12.0");
        assert_eq!(r.city_suspected, "");
    }

    #[test]
    fn short_province_only_row_is_kept() {
        let csv = "provinceName,province_confirmedCount,province_suspectedCount,province_curedCount,province_deadCount,updateTime,cityName,city_confirmedCount,city_suspectedCount,city_curedCount,city_deadCount\n\
                   香港,10,0,0,0,2020-02-03 18:00:00\n";
        let table = read_area_table(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.skipped_rows(), 0);

        let r = &table.records()[0];
        assert_eq!(r.province_name, "香港");
        assert_eq!(r.province_confirmed, "10");
        assert_eq!(r.update_time, "2020-02-03");
        assert_eq!(r.city_name, "");
        assert_eq!(r.city_dead, "");

        let rows = summarize_provinces(&table, ProvinceMode::All);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "香港");
        assert_eq!(rows[0].confirmed, "10");
        assert_eq!(rows[0].updated_at_date, "2020-02-03");
    }

    #[test]
    fn undecodable_rows_are_skipped_and_counted() {
        let mut csv = format!(
            "{HEADER}{}",
            area_line("湖北省", "武汉市", [1, 0, 0, 0], [1, 0, 0, 0], "2020-02-01 08:00:00"),
        )
        .into_bytes();
        csv.extend_from_slice(b"\xff\xfe,x,y,1,0,0,0,1,0,0,0,2020-02-02 08:00:00\n");
        let table = read_area_table(csv.as_slice()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.skipped_rows(), 1);
    }

    #[test]
    fn province_names_in_first_seen_order() {
        let csv = format!(
            "{HEADER}{}{}{}",
            area_line("浙江省", "杭州", [1, 0, 0, 0], [1, 0, 0, 0], "2020-02-01 08:00:00"),
            area_line("湖北省", "武汉市", [1, 0, 0, 0], [1, 0, 0, 0], "2020-02-02 08:00:00"),
            area_line("浙江省", "宁波", [1, 0, 0, 0], [1, 0, 0, 0], "2020-02-03 08:00:00"),
        );
        let table = read_area_table(csv.as_bytes()).unwrap();
        assert_eq!(table.province_names(), vec!["浙江省", "湖北省"]);
        let (lo, hi) = table.date_span().unwrap();
        assert_eq!(lo, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        assert_eq!(hi, NaiveDate::from_ymd_opt(2020, 2, 3).unwrap());
    }
}
