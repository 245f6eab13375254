// Per-province city tables, fanned out by raw province name and routed to
// files by canonical key.
use crate::dedupe::keep_first;
use crate::error::PipelineError;
use crate::loader::RawAreaTable;
use crate::naming::{normalize_province, Province};
use crate::output::write_csv;
use crate::types::{AreaRecord, CityDailySummary, SUMMARY_HEADER};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ProvinceCityTable {
    pub province: Province,
    /// Raw name the partition was built from.
    pub raw_name: String,
    pub rows: Vec<CityDailySummary>,
}

#[derive(Debug, Clone, Default)]
pub struct CityTables {
    pub tables: Vec<ProvinceCityTable>,
    /// Raw province names that did not normalize to a known province.
    pub skipped: Vec<String>,
}

/// Groups rows by raw province name, preserving first-seen order and the
/// table's row order within each group.
pub fn partition_by_province(table: &RawAreaTable) -> Vec<(&str, Vec<&AreaRecord>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&AreaRecord>)> = Vec::new();
    for r in table.records() {
        let name = r.province_name.as_str();
        let slot = *index.entry(name).or_insert_with(|| {
            groups.push((name, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(r);
    }
    groups
}

pub fn summarize_cities(rows: &[&AreaRecord]) -> Vec<CityDailySummary> {
    let kept = keep_first(rows.iter().copied(), |r| (r.city_name.clone(), r.update_time.clone()));
    kept.into_iter()
        .map(|r| CityDailySummary {
            name: r.city_name.clone(),
            confirmed: r.city_confirmed.clone(),
            suspected: r.city_suspected.clone(),
            discharged: r.city_cured.clone(),
            deceased: r.city_dead.clone(),
            updated_at_date: r.update_time.clone(),
        })
        .collect()
}

pub fn build_city_tables(table: &RawAreaTable) -> CityTables {
    let mut out = CityTables::default();
    for (raw_name, rows) in partition_by_province(table) {
        let Some(province) = normalize_province(raw_name) else {
            info!("skipping unrecognized province name {:?}", raw_name);
            out.skipped.push(raw_name.to_string());
            continue;
        };
        let cities = summarize_cities(&rows);
        debug!("{} -> {}: {} city rows", raw_name, province.key(), cities.len());
        out.tables.push(ProvinceCityTable {
            province,
            raw_name: raw_name.to_string(),
            rows: cities,
        });
    }
    out
}

pub fn city_table_path(dir: &Path, province: Province) -> PathBuf {
    dir.join(format!("{}.csv", province.key()))
}

/// Writes one `<key>.csv` per table. Tables sharing a key overwrite each
/// other in order, so the last partition wins.
pub fn write_city_tables(dir: &Path, tables: &CityTables) -> Result<Vec<PathBuf>, PipelineError> {
    let mut written: Vec<PathBuf> = Vec::new();
    for t in &tables.tables {
        let path = city_table_path(dir, t.province);
        write_csv(&path, &SUMMARY_HEADER, &t.rows)?;
        if written.contains(&path) {
            warn!("{:?} replaces an earlier table at {}", t.raw_name, path.display());
        } else {
            written.push(path);
        }
    }
    Ok(written)
}
