// Combined province roll-up: one row per (province, date).
use crate::dedupe::keep_first;
use crate::error::PipelineError;
use crate::loader::RawAreaTable;
use crate::naming::matches_known_full_name;
use crate::output::write_csv;
use crate::types::{ProvinceDailySummary, SUMMARY_HEADER};
use log::debug;
use std::path::Path;

/// Which raw province names make it into the combined table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProvinceMode {
    /// Every raw province name, recognized or not.
    #[default]
    All,
    /// Only names containing a known full province name; drops noise rows
    /// such as cruise ships or "to be confirmed" areas. Selected in code by
    /// setting `PipelineConfig::province_mode`, never from the command line.
    #[allow(dead_code)]
    KnownFullNames,
}

pub fn summarize_provinces(table: &RawAreaTable, mode: ProvinceMode) -> Vec<ProvinceDailySummary> {
    let selected = table
        .records()
        .iter()
        .filter(|r| mode == ProvinceMode::All || matches_known_full_name(&r.province_name));
    let kept = keep_first(selected, |r| (r.province_name.clone(), r.update_time.clone()));
    debug!("{} province rows after dedupe ({:?})", kept.len(), mode);

    kept.into_iter()
        .map(|r| ProvinceDailySummary {
            name: r.province_name.clone(),
            confirmed: r.province_confirmed.clone(),
            suspected: r.province_suspected.clone(),
            discharged: r.province_cured.clone(),
            deceased: r.province_dead.clone(),
            updated_at_date: r.update_time.clone(),
        })
        .collect()
}

pub fn write_province_table(path: &Path, rows: &[ProvinceDailySummary]) -> Result<(), PipelineError> {
    write_csv(path, &SUMMARY_HEADER, rows)
}
