// Fixed run configuration. The pipeline takes no flags or environment
// variables; everything a run touches is named here.
use std::path::PathBuf;

use crate::province::ProvinceMode;

pub const SOURCE_URL: &str =
    "https://github.com/BlankerL/DXY-2019-nCoV-Data/raw/master/csv/DXYArea.csv";

/// Payloads at or below this size are treated as a failed download.
pub const MIN_FETCH_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source_url: String,
    pub data_dir: PathBuf,
    pub area_filename: String,
    pub province_filename: String,
    pub city_dirname: String,
    pub min_fetch_bytes: usize,
    pub province_mode: ProvinceMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig::with_data_dir("public/data")
    }
}

impl PipelineConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            source_url: SOURCE_URL.to_string(),
            data_dir: data_dir.into(),
            area_filename: "DXYArea.csv".to_string(),
            province_filename: "provinces.csv".to_string(),
            city_dirname: "provinces".to_string(),
            min_fetch_bytes: MIN_FETCH_BYTES,
            province_mode: ProvinceMode::All,
        }
    }

    pub fn area_path(&self) -> PathBuf {
        self.data_dir.join(&self.area_filename)
    }

    pub fn province_path(&self) -> PathBuf {
        self.data_dir.join(&self.province_filename)
    }

    pub fn city_dir(&self) -> PathBuf {
        self.data_dir.join(&self.city_dirname)
    }
}
