use crate::config::PipelineConfig;
use crate::error::PipelineError;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// The raw file runs to tens of megabytes; ureq's default body cap is 10 MB.
const MAX_BODY_BYTES: u64 = 1024 * 1024 * 1024;

/// Downloads the raw area file and replaces the stored snapshot if the
/// payload is large enough. Returns the number of bytes written.
pub fn fetch_raw_snapshot(config: &PipelineConfig) -> Result<usize, PipelineError> {
    info!("fetching raw area table from {}", config.source_url);
    let response = ureq::get(&config.source_url)
        .call()
        .map_err(|err| PipelineError::Http(format!("GET {} failed: {err}", config.source_url)))?;

    let bytes = response
        .into_body()
        .with_config()
        .limit(MAX_BODY_BYTES)
        .read_to_vec()
        .map_err(|err| PipelineError::Http(format!("failed reading response body: {err}")))?;

    store_snapshot(bytes, &config.area_path(), config.min_fetch_bytes)
}

/// Writes `bytes` to `path` only when there are more than `min_bytes` of
/// them. An undersized payload leaves the existing file alone.
pub fn store_snapshot(bytes: Vec<u8>, path: &Path, min_bytes: usize) -> Result<usize, PipelineError> {
    let received = bytes.len();
    if received <= min_bytes {
        warn!(
            "fetched payload of {} bytes is too small, keeping {}",
            received,
            path.display()
        );
        return Err(PipelineError::FetchUndersized { received, minimum: min_bytes });
    }

    let text = String::from_utf8(bytes)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text.as_bytes())?;
    info!("stored {} bytes at {}", received, path.display());
    Ok(received)
}
