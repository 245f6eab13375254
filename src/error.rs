use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failures that can stop a fetch or a transform run.
///
/// An unrecognized province name is deliberately absent: that partition is
/// skipped, not reported.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("raw area table is missing columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("fetched payload of {received} bytes is not above the {minimum} byte threshold")]
    FetchUndersized { received: usize, minimum: usize },
    #[error("http request failed: {0}")]
    Http(String),
    #[error("fetched payload is not valid utf-8: {0}")]
    Decode(#[from] FromUtf8Error),
}
