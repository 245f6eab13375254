// Entry point: refresh the raw area snapshot, then rebuild the province
// table and the per-province city tables from it.
//
// A failed or undersized download only skips the refresh; the transform
// still runs against whatever snapshot is already on disk.
mod city;
mod config;
mod dedupe;
mod error;
mod fetch;
mod loader;
mod naming;
mod output;
mod pipeline;
mod province;
mod types;
mod util;

use config::PipelineConfig;
use log::{error, warn};
use pipeline::TransformReport;
use std::process::ExitCode;

fn print_summary(report: &TransformReport) {
    println!(
        "Processing dataset... ({} rows loaded, {} province rows written)",
        util::format_int(report.rows_loaded),
        util::format_int(report.province_rows.len())
    );
    if report.rows_skipped > 0 {
        println!(
            "Note: {} rows skipped because they could not be read.",
            util::format_int(report.rows_skipped)
        );
    }
    if let Some((first, last)) = report.date_span {
        println!("Dates covered: {} to {}", first, last);
    }
    println!("");

    output::print_preview("Province Daily Summary", &report.province_rows, 3);

    println!(
        "City tables: {} files written, {} unrecognized provinces skipped\n",
        util::format_int(report.city_files.len()),
        util::format_int(report.skipped_provinces.len())
    );
    output::print_preview("City Daily Summary", &report.sample_city_rows, 3);
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();

    if let Err(e) = fetch::fetch_raw_snapshot(&config) {
        warn!("fetch step skipped: {}", e);
    }

    match pipeline::run_transform(&config) {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("transform failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
