use crate::error::PipelineError;
use crate::util::format_int;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

/// Writes `header` then one line per row, replacing any existing file.
///
/// The header is written explicitly so an empty table still gets one.
pub fn write_csv<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(header)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Markdown table of the first `max_rows` rows, headed by `title` and the
/// shown/total count. `None` for an empty table.
pub fn render_preview<T: Tabled>(title: &str, rows: &[T], max_rows: usize) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    let shown = rows.len().min(max_rows);
    let table = Table::new(&rows[..shown]).with(Style::markdown()).to_string();
    Some(format!(
        "{} ({} of {} rows)\n\n{}",
        title,
        format_int(shown),
        format_int(rows.len()),
        table
    ))
}

pub fn print_preview<T: Tabled>(title: &str, rows: &[T], max_rows: usize) {
    match render_preview(title, rows, max_rows) {
        Some(text) => println!("{}\n", text),
        None => println!("{} (no rows)\n", title),
    }
}
