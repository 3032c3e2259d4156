//! JSON and CSV output for flat reply records.

use log::info;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReplyFetchError;
use crate::merge::FlatReplyRecord;

/// Paths of the files written for one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFiles {
    pub json_file: PathBuf,
    /// `None` when there were no records to put in a CSV.
    pub csv_file: Option<PathBuf>,
}

pub fn json_file_name(tweet_id: &str) -> String {
    format!("twitter_replies_{}.json", tweet_id)
}

pub fn csv_file_name(tweet_id: &str) -> String {
    format!("twitter_replies_{}.csv", tweet_id)
}

/// Escapes one CSV field.
///
/// Values containing a comma, a double quote, or a newline are wrapped in quotes
/// with embedded quotes doubled. Everything else is returned as is.
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Renders records as CSV: a header row of field names, then one row per record.
///
/// The header follows the field order of the first record. Lines are joined
/// with `\n` and there is no trailing newline. Returns `None` for no records.
pub fn render_csv(records: &[FlatReplyRecord]) -> Result<Option<String>, ReplyFetchError> {
    let rows = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<Value>, _>>()?;

    let Some(Value::Object(first)) = rows.first() else {
        return Ok(None);
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in &rows {
        let line = headers
            .iter()
            .map(|h| escape_csv(&row.get(h).map(cell_text).unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    Ok(Some(lines.join("\n")))
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf, ReplyFetchError> {
    fs::write(path, contents).map_err(|source| ReplyFetchError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
}

/// Writes `twitter_replies_<id>.json` and, if there are records, `twitter_replies_<id>.csv`.
///
/// # Parameters
///
/// - `records`: The flat records to save
/// - `tweet_id`: The conversation ID used in the file names
/// - `output_dir`: Directory the files are created in
///
/// # Returns
///
/// - `Ok(SavedFiles)`: Absolute paths of what was written
/// - `Err(ReplyFetchError)`: If serialization or a file write fails
pub fn save_files(
    records: &[FlatReplyRecord],
    tweet_id: &str,
    output_dir: &Path,
) -> Result<SavedFiles, ReplyFetchError> {
    let json_path = output_dir.join(json_file_name(tweet_id));
    let json = serde_json::to_string_pretty(records)?;
    let json_file = write_file(&json_path, &json)?;
    info!("Saved JSON: {}", json_path.display());

    let csv_file = match render_csv(records)? {
        Some(csv) => {
            let csv_path = output_dir.join(csv_file_name(tweet_id));
            let written = write_file(&csv_path, &csv)?;
            info!("Saved CSV: {}", csv_path.display());
            Some(written)
        }
        None => None,
    };

    Ok(SavedFiles {
        json_file,
        csv_file,
    })
}
