//! Omnivore export -> bookmark document.
//!
//! Each buffer is converted on its own and folded into the stats as a
//! [`FileOutcome`]. A buffer either contributes all of its entries or none:
//! entries are staged and only pushed into the document once the whole array
//! has been read. Nothing in here can fail the whole run.

use crate::document::{escape_html, BookmarkDocument, DocumentBuilder};
use crate::model::{
    ArticleRecord, BookmarkEntry, ConversionStats, FailureReason, FileOutcome, InputBuffer,
};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde_json::Value;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Convert buffers in order. Records without `savedAt` get the local time
/// at the moment they are processed.
pub fn run(buffers: &[InputBuffer]) -> (BookmarkDocument, ConversionStats) {
    convert_with(buffers, || Local::now().naive_local())
}

/// Same as [`run`], with a fixed fallback timestamp.
pub fn run_at(buffers: &[InputBuffer], now: NaiveDateTime) -> (BookmarkDocument, ConversionStats) {
    convert_with(buffers, || now)
}

fn convert_with<F>(buffers: &[InputBuffer], now: F) -> (BookmarkDocument, ConversionStats)
where
    F: Fn() -> NaiveDateTime,
{
    let mut builder = DocumentBuilder::new();
    let mut stats = ConversionStats::default();

    for buffer in buffers {
        let outcome = match convert_buffer(buffer, &now) {
            Ok(entries) => {
                for entry in &entries {
                    builder.push_entry(entry);
                }
                FileOutcome::Converted {
                    name: buffer.name.clone(),
                    articles: entries.len(),
                }
            }
            Err(reason) => FileOutcome::Failed {
                name: buffer.name.clone(),
                reason,
            },
        };
        stats.record(outcome);
    }

    (builder.finish(), stats)
}

/// Entries of one buffer, in array order.
fn convert_buffer<F>(buffer: &InputBuffer, now: &F) -> Result<Vec<BookmarkEntry>, FailureReason>
where
    F: Fn() -> NaiveDateTime,
{
    let text = std::str::from_utf8(&buffer.bytes).map_err(|_| FailureReason::InvalidJson)?;
    let value: Value = serde_json::from_str(text).map_err(|_| FailureReason::InvalidJson)?;

    let items = match value {
        Value::Array(items) => items,
        _ => return Err(FailureReason::InvalidFormat),
    };

    let mut entries = Vec::with_capacity(items.len());

    for (i, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(FailureReason::Other(format!(
                "article {} is not an object",
                i + 1
            )));
        }
        let record: ArticleRecord = serde_json::from_value(item)
            .map_err(|e| FailureReason::Other(format!("article {}: {}", i + 1, e)))?;

        if let Some(entry) = build_entry(record, now) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Turn a record into an entry, or `None` when it has no url.
pub fn build_entry<F>(record: ArticleRecord, now: &F) -> Option<BookmarkEntry>
where
    F: Fn() -> NaiveDateTime,
{
    let url = record.url?;

    let title = escape_html(record.title.as_deref().unwrap_or(&url));
    let tags = match record.labels {
        Some(labels) if !labels.is_empty() => escape_html(&labels.join(",")),
        _ => String::new(),
    };
    let time_added = record
        .saved_at
        .as_deref()
        .and_then(parse_saved_at)
        .unwrap_or_else(now)
        .format(TIME_FORMAT)
        .to_string();

    Some(BookmarkEntry {
        title,
        url: escape_html(&url),
        time_added,
        tags,
        description: record.description.unwrap_or_default(),
    })
}

/// Parse an ISO-8601 `savedAt` value. The wall-clock time is kept as
/// written; offsets are accepted but not applied.
pub fn parse_saved_at(raw: &str) -> Option<NaiveDateTime> {
    let normalized = match raw.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => raw.to_string(),
    };

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Some(dt.naive_local());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
