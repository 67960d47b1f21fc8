use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// One named input file, as handed to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl InputBuffer {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// A single article object from an Omnivore export array.
///
/// Every attribute is optional at this level. Missing values are filled in
/// when the record is turned into a [`BookmarkEntry`]; a record without a
/// `url` is never turned into one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default, rename = "savedAt", deserialize_with = "string_only")]
    pub saved_at: Option<String>,
}

/// Any non-string value reads as absent.
fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Strings as-is, other non-null values as their JSON text.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// A rendered-ready bookmark. Title, url and tags are already escaped;
/// the description is kept as found in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    pub title: String,
    pub url: String,
    pub time_added: String,
    pub tags: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    InvalidJson,
    InvalidFormat,
    Other(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::InvalidJson => write!(f, "Invalid JSON"),
            FailureReason::InvalidFormat => write!(f, "Invalid format"),
            FailureReason::Other(message) => write!(f, "{}", message),
        }
    }
}

/// What happened to one input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { name: String, articles: usize },
    Failed { name: String, reason: FailureReason },
}

/// Per-call conversion report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub files_processed: usize,
    pub articles_converted: usize,
    pub processed: Vec<String>,
    pub failed: Vec<String>,
}

impl ConversionStats {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted { name, articles } => {
                self.articles_converted += articles;
                self.processed
                    .push(format!("{} ({} articles)", name, articles));
                self.files_processed += 1;
            }
            FileOutcome::Failed { name, reason } => {
                self.failed.push(format!("{} ({})", name, reason));
            }
        }
    }

    /// True when nothing ended up in the document.
    pub fn is_empty(&self) -> bool {
        self.articles_converted == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_known_fields() {
        let json = r#"{
            "url": "https://x.test/a",
            "title": "A",
            "description": "desc",
            "labels": ["news", "tech"],
            "savedAt": "2023-05-01T10:00:00Z",
            "slug": "ignored"
        }"#;
        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.url.as_deref(), Some("https://x.test/a"));
        assert_eq!(record.title.as_deref(), Some("A"));
        assert_eq!(record.description.as_deref(), Some("desc"));
        assert_eq!(
            record.labels,
            Some(vec!["news".to_string(), "tech".to_string()])
        );
        assert_eq!(record.saved_at.as_deref(), Some("2023-05-01T10:00:00Z"));
    }

    #[test]
    fn record_defaults_missing_and_null_fields() {
        let record: ArticleRecord = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(record, ArticleRecord::default());
    }

    #[test]
    fn record_tolerates_odd_saved_at_and_description() {
        let record: ArticleRecord = serde_json::from_str(
            r#"{"url": "u", "savedAt": 1682935200, "description": 5}"#,
        )
        .unwrap();
        assert_eq!(record.saved_at, None);
        assert_eq!(record.description.as_deref(), Some("5"));

        let record: ArticleRecord =
            serde_json::from_str(r#"{"url": "u", "savedAt": {"at": 1}, "description": true}"#)
                .unwrap();
        assert_eq!(record.saved_at, None);
        assert_eq!(record.description.as_deref(), Some("true"));
    }

    #[test]
    fn record_rejects_wrong_types() {
        let err = serde_json::from_str::<ArticleRecord>(r#"{"url": "u", "labels": "x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn stats_fold_outcomes_in_order() {
        let mut stats = ConversionStats::default();
        stats.record(FileOutcome::Converted {
            name: "a.json".into(),
            articles: 2,
        });
        stats.record(FileOutcome::Failed {
            name: "b.json".into(),
            reason: FailureReason::InvalidJson,
        });
        stats.record(FileOutcome::Converted {
            name: "c.json".into(),
            articles: 0,
        });
        stats.record(FileOutcome::Failed {
            name: "d.json".into(),
            reason: FailureReason::Other("boom".into()),
        });

        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.articles_converted, 2);
        assert_eq!(stats.processed, vec!["a.json (2 articles)", "c.json (0 articles)"]);
        assert_eq!(stats.failed, vec!["b.json (Invalid JSON)", "d.json (boom)"]);
        assert!(!stats.is_empty());
    }

    #[test]
    fn failure_reason_display() {
        assert_eq!(FailureReason::InvalidJson.to_string(), "Invalid JSON");
        assert_eq!(FailureReason::InvalidFormat.to_string(), "Invalid format");
    }
}
