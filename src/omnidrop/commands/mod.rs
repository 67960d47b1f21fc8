use crate::config::OmnidropConfig;
use crate::document::BookmarkDocument;
use crate::model::ConversionStats;
use std::path::PathBuf;

pub mod config;
pub mod convert;
pub mod export;
pub mod scan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub document: Option<BookmarkDocument>,
    pub stats: Option<ConversionStats>,
    pub written: Option<PathBuf>,
    pub link: Option<String>,
    pub config: Option<OmnidropConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_conversion(mut self, document: BookmarkDocument, stats: ConversionStats) -> Self {
        self.document = Some(document);
        self.stats = Some(stats);
        self
    }

    pub fn with_written(mut self, path: PathBuf) -> Self {
        self.written = Some(path);
        self
    }

    pub fn with_link(mut self, link: String) -> Self {
        self.link = Some(link);
        self
    }

    pub fn with_config(mut self, config: OmnidropConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_messages(mut self, messages: Vec<CmdMessage>) -> Self {
        self.messages.extend(messages);
        self
    }
}
