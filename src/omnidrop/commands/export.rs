use crate::commands::{CmdMessage, CmdResult};
use crate::document::{escape_html, BookmarkDocument};
use crate::error::{OmnidropError, Result};
use crate::model::ConversionStats;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const NOTHING_TO_EXPORT: &str = "No articles converted, nothing to export.";

/// How the finished document should reach the user.
#[derive(Debug, Clone)]
pub enum Delivery {
    File(PathBuf),
    Link { filename: String },
}

/// Deliver the document, or report that there is nothing to deliver.
pub fn run(
    document: &BookmarkDocument,
    stats: &ConversionStats,
    delivery: Delivery,
) -> Result<CmdResult> {
    if stats.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info(NOTHING_TO_EXPORT));
        return Ok(res);
    }

    match delivery {
        Delivery::File(path) => {
            write_document(document, &path)?;
            info!(path = %path.display(), articles = stats.articles_converted, "wrote bookmark file");
            let mut result = CmdResult::default().with_written(path.clone());
            result.add_message(CmdMessage::success(format!(
                "Exported to {}",
                path.display()
            )));
            Ok(result)
        }
        Delivery::Link { filename } => {
            Ok(CmdResult::default().with_link(download_link(document, &filename)))
        }
    }
}

pub fn write_document(document: &BookmarkDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(OmnidropError::Io)?;
        }
    }
    fs::write(path, document.as_str()).map_err(OmnidropError::Io)?;
    Ok(())
}

/// An anchor carrying the document as a base64 `data:` URI.
pub fn download_link(document: &BookmarkDocument, filename: &str) -> String {
    let b64 = STANDARD.encode(document.as_str().as_bytes());
    format!(
        "<a href=\"data:text/html;base64,{}\" download=\"{}\">Download HTML File</a>",
        b64,
        escape_html(filename)
    )
}
