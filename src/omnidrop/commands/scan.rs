use crate::commands::CmdMessage;
use crate::error::{OmnidropError, Result};
use crate::model::InputBuffer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct ScanResult {
    pub buffers: Vec<InputBuffer>,
    pub messages: Vec<CmdMessage>,
}

/// Collect input buffers from files and directories, in argument order.
///
/// Files given explicitly are always read. Directories are scanned one level
/// deep for files whose extension is in `extensions`, sorted by name.
pub fn run(paths: &[PathBuf], extensions: &[String]) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    for path in paths {
        if path.is_dir() {
            let files = match matching_files(path, extensions) {
                Ok(files) => files,
                Err(e) => {
                    warn!(dir = %path.display(), error = %e, "could not scan directory");
                    result.messages.push(CmdMessage::warning(format!(
                        "Failed to scan {}: {}",
                        path.display(),
                        e
                    )));
                    continue;
                }
            };
            if files.is_empty() {
                result.messages.push(CmdMessage::warning(format!(
                    "No matching files in {}",
                    path.display()
                )));
            }
            for file in files {
                read_into(&file, &mut result);
            }
        } else if path.is_file() {
            read_into(path, &mut result);
        } else {
            warn!(path = %path.display(), "input path not found");
            result.messages.push(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    Ok(result)
}

fn matching_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(OmnidropError::Io)? {
        let entry = entry.map_err(OmnidropError::Io)?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), count = files.len(), "scanned directory");
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext_str = format!(".{}", ext.to_string_lossy().to_lowercase());
            extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext_str))
        }
        None => false,
    }
}

fn read_into(path: &Path, result: &mut ScanResult) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match fs::read(path) {
        Ok(bytes) => {
            debug!(file = %name, bytes = bytes.len(), "read input");
            result.buffers.push(InputBuffer::new(name, bytes));
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "could not read input");
            result.messages.push(CmdMessage::warning(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )));
        }
    }
}
