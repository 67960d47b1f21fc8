//! # API Facade
//!
//! Thin entry point over the command layer. UI clients (the CLI today) go
//! through `OmnidropApi`; it dispatches to `commands::*`, fills in defaults
//! from the loaded configuration and returns `CmdResult` values. It never
//! prints.

use crate::commands;
use crate::commands::export::Delivery;
use crate::config::OmnidropConfig;
use crate::error::{OmnidropError, Result};
use crate::model::InputBuffer;
use std::path::{Path, PathBuf};

pub struct OmnidropApi {
    config: OmnidropConfig,
    config_dir: PathBuf,
}

impl OmnidropApi {
    pub fn new(config: OmnidropConfig, config_dir: PathBuf) -> Self {
        Self { config, config_dir }
    }

    /// Load the config found in `config_dir` (defaults when absent).
    pub fn open<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();
        let config = OmnidropConfig::load(&config_dir)?;
        Ok(Self::new(config, config_dir))
    }

    pub fn settings(&self) -> &OmnidropConfig {
        &self.config
    }

    pub fn convert_buffers(&self, buffers: &[InputBuffer]) -> commands::CmdResult {
        let (document, stats) = commands::convert::run(buffers);
        commands::CmdResult::default().with_conversion(document, stats)
    }

    /// Read the given files and directories, then convert what was found.
    pub fn convert_paths(&self, paths: &[PathBuf]) -> Result<commands::CmdResult> {
        let scanned = commands::scan::run(paths, &self.config.input_extensions)?;
        Ok(self
            .convert_buffers(&scanned.buffers)
            .with_messages(scanned.messages))
    }

    /// Write a conversion result to `output`, or to the configured file.
    pub fn export(
        &self,
        converted: &commands::CmdResult,
        output: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        let path = output.unwrap_or_else(|| PathBuf::from(&self.config.output_file));
        self.deliver(converted, Delivery::File(path))
    }

    pub fn download_link(&self, converted: &commands::CmdResult) -> Result<commands::CmdResult> {
        let filename = self.config.output_file.clone();
        self.deliver(converted, Delivery::Link { filename })
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    fn deliver(
        &self,
        converted: &commands::CmdResult,
        delivery: Delivery,
    ) -> Result<commands::CmdResult> {
        match (&converted.document, &converted.stats) {
            (Some(document), Some(stats)) => commands::export::run(document, stats, delivery),
            _ => Err(OmnidropError::Api(
                "Nothing to export: result holds no conversion".into(),
            )),
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn api(dir: &Path) -> OmnidropApi {
        OmnidropApi::new(OmnidropConfig::default(), dir.join(".omnidrop"))
    }

    #[test]
    fn convert_buffers_returns_document_and_stats() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path()).convert_buffers(&[InputBuffer::new(
            "a.json",
            r#"[{"url": "https://x.test"}]"#,
        )]);

        assert_eq!(result.document.unwrap().entry_count(), 1);
        assert_eq!(result.stats.unwrap().articles_converted, 1);
    }

    #[test]
    fn convert_paths_carries_scan_messages() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path())
            .convert_paths(&[dir.path().join("missing.json")])
            .unwrap();

        assert_eq!(result.stats.unwrap().files_processed, 0);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn export_uses_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());
        let converted =
            api.convert_buffers(&[InputBuffer::new("a.json", r#"[{"url": "https://x.test"}]"#)]);
        let out = dir.path().join("bookmarks.html");

        let result = api.export(&converted, Some(out.clone())).unwrap();
        assert_eq!(result.written, Some(out.clone()));
        assert!(fs::read_to_string(out).unwrap().contains("https://x.test"));
    }

    #[test]
    fn export_without_conversion_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = api(dir.path())
            .export(&CmdResult::default(), None)
            .unwrap_err();
        assert!(matches!(err, OmnidropError::Api(_)));
    }

    #[test]
    fn config_dispatches_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());
        api.config(ConfigAction::Set("output-file".into(), "x.html".into()))
            .unwrap();

        let reopened = OmnidropApi::open(dir.path().join(".omnidrop")).unwrap();
        assert_eq!(reopened.settings().output_file, "x.html");
    }
}
