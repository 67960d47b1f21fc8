use crate::error::{OmnidropError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_OUTPUT_FILE: &str = "Raindrop_import.html";

/// Configuration for omnidrop, stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OmnidropConfig {
    /// File the bookmark document is written to
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Extensions picked up when scanning a directory (e.g. ".json")
    #[serde(default = "default_input_ext")]
    pub input_extensions: Vec<String>,
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_input_ext() -> Vec<String> {
    vec![".json".to_string()]
}

impl Default for OmnidropConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            input_extensions: default_input_ext(),
        }
    }
}

impl OmnidropConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OmnidropError::Io)?;
        let config: OmnidropConfig =
            serde_json::from_str(&content).map_err(OmnidropError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(OmnidropError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(OmnidropError::Serialization)?;
        fs::write(config_path, content).map_err(OmnidropError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output-file" => Some(self.output_file.clone()),
            "input-extensions" => Some(self.input_extensions.join(",")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output-file" => {
                if value.trim().is_empty() {
                    return Err(OmnidropError::Config("output-file cannot be empty".into()));
                }
                self.output_file = value.trim().to_string();
            }
            "input-extensions" => {
                let exts: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(normalize_ext)
                    .collect();
                if exts.is_empty() {
                    return Err(OmnidropError::Config(
                        "input-extensions needs at least one extension".into(),
                    ));
                }
                self.input_extensions = exts;
            }
            other => {
                return Err(OmnidropError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["output-file", "input-extensions"]
    }
}

/// Extensions are compared with a leading dot.
fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_lowercase()
    } else {
        format!(".{}", ext.to_lowercase())
    }
}
