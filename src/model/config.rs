use crate::model::comparison_mode::ComparisonMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_IGNORES: [&str; 8] = [
    "RCS",
    "CVS",
    "tags",
    ".git",
    ".hg",
    ".bzr",
    "_darcs",
    "__pycache__",
];

#[derive(Debug, Deserialize)]
pub struct ConfigTable {
    #[serde(rename = "Config")]
    pub config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub language: String,             // locale code or display name
    pub log_level: String,            // tracing filter directive
    pub log_directory: PathBuf,       // rolling log files
    pub comparison_mode: ComparisonMode,
    pub recursive: bool,              // descend into common subdirectories
    pub ignore: Vec<String>,          // entry names skipped on both sides
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en_US".to_string(),
            log_level: "info".to_string(),
            log_directory: PathBuf::from("./logs"),
            comparison_mode: ComparisonMode::default(),
            recursive: false,
            ignore: DEFAULT_IGNORES.iter().map(|name| name.to_string()).collect(),
        }
    }
}
