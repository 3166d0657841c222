use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;

pub mod log;

fn default_input_path() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("words.csv")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vocabulary list to read
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    /// CSV file to create or truncate
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Build config from the process environment, falling back to defaults
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let input_path = var("WORDLIST_INPUT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_input_path);

        let output_path = var("WORDLIST_OUTPUT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_output_path);

        Config {
            input_path,
            output_path,
            log: LogConfig::from_vars(&var),
        }
    }
}
