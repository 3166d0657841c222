use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of the human format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LogConfig {
    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let level = var("WORDLIST_LOG_LEVEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_level);

        let json = var("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Self { level, json }
    }
}
