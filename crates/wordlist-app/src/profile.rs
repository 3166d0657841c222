use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use wordlist_config::Config;

/// Load a JSON config profile; fields it omits take their defaults
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config profile {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse config profile {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_load_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(
            &path,
            r#"{ "input_path": "toefl.txt", "log": { "level": "debug" } }"#,
        )
        .unwrap();

        let config = load_profile(&path).unwrap();
        assert_eq!(config.input_path, PathBuf::from("toefl.txt"));
        assert_eq!(config.output_path, PathBuf::from("words.csv"));
        assert_eq!(config.log.level, "debug");
        assert!(!config.log.json);
    }

    #[test]
    fn test_load_profile_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_profile(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = load_profile(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
