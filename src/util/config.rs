use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

const DEFAULT_PATHS: &[&str] = &["series-sleuth.yaml", ".series-sleuth.yaml"];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Json,
}

/// Settings read from a YAML config file. Every key is optional; command line flags win.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub game_id: Option<String>,
    pub team: Option<String>,
    pub season: Option<u32>,
    pub day: Option<u32>,
    pub format: Option<Format>,
    /// Games dataset path or URL.
    pub data: Option<String>,
    /// Nickname to full name JSON file.
    pub teams: Option<String>,
    #[serde(default)]
    pub copy: bool,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str::<Option<Self>>(yaml)?.unwrap_or_default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// The given config file, or else the first default one that exists, or else nothing.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        for default_path in DEFAULT_PATHS.iter().map(Path::new) {
            if default_path.exists() {
                info!("Loaded configuration from {}", default_path.display());
                return Self::from_file(default_path);
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_partial_yaml() {
        let config = Config::from_yaml("team: Tigers\nseason: 5\nformat: text\n").unwrap();
        assert_eq!(config.team.as_deref(), Some("Tigers"));
        assert_eq!(config.season, Some(5));
        assert_eq!(config.day, None);
        assert_eq!(config.format, Some(Format::Text));
        assert!(!config.copy);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::from_yaml("sesaon: 5\n").is_err());
    }

    #[test]
    fn explicit_file_must_exist() {
        assert!(Config::load_or_default(Some(Path::new("/definitely/not/here.yaml"))).is_err());
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "game_id: abc\ndata: games.json").unwrap();
        let config = Config::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.game_id.as_deref(), Some("abc"));
        assert_eq!(config.data.as_deref(), Some("games.json"));
    }
}
