use std::path::Path;

use anyhow::{Context, Result};
use fxhash::FxHashMap;
use log::warn;

const DALE_SAFE: &str = "Dale";
const DALE_UTF8: &str = "Dal\u{e9}";
const FULL_DALE_SAFE: &str = "Miami Dale";
const FULL_DALE_UTF8: &str = "Miami Dal\u{e9}";

/// Swaps the accented Dale names for their plain spelling, which is easier to type on a command line.
pub fn sanitize_dale(s: &str) -> &str {
    match s {
        DALE_UTF8 => DALE_SAFE,
        FULL_DALE_UTF8 => FULL_DALE_SAFE,
        _ => s,
    }
}

pub fn same_team(a: &str, b: &str) -> bool {
    sanitize_dale(a) == sanitize_dale(b)
}

/// Team nickname to full name lookup.
#[derive(Clone, Debug, Default)]
pub struct TeamNames {
    short_to_long: FxHashMap<String, String>,
}

impl TeamNames {
    pub fn from_json(json: &str) -> Result<Self> {
        let short_to_long = serde_json::from_str::<FxHashMap<String, String>>(json)
            .context("Team names file was not a JSON object of nickname to full name")?;
        Ok(Self { short_to_long })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Missing team nickname to full name data file: {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Full name for `nickname`, falling back to the nickname itself.
    pub fn full_name<'a>(&'a self, nickname: &'a str) -> &'a str {
        match self
            .short_to_long
            .get(nickname)
            .or_else(|| self.short_to_long.get(sanitize_dale(nickname)))
        {
            Some(full) => full,
            None => {
                if !self.short_to_long.is_empty() {
                    warn!("No full name known for {nickname}");
                }
                nickname
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dale_is_sanitized() {
        assert_eq!(sanitize_dale("Dal\u{e9}"), "Dale");
        assert_eq!(sanitize_dale("Miami Dal\u{e9}"), "Miami Dale");
        assert_eq!(sanitize_dale("Tigers"), "Tigers");
        assert!(same_team("Dale", "Dal\u{e9}"));
        assert!(!same_team("Dale", "Tigers"));
    }

    #[test]
    fn full_names_fall_back_to_nickname() {
        let names = TeamNames::from_json(r#"{"Millennials": "New York Millennials", "Dale": "Miami Dale"}"#).unwrap();
        assert_eq!(names.full_name("Millennials"), "New York Millennials");
        assert_eq!(names.full_name("Dal\u{e9}"), "Miami Dale");
        assert_eq!(names.full_name("Crabs"), "Crabs");
        assert_eq!(TeamNames::default().full_name("Crabs"), "Crabs");
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(TeamNames::from_json("[1, 2]").is_err());
    }
}
