//! Data structures for representing the input.

use crate::aliases::Aliases;
use crate::errors::{self, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

/// Which seasons to read, oldest first.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Standings files, one per season; the last one is the current season.
    pub files: Vec<String>,
    /// Name variants, lowercase variant to canonical name.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl Config {
    pub fn from_file(filename: &str) -> Result<Config> {
        let data = fs::read_to_string(filename).map_err(|e| errors::read_failed(filename, e))?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|e| errors::invalid_input(format!("{filename}: {e}")))?;
        Ok(config)
    }

    /// Inline aliases, extended with the ones in `alias_file` if given.
    pub fn aliases(&self, alias_file: Option<&str>) -> Result<Aliases> {
        let mut aliases = Aliases::from_map(self.aliases.clone());
        if let Some(filename) = alias_file {
            aliases.merge(Aliases::from_file(filename)?);
        }
        Ok(aliases)
    }
}

/// One season's standings table, as extracted from its file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Season {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn config_without_aliases() {
        let config: Config =
            serde_json::from_str(r#"{"files": ["2017/doty.html", "2018/doty.html"]}"#).unwrap();
        assert_eq!(config.files, vec!["2017/doty.html", "2018/doty.html"]);
        assert!(config.aliases(None).unwrap().is_empty());
    }

    #[test]
    fn config_with_aliases() {
        let config: Config = serde_json::from_str(
            r#"{"files": ["a.html"], "aliases": {"Phil Ethier": "Philip Ethier"}}"#,
        )
        .unwrap();
        let aliases = config.aliases(None).unwrap();
        assert_eq!(aliases.normalize("phil ethier"), "Philip Ethier");
    }

    #[test]
    fn config_requires_files() {
        assert!(serde_json::from_str::<Config>(r#"{"aliases": {}}"#).is_err());
    }

    #[test]
    fn missing_alias_file() {
        let config = Config {
            files: vec![],
            aliases: HashMap::new(),
        };
        assert!(config.aliases(Some("no-such-dir/aliases.json")).is_err());
    }
}
