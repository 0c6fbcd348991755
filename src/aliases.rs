//! Canonical driver names.

use crate::errors::{self, Result};
use log::debug;
use std::collections::HashMap;
use std::fs;

/// Maps lowercase name variants to the canonical spelling of a driver name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Aliases {
    map: HashMap<String, String>,
}

impl Aliases {
    pub fn new() -> Aliases {
        Aliases::default()
    }

    /// Keys are lowercased, so the table may be written in any case.
    pub fn from_map(map: HashMap<String, String>) -> Aliases {
        let mut aliases = Aliases::new();
        aliases.extend(map);
        aliases
    }

    /// Read a JSON object of `"variant": "Canonical Name"` pairs.
    pub fn from_file(filename: &str) -> Result<Aliases> {
        let data = fs::read_to_string(filename).map_err(|e| errors::read_failed(filename, e))?;
        let map: HashMap<String, String> = serde_json::from_str(&data)
            .map_err(|e| errors::invalid_input(format!("{filename}: {e}")))?;
        debug!(target: "doty", "{}: {} aliases", filename, map.len());
        Ok(Aliases::from_map(map))
    }

    /// Add entries, replacing existing ones for the same variant.
    pub fn extend(&mut self, map: HashMap<String, String>) {
        for (variant, canonical) in map {
            self.map.insert(variant.to_lowercase(), canonical);
        }
    }

    /// Add the entries of `other`, which take precedence.
    pub fn merge(&mut self, other: Aliases) {
        self.map.extend(other.map);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The canonical name for `name`, or `name` itself if it has no alias.
    pub fn normalize(&self, name: &str) -> String {
        match self.map.get(&name.to_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => name.to_owned(),
        }
    }
}
