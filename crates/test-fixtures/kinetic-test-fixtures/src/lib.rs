//! Shared JSON fixtures for tests and benches, indexed by `fixtures/manifest.json`.
//!
//! Each manifest section maps a fixture key to a path relative to the
//! workspace `fixtures/` directory.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    sequences: HashMap<String, String>,
    #[serde(rename = "export-configs")]
    export_configs: HashMap<String, String>,
}

/// One manifest section.
struct FixtureSet {
    kind: &'static str,
    entries: &'static HashMap<String, String>,
}

impl FixtureSet {
    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn path(&self, name: &str) -> Result<PathBuf> {
        let rel = self
            .entries
            .get(name)
            .with_context(|| format!("no {} fixture named '{name}'", self.kind))?;
        Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    fn json(&self, name: &str) -> Result<String> {
        let path = self.path(name)?;
        std::fs::read_to_string(&path)
            .with_context(|| format!("reading {} fixture {}", self.kind, path.display()))
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let text = self.json(name)?;
        serde_json::from_str(&text)
            .with_context(|| format!("decoding {} fixture '{name}'", self.kind))
    }
}

/// Beat sequences (`{ name, beats: [...] }`).
pub mod sequences {
    use super::*;

    fn set() -> FixtureSet {
        FixtureSet {
            kind: "sequence",
            entries: &MANIFEST.sequences,
        }
    }

    /// Fixture keys in sorted order.
    pub fn keys() -> Vec<String> {
        set().keys()
    }

    pub fn json(name: &str) -> Result<String> {
        set().json(name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        set().load(name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        set().path(name)
    }
}

/// Export configuration documents. Fields left out take `ExportConfig` defaults.
pub mod export_configs {
    use super::*;

    fn set() -> FixtureSet {
        FixtureSet {
            kind: "export config",
            entries: &MANIFEST.export_configs,
        }
    }

    pub fn keys() -> Vec<String> {
        set().keys()
    }

    pub fn json(name: &str) -> Result<String> {
        set().json(name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        set().load(name)
    }
}
