//! Star ledger - persistent cross-level progress.
//!
//! Stars earned by finishing levels survive across sessions. The ledger
//! has an explicit load/save lifecycle and is injected into the driving
//! loop; nothing in the engine reaches for ambient global state.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarLedger {
    stars: u32,
}

impl StarLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stars(&self) -> u32 {
        self.stars
    }

    pub fn add_star(&mut self) {
        self.stars += 1;
    }

    pub fn reset(&mut self) {
        self.stars = 0;
    }

    /// Load the ledger from `path`. A missing file is a fresh ledger;
    /// a malformed one is an error rather than a silent reset.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the ledger to `path` as JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("gridfall-test-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_loads_fresh_ledger() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        let ledger = StarLedger::load(&path).unwrap();
        assert_eq!(ledger.stars(), 0);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = temp_path("roundtrip");
        let mut ledger = StarLedger::new();
        ledger.add_star();
        ledger.add_star();
        ledger.save(&path).unwrap();

        let loaded = StarLedger::load(&path).unwrap();
        assert_eq!(loaded, ledger);
        assert_eq!(loaded.stars(), 2);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json at all").unwrap();
        assert!(StarLedger::load(&path).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_reset() {
        let mut ledger = StarLedger::new();
        ledger.add_star();
        ledger.reset();
        assert_eq!(ledger.stars(), 0);
    }
}
