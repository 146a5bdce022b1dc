//! Runtime settings for the CLI and benchmark runs.
//!
//! Settings come from an optional TOML file. Missing keys take defaults:
//!
//! ```toml
//! trials = 5
//! scaling_trials = 3
//! sizes = [100, 1000, 5000]
//! prefix = "CSCI"
//! seed = 42
//! shuffle = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::bench::synthetic::{DEFAULT_PREFIX, DEFAULT_SEED};
use crate::bench::SyntheticGenerator;

/// Benchmark and generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Trials per structure when benchmarking a loaded dataset
    pub trials: usize,

    /// Trials per structure per size in scaling runs
    pub scaling_trials: usize,

    /// Dataset sizes for scaling runs
    pub sizes: Vec<usize>,

    /// Identifier prefix for generated records
    pub prefix: String,

    /// Seed for generated records
    pub seed: u64,

    /// Shuffle generated records before insertion
    pub shuffle: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trials: 5,
            scaling_trials: 3,
            sizes: vec![100, 1_000, 5_000],
            prefix: DEFAULT_PREFIX.to_string(),
            seed: DEFAULT_SEED,
            shuffle: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid settings
    /// TOML.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is invalid.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Generator described by these settings
    pub fn generator(&self) -> SyntheticGenerator {
        SyntheticGenerator::new(self.prefix.clone(), self.seed).shuffled(self.shuffle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();

        assert_eq!(settings.trials, 5);
        assert_eq!(settings.scaling_trials, 3);
        assert_eq!(settings.sizes, vec![100, 1_000, 5_000]);
        assert_eq!(settings.generator(), SyntheticGenerator::default());
    }

    #[test]
    fn test_settings_partial_toml() {
        let settings = Settings::from_toml("trials = 2\nshuffle = true\n").unwrap();

        assert_eq!(settings.trials, 2);
        assert!(settings.shuffle);
        assert_eq!(settings.prefix, "CSCI");
        assert_eq!(settings.seed, 42);
    }

    #[test]
    fn test_settings_empty_toml() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_settings_rejects_unknown_keys() {
        let err = Settings::from_toml("trails = 3").unwrap_err();
        assert!(err.starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_settings_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sizes = [10, 20]").unwrap();
        writeln!(file, "prefix = \"MATH\"").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.sizes, vec![10, 20]);
        assert_eq!(settings.generator().identifier(0), "MATH1000");
    }
}
