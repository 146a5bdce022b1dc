//! Error types for the course catalog.
//!
//! Lookups that miss are *not* errors: every `find` returns `Option`. The
//! only failures in the core are benchmark preconditions. Ingestion has its
//! own error type since it touches the filesystem.

use std::path::PathBuf;

/// Errors raised by the catalog core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A benchmark was requested over no records
    #[error("no dataset loaded for benchmarking")]
    EmptyDataset,

    /// A benchmark was requested with zero trials
    #[error("benchmark requires at least one trial")]
    ZeroTrials,
}

/// Errors raised while loading records from comma-separated text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path being read (`-` for non-file readers)
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A row could not be read or decoded
    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        /// Path being read (`-` for non-file readers)
        path: PathBuf,
        /// Underlying reader failure
        #[source]
        source: csv::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::EmptyDataset.to_string(),
            "no dataset loaded for benchmarking"
        );

        let err = LoadError::Io {
            path: PathBuf::from("courses.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read courses.csv: missing");
    }
}
