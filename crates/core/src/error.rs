use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for every embedding operation.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The payload file could not be opened or read.
    #[error("Failed to read payload {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated unit could not be written to its destination.
    #[error("Failed to write generated unit {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The identifier would not compile as a C identifier.
    #[error("Invalid identifier `{name}`: {reason}")]
    InvalidIdentifier { name: String, reason: &'static str },

    #[error("Failed to read manifest {}: {source}", .path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse manifest {}: {message}", .path.display())]
    ParseManifest { path: PathBuf, message: String },

    /// Manifest extension is not one of json/yaml/yml.
    #[error("Unsupported manifest format for {} (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedManifestFormat { path: PathBuf },

    #[error("Manifest {} lists no targets", .path.display())]
    EmptyManifest { path: PathBuf },
}

/// Convenience result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;
