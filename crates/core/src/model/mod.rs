//! Data model for a single embedding pass.
//!
//! - `BinaryPayload`: raw bytes read from a file, plus the path they came from.
//! - `EmissionRequest`: what to embed, under which identifier, and where to write it.
//! - `GeneratedUnit`: the rendered C source for one payload.
//! - `GenerationReport`: a serializable summary of one completed request.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emit::ident::identifier_from_path;

/// Ordered bytes read verbatim from an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPayload {
    source: PathBuf,
    bytes: Vec<u8>,
}

impl BinaryPayload {
    pub fn new(source: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self { source: source.into(), bytes }
    }

    /// Path as the caller gave it; this is what the header comment shows.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One `{source, identifier, destination}` tuple handed to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionRequest {
    pub source: PathBuf,
    pub name: String,
    pub output: PathBuf,
}

impl EmissionRequest {
    /// Request with an explicit identifier and the default destination
    /// (`<dir>/<file name with '.' -> '_'>_data.c`).
    pub fn new(source: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let source = source.into();
        let output = default_output_path(&source);
        Self { source, name: name.into(), output }
    }

    /// Request whose identifier and destination are both derived from the source path.
    pub fn from_source(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let name = identifier_from_path(&source);
        Self::new(source, name)
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Default destination for a payload: next to the input, named after it.
///
/// `user_programs/hello.elf` maps to `user_programs/hello_elf_data.c`.
pub fn default_output_path(source: &Path) -> PathBuf {
    let file_name = format!("{}.c", identifier_from_path(source));
    match source.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Rendered C source for one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Identifier of the byte array (the size constant is `<name>_size`).
    pub name: String,
    /// Source path as displayed in the header comment.
    pub source: String,
    /// Payload length in bytes.
    pub size: usize,
    /// Full text of the unit, newline-terminated.
    pub text: String,
}

/// Summary of one request the driver completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub name: String,
    pub source: String,
    pub output: String,
    pub size: usize,
    /// Lowercase hex SHA-256 of the payload bytes.
    pub sha256: String,
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_source() {
        let out = default_output_path(Path::new("user_programs/hello.elf"));
        assert_eq!(out, PathBuf::from("user_programs/hello_elf_data.c"));
    }

    #[test]
    fn default_output_for_bare_file_name() {
        assert_eq!(default_output_path(Path::new("calc.elf")), PathBuf::from("calc_elf_data.c"));
    }

    #[test]
    fn from_source_derives_name_and_output() {
        let req = EmissionRequest::from_source("bin/calc.elf");
        assert_eq!(req.name, "calc_elf_data");
        assert_eq!(req.output, PathBuf::from("bin/calc_elf_data.c"));
    }

    #[test]
    fn with_output_overrides_destination() {
        let req = EmissionRequest::new("a.bin", "blob").with_output("gen/blob.c");
        assert_eq!(req.name, "blob");
        assert_eq!(req.output, PathBuf::from("gen/blob.c"));
    }
}
