//! Embed manifests: the list of payloads a project embeds.
//!
//! A manifest is JSON or YAML (picked by extension):
//!
//! ```json
//! {
//!   "targets": [
//!     { "source": "hello.elf", "name": "hello_elf_data", "output": "hello_elf_data.c" },
//!     { "source": "calc.elf" }
//!   ]
//! }
//! ```
//!
//! `name` and `output` are optional. Relative paths are resolved against the
//! directory holding the manifest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, EmbedResult};
use crate::model::EmissionRequest;

/// Serializable manifest describing what to embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub targets: Vec<EmbedTarget>,
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedTarget {
    /// Payload path.
    pub source: PathBuf,
    /// Array identifier. Defaults to the source file name with `.` -> `_`, plus `_data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Destination path. Defaults to `<name>.c` next to the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl EmbedTarget {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), name: None, output: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Build the request for this target, resolving relative paths against `base_dir`.
    pub fn to_request(&self, base_dir: &Path) -> EmissionRequest {
        let source = resolve(base_dir, &self.source);
        let request = match &self.name {
            Some(name) => EmissionRequest::new(source, name.clone()),
            None => EmissionRequest::from_source(source),
        };
        match &self.output {
            Some(output) => request.with_output(resolve(base_dir, output)),
            None => request,
        }
    }
}

impl Manifest {
    /// The two user programs the kernel image embeds.
    pub fn default_targets() -> Self {
        Self {
            targets: vec![
                EmbedTarget::new("hello.elf").with_name("hello_elf_data"),
                EmbedTarget::new("calc.elf").with_name("calc_elf_data"),
            ],
        }
    }

    /// Load a manifest from disk; the format follows the file extension.
    pub fn load(path: impl AsRef<Path>) -> EmbedResult<Self> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path)
            .ok_or_else(|| EmbedError::UnsupportedManifestFormat { path: path.to_path_buf() })?;
        let body = std::fs::read_to_string(path)
            .map_err(|err| EmbedError::ReadManifest { path: path.to_path_buf(), source: err })?;
        Self::parse(&body, format, path)
    }

    /// Parse a manifest body. `path` is only used for error messages.
    pub fn parse(body: &str, format: ManifestFormat, path: &Path) -> EmbedResult<Self> {
        let parse_err =
            |message: String| EmbedError::ParseManifest { path: path.to_path_buf(), message };
        let manifest: Manifest = match format {
            ManifestFormat::Json => {
                serde_json::from_str(body).map_err(|e| parse_err(e.to_string()))?
            }
            ManifestFormat::Yaml => {
                serde_yaml::from_str(body).map_err(|e| parse_err(e.to_string()))?
            }
        };
        if manifest.targets.is_empty() {
            return Err(EmbedError::EmptyManifest { path: path.to_path_buf() });
        }
        Ok(manifest)
    }

    /// Requests for every target, in manifest order.
    pub fn requests(&self, base_dir: &Path) -> Vec<EmissionRequest> {
        self.targets.iter().map(|target| target.to_request(base_dir)).collect()
    }
}

/// On-disk manifest encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Directory relative manifest paths are resolved against.
pub fn manifest_base_dir(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
