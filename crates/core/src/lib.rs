//! embedgen-core
//!
//! Core library for embedding binary payloads into C source trees.
//!
//! A payload file is rendered as a `const unsigned char` array plus a `u32`
//! size constant, so programs can link fixed images (e.g. pre-built user
//! programs for a kernel) without loading them from disk at runtime.
//!
//! All substantive logic lives here so it is fully testable and reusable
//! from the CLI or from build scripts.

pub mod driver;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod model;
pub mod output;

pub use error::{EmbedError, EmbedResult};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
