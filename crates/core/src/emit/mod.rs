//! Byte-array emitter.
//!
//! Renders a payload as a C source unit:
//!
//! ```text
//! /* Generated from user_programs/hello.elf */
//! #include "../types.h"
//!
//! const unsigned char hello_elf_data[] = {
//!     0x7f, 0x45, 0x4c, 0x46, ...,
//!     0x00, 0x00
//! };
//!
//! const u32 hello_elf_data_size = sizeof(hello_elf_data);
//! ```
//!
//! The identifier is used verbatim; see [`ident`] for optional checks.

pub mod ident;

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::error::{EmbedError, EmbedResult};
use crate::model::{BinaryPayload, GeneratedUnit};

/// Include line pulling in the shared `u32` alias, relative to the generated file.
pub const TYPES_INCLUDE: &str = "#include \"../types.h\"";

/// Hex tokens per array row.
pub const BYTES_PER_ROW: usize = 16;

pub const ROW_INDENT: &str = "    ";

// "0x00, " per byte plus indent and newline per row.
const BYTES_PER_TOKEN: usize = 6;

/// Read `source` and render it as a unit named `name`.
///
/// The whole file is buffered before rendering.
pub fn emit(source: impl AsRef<Path>, name: &str) -> EmbedResult<GeneratedUnit> {
    let payload = read_payload(source)?;
    Ok(emit_payload(&payload, name))
}

/// Read a payload file verbatim.
pub fn read_payload(source: impl AsRef<Path>) -> EmbedResult<BinaryPayload> {
    let path = source.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|err| EmbedError::ReadSource { path: path.to_path_buf(), source: err })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read payload");
    Ok(BinaryPayload::new(path, bytes))
}

/// Render an in-memory payload.
pub fn emit_payload(payload: &BinaryPayload, name: &str) -> GeneratedUnit {
    let source = payload.source().display().to_string();
    let text = render_unit(&source, payload.bytes(), name);
    GeneratedUnit { name: name.to_string(), source, size: payload.len(), text }
}

/// Render the full unit text for `bytes`, labelled with `source` in the header.
pub fn render_unit(source: &str, bytes: &[u8], name: &str) -> String {
    let rows = bytes.len().div_ceil(BYTES_PER_ROW);
    let mut out = String::with_capacity(
        bytes.len() * BYTES_PER_TOKEN + rows * (ROW_INDENT.len() + 1) + 2 * name.len() + 128,
    );

    out.push_str(&format!("/* Generated from {source} */\n"));
    out.push_str(TYPES_INCLUDE);
    out.push_str("\n\n");
    out.push_str(&format!("const unsigned char {name}[] = {{\n"));
    render_rows(&mut out, bytes);
    out.push_str("};\n\n");
    out.push_str(&format!("const u32 {name}_size = sizeof({name});\n"));
    out
}

/// Append the array body: one line per row, `,` after every row but the last.
fn render_rows(out: &mut String, bytes: &[u8]) {
    let mut rows = bytes.chunks(BYTES_PER_ROW).peekable();
    while let Some(row) = rows.next() {
        out.push_str(ROW_INDENT);
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "0x{byte:02x}");
        }
        if rows.peek().is_some() {
            out.push(',');
        }
        out.push('\n');
    }
}
