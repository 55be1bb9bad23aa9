use std::path::Path;

use crate::error::{EmbedError, EmbedResult};

/// C keywords (C89 through C11) that cannot name an array.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

/// Returns true if `name` is usable as a C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    check_identifier(name).is_ok()
}

/// Check `name` against C identifier rules.
pub fn check_identifier(name: &str) -> EmbedResult<()> {
    let invalid = |reason| Err(EmbedError::InvalidIdentifier { name: name.to_string(), reason });

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return invalid("identifier is empty");
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return invalid("must start with an ASCII letter or underscore");
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return invalid("may only contain ASCII letters, digits and underscores");
    }
    if C_KEYWORDS.contains(&name) {
        return invalid("is a reserved C keyword");
    }
    Ok(())
}

/// Derive an identifier from a payload path: `hello.elf` -> `hello_elf_data`.
///
/// Every character that is not ASCII alphanumeric becomes `_`; a leading digit
/// gets a `_` prefix.
pub fn identifier_from_path(path: &Path) -> String {
    let file_name = path.file_name().map(|os| os.to_string_lossy()).unwrap_or_default();

    let mut ident = String::with_capacity(file_name.len() + 6);
    if file_name.starts_with(|c: char| c.is_ascii_digit()) {
        ident.push('_');
    }
    ident.extend(file_name.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }));
    ident.push_str("_data");
    ident
}
