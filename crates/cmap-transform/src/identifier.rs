//! Source field-name normalization.
//!
//! Export column names are snake_case, all lower:
//!
//! - `BioSample` → `bio_sample`
//! - `DATASTORE_filetype` → `datastore_filetype`
//! - `SRA_Study` → `sra_study`

/// Normalize a source field name to a snake_case identifier.
pub fn normalize_identifier(raw: &str) -> String {
    let name = raw.trim();
    if name.contains('_') {
        // Underscore-separated already; lowercasing is enough.
        name.to_lowercase()
    } else {
        camel_to_snake(name)
    }
}

/// Insert `_` at camelCase word boundaries and lowercase the result.
///
/// A boundary is an uppercase letter preceded by a lowercase letter or
/// digit, or a non-leading uppercase letter followed by a lowercase letter
/// (so acronym runs like `SRAStudy` become `sra_study`).
fn camel_to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (idx, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() && idx > 0 {
            let prev = chars[idx - 1];
            let next_lower = chars
                .get(idx + 1)
                .is_some_and(|next| next.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || next_lower {
                out.push('_');
            }
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}
