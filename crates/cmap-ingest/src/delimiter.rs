//! Field delimiter configuration.

/// How a record line is split into key and value.
///
/// Passed explicitly to the parser; there is no ambient configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Split at the first run of two-or-more whitespace characters, or a
    /// single tab. Tolerates the aligned `key : value` layout: a trailing
    /// `:` on the key and a leading `:` on the value are stripped.
    #[default]
    WhitespaceRun,
    /// Split at the first occurrence of a literal substring.
    Literal(String),
}

impl Delimiter {
    /// Split a line into trimmed (key, value), or `None` when the line does
    /// not contain the delimiter.
    pub fn split_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        match self {
            Delimiter::WhitespaceRun => split_whitespace_run(line),
            Delimiter::Literal(sep) => {
                let (key, value) = line.split_once(sep.as_str())?;
                Some((key.trim(), value.trim()))
            }
        }
    }
}

fn split_whitespace_run(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let mut split_at = None;
    let mut idx = 0;
    while idx < bytes.len() {
        let ch = bytes[idx];
        if ch == b'\t' {
            split_at = Some(idx);
            break;
        }
        if ch.is_ascii_whitespace() && idx + 1 < bytes.len() && bytes[idx + 1].is_ascii_whitespace()
        {
            split_at = Some(idx);
            break;
        }
        idx += 1;
    }
    let at = split_at?;
    let key = line[..at].trim().trim_end_matches(':').trim();
    let value = line[at..].trim().trim_start_matches(':').trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}
