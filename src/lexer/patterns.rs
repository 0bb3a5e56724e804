use once_cell::sync::Lazy;
use regex::Regex;

pub(super) static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z][_a-zA-Z0-9]*)\s*:=\s*(.+)$").unwrap());

static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z][_a-zA-Z0-9]*)\s*=>\s*(.+)$").unwrap());

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][_a-zA-Z0-9]*$").unwrap());

/// `key => value` with the trailing `,` separator(s) removed from the value.
pub fn match_entry(text: &str) -> Option<(&str, &str)> {
    let caps = ENTRY.captures(text)?;
    let key = caps.get(1)?.as_str();
    let value = caps.get(2)?.as_str().trim_end_matches(',').trim();
    Some((key, value))
}

pub fn is_integer(text: &str) -> bool {
    INTEGER.is_match(text)
}

pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}

/// Interior of a `[[ ... ]]` literal, verbatim.
pub fn text_literal(text: &str) -> Option<&str> {
    text.strip_prefix("[[")?.strip_suffix("]]")
}

/// Interior of a `|name|` reference. The interior is not validated here.
pub fn reference_name(text: &str) -> Option<&str> {
    text.strip_prefix('|')?.strip_suffix('|')
}

/// Splits a one-line `{ k => v, k2 => v2 }` literal into its entry texts.
///
/// Commas inside `[[ ]]` or a nested `{ }` do not separate entries. Only the
/// empty segment after a trailing `,` is dropped; any other empty segment is
/// kept so the caller can reject it. Returns `None` when `text` is not
/// brace-delimited or the delimiters do not balance.
pub fn split_inline_entries(text: &str) -> Option<Vec<&str>> {
    if text.len() < 2 {
        return None;
    }
    let inner = text.strip_prefix('{')?.strip_suffix('}')?;
    let bytes = inner.as_bytes();

    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut in_text = false;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !in_text && bytes[i..].starts_with(b"[[") {
            in_text = true;
            i += 2;
            continue;
        }
        if in_text && bytes[i..].starts_with(b"]]") {
            in_text = false;
            i += 2;
            continue;
        }
        if !in_text {
            match bytes[i] {
                b'{' => depth += 1,
                b'}' => depth = depth.checked_sub(1)?,
                b',' if depth == 0 => {
                    segments.push(inner[start..i].trim());
                    start = i + 1;
                }
                _ => {}
            }
        }
        i += 1;
    }

    if depth != 0 || in_text {
        return None;
    }
    segments.push(inner[start..].trim());
    if segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    Some(segments)
}
