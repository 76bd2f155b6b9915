//! XML attribute escaping.

/// Escape `value` for use inside an attribute.
///
/// `&`, `<` and `>` become entities; newline, carriage return and tab become
/// numeric references; NUL is dropped entirely.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            '\0' => {}
            c => out.push(c),
        }
    }
    out
}

/// [`escape_attr`] plus the surrounding quotes.
///
/// Uses `"` unless the value contains `"` but no `'`, in which case `'` is
/// used.  If both appear, `"` is written as `&quot;`.
pub fn quote_attr(value: &str) -> String {
    let escaped = escape_attr(value);
    if !escaped.contains('"') {
        format!("\"{escaped}\"")
    } else if !escaped.contains('\'') {
        format!("'{escaped}'")
    } else {
        format!("\"{}\"", escaped.replace('"', "&quot;"))
    }
}
