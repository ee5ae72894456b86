//! Escaping and line folding for ICS content lines.

/// Maximum content-line width before folding.
const FOLD_WIDTH: usize = 74;

/// Escape a TEXT property value (RFC 5545 §3.3.11).
///
/// Backslashes are replaced first; the escapes introduced for newline,
/// comma and semicolon must not themselves be re-escaped.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Fold a content line at 74 characters.
///
/// Continuation segments carry a single leading space and are joined with
/// CRLF. Splits happen at character boundaries, not word boundaries;
/// operates on the line after escaping and with the property-name prefix
/// already attached. Lines at or under the width pass through untouched.
pub fn fold_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= FOLD_WIDTH {
        return line.to_string();
    }
    chars
        .chunks(FOLD_WIDTH)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\r\n ")
}
