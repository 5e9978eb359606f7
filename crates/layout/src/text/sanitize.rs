/// Drawn in place of a cell whose text is empty after cleaning.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Cleans cell text so it is safe to measure and to draw.
///
/// Control characters are dropped (tab, line feed and carriage return are
/// kept as line structure, DEL is dropped), tabs become a single space, and
/// surrounding whitespace is trimmed. An empty result becomes
/// [`EMPTY_PLACEHOLDER`].
///
/// Measurement and drawing must both see the output of this function, never
/// the raw text, or rows get sized for one string and painted with another.
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            '\n' | '\r' => Some(c),
            c if (c as u32) < 0x20 || c == '\u{7f}' => None,
            c => Some(c),
        })
        .collect();

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}
