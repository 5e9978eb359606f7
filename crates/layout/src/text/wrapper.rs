/// Estimated advance of `text` set at `font_size`, using the average
/// character width heuristic rather than real glyph metrics.
pub fn estimate_width(text: &str, font_size: f32, avg_char_width: f32) -> f32 {
    text.chars().count() as f32 * font_size * avg_char_width
}

/// Greedily breaks `text` into lines no wider than `max_width`.
///
/// Line feeds always start a new line (a trailing carriage return on a line is
/// dropped). Words are kept whole where they fit; a single word longer than a
/// line is split at the character boundary. Widths come from
/// [`estimate_width`], so this agrees with the row-height estimate about how
/// many characters a line holds.
pub fn wrap_lines(text: &str, max_width: f32, font_size: f32, avg_char_width: f32) -> Vec<String> {
    let char_width = (font_size * avg_char_width).max(f32::EPSILON);
    let max_chars = ((max_width / char_width).floor() as usize).max(1);

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed <= max_chars {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(word.iter());
                current_len += word.len();
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            while word.len() > max_chars {
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            current_len = word.len();
            current = word.into_iter().collect();
        }
        lines.push(current);
    }
    lines
}
