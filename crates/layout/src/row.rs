use crate::config::LayoutConfig;
use crate::text::sanitize;

/// Estimates how many wrapped lines `text` needs in a column of `column_width`.
///
/// Each line feed starts a new line, as it does when the text is drawn; every
/// line counts at least once, so the result is never less than one.
pub fn estimate_line_count(text: &str, column_width: f32, config: &LayoutConfig) -> usize {
    let usable = (column_width - config.cell_padding_x).max(1.0);
    text.split('\n')
        .map(|line| {
            let chars = line.strip_suffix('\r').unwrap_or(line).chars().count() as f32;
            ((chars * config.char_width() / usable).ceil() as usize).max(1)
        })
        .sum()
}

/// Height of a table row, in points.
///
/// Each cell is sanitized and measured on its own; the tallest cell wins and
/// the result is clamped to `[min_row_height, max_row_height]`. Cells beyond
/// the last width (or widths beyond the last cell) are ignored.
pub fn row_height<S: AsRef<str>>(cells: &[S], column_widths: &[f32], config: &LayoutConfig) -> f32 {
    let tallest = cells
        .iter()
        .zip(column_widths)
        .map(|(cell, &width)| {
            let text = sanitize(cell.as_ref());
            let lines = estimate_line_count(&text, width, config);
            lines as f32 * config.line_height + config.cell_padding_y
        })
        .fold(config.min_row_height, f32::max);

    let clamped = tallest.min(config.max_row_height);
    if clamped < tallest {
        log::warn!(
            "Row needs {:.1}pt, clamped to {:.1}pt; content will be clipped",
            tallest,
            clamped
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [f32; 7] = [36.0, 84.0, 60.0, 72.0, 108.0, 96.0, 96.0];

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn short_row_uses_minimum_height() {
        let cells = ["TC-001", "Login", "Positive", "Sanity", "Open page", "-", "Works"];
        assert_eq!(row_height(&cells, &WIDTHS, &config()), 25.0);
    }

    #[test]
    fn empty_cells_still_measure_one_line() {
        let cells = ["", "", "", "", "", "", ""];
        assert_eq!(estimate_line_count(&sanitize(""), 36.0, &config()), 1);
        assert_eq!(row_height(&cells, &WIDTHS, &config()), 25.0);
    }

    #[test]
    fn grows_with_wrapped_lines() {
        // 8.5 * 0.45 = 3.825pt per char; the title column has 74pt usable,
        // so 60 characters need ceil(229.5 / 74) = 4 lines.
        let title = "x".repeat(60);
        assert_eq!(estimate_line_count(&title, 84.0, &config()), 4);
        let cells = ["TC-002", title.as_str(), "Edge", "Regression", "s", "d", "e"];
        assert_eq!(row_height(&cells, &WIDTHS, &config()), 4.0 * 11.0 + 8.0);
    }

    #[test]
    fn each_line_feed_starts_a_line() {
        let config = config();
        let steps = "Open login page\nEnter valid email\nEnter valid password\nClick login button";
        assert_eq!(estimate_line_count(steps, 108.0, &config), 4);
        // A blank line between steps still takes up a line; a CRLF counts once.
        assert_eq!(estimate_line_count("one\r\n\ntwo", 108.0, &config), 3);
        let cells = ["TC-004", "Login", "Positive", "Sanity", steps, "-", "Dashboard"];
        assert_eq!(row_height(&cells, &WIDTHS, &config), 4.0 * 11.0 + 8.0);
    }

    #[test]
    fn long_lines_wrap_within_their_own_line() {
        // 60 chars need 4 lines in the title column, plus one short line.
        let text = format!("{}\nshort", "x".repeat(60));
        assert_eq!(estimate_line_count(&text, 84.0, &config()), 5);
    }

    #[test]
    fn clamps_to_maximum_for_huge_cells() {
        let steps = "a".repeat(2_000);
        let cells = ["TC-003", "Huge", "Edge", "Performance", steps.as_str(), "-", "ok"];
        assert_eq!(row_height(&cells, &WIDTHS, &config()), 120.0);
    }

    #[test]
    fn always_within_bounds() {
        let config = config();
        for len in [0usize, 1, 10, 50, 100, 500, 5_000, 10_000] {
            let text = "w".repeat(len);
            let cells = [text.as_str(); 7];
            let h = row_height(&cells, &WIDTHS, &config);
            assert!(h >= config.min_row_height && h <= config.max_row_height, "{} -> {}", len, h);
        }
    }

    #[test]
    fn control_characters_do_not_count_towards_height() {
        let config = config();
        let clean = "y".repeat(19);
        // 19 chars * 3.825pt = 72.7pt over the ID column's 26pt -> 3 lines.
        let noisy = format!("{}{}", "\u{1}".repeat(40), clean);
        assert_eq!(
            estimate_line_count(&sanitize(&noisy), 36.0, &config),
            estimate_line_count(&clean, 36.0, &config)
        );
        assert_eq!(row_height(&[noisy.as_str()], &[36.0], &config), 3.0 * 11.0 + 8.0);
    }
}
