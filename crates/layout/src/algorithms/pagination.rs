// Use a small epsilon to handle floating point inaccuracies
const EPSILON: f32 = 0.01;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a row fits between the cursor and the bottom of the content region.
///
/// * `cursor_y`: The current Y position on the page.
/// * `row_height`: The height the row needs.
/// * `content_bottom`: The lowest Y position a row may reach on this page.
pub fn check_row_fit(cursor_y: f32, row_height: f32, content_bottom: f32) -> BreakAnalysis {
    let available = (content_bottom - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: row_height > available + EPSILON,
        remaining_height: available,
    }
}

/// True when a row of `row_height` placed at `cursor_y` would cross `content_bottom`.
pub fn should_break_page(cursor_y: f32, row_height: f32, content_bottom: f32) -> bool {
    check_row_fit(cursor_y, row_height, content_bottom).should_break
}
