/// Mutable layout position within the document.
///
/// Owned by the [`LayoutEngine`](crate::LayoutEngine); it never outlives a
/// single render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    page_number: usize,
    y: f32,
    page_content_height: f32,
    rows_on_page: usize,
}

impl Cursor {
    /// A cursor at the top of page 1.
    pub fn new(top: f32) -> Self {
        Self {
            page_number: 1,
            y: top,
            page_content_height: 0.0,
            rows_on_page: 0,
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Height consumed on the current page since it began, header included.
    pub fn page_content_height(&self) -> f32 {
        self.page_content_height
    }

    pub fn rows_on_page(&self) -> usize {
        self.rows_on_page
    }

    /// Moves to the top of the content region of the next page.
    pub fn next_page(&mut self, top: f32) {
        self.page_number += 1;
        self.y = top;
        self.page_content_height = 0.0;
        self.rows_on_page = 0;
    }

    /// Consumes vertical space that is not a data row (the table header and its gap).
    pub fn skip(&mut self, height: f32) {
        self.y += height;
        self.page_content_height += height;
    }

    /// Places a row at the cursor and returns its top edge.
    pub fn place_row(&mut self, height: f32) -> f32 {
        let top = self.y;
        self.skip(height);
        self.rows_on_page += 1;
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_rows_and_resets_per_page() {
        let mut cursor = Cursor::new(30.0);
        cursor.skip(42.0);
        assert_eq!(cursor.place_row(25.0), 72.0);
        assert_eq!(cursor.place_row(40.0), 97.0);
        assert_eq!(cursor.y(), 137.0);
        assert_eq!(cursor.page_content_height(), 107.0);
        assert_eq!(cursor.rows_on_page(), 2);

        cursor.next_page(30.0);
        assert_eq!(cursor.page_number(), 2);
        assert_eq!(cursor.y(), 30.0);
        assert_eq!(cursor.page_content_height(), 0.0);
        assert_eq!(cursor.rows_on_page(), 0);
    }
}
