use crate::algorithms::check_row_fit;
use crate::config::{LayoutConfig, PageGeometry};
use crate::cursor::Cursor;

/// Where the document is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Nothing drawn yet; the next event is the title page.
    TitlePage,
    /// A table page must be opened and its header drawn.
    NewPage,
    /// Rows are being placed on the current table page.
    RowStream,
    /// Rows are exhausted; the last page still needs its footer.
    Finalize,
    /// Every event has been emitted.
    Done,
}

/// One instruction for the compositor. Coordinates are top-left based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutEvent {
    /// Open the document's first page and draw the title content on it.
    TitlePage { page: usize },
    /// Open a new page and draw the table header with its top edge at `y`.
    TableHeader { page: usize, y: f32 },
    /// Draw record `index` at `y` with the given height.
    Row { index: usize, y: f32, height: f32 },
    /// Draw the footer of `page`; the page is complete after this.
    Footer { page: usize },
}

/// Drives the document state machine over a stream of row heights.
///
/// Heights are pulled lazily, one per record, in record order. A row is never
/// split: when it would cross the bottom of the content region the current
/// page is closed with a footer, a new page is opened with a header, and the
/// same row is placed there.
pub struct LayoutEngine<I> {
    heights: I,
    config: LayoutConfig,
    page: PageGeometry,
    cursor: Cursor,
    state: DocumentState,
    pending: Option<f32>,
    next_index: usize,
}

impl<I> LayoutEngine<I>
where
    I: Iterator<Item = f32>,
{
    pub fn new<T>(heights: T, config: LayoutConfig, page: PageGeometry) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            heights: heights.into_iter(),
            config,
            page,
            cursor: Cursor::new(page.content_top()),
            state: DocumentState::TitlePage,
            pending: None,
            next_index: 0,
        }
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Number of pages opened so far, title page included.
    pub fn page_count(&self) -> usize {
        self.cursor.page_number()
    }

    fn content_bottom(&self) -> f32 {
        self.page.content_bottom(&self.config)
    }

    fn place(&mut self, height: f32) -> LayoutEvent {
        let index = self.next_index;
        self.next_index += 1;
        let y = self.cursor.place_row(height);
        LayoutEvent::Row { index, y, height }
    }
}

impl<I> Iterator for LayoutEngine<I>
where
    I: Iterator<Item = f32>,
{
    type Item = LayoutEvent;

    fn next(&mut self) -> Option<LayoutEvent> {
        match self.state {
            DocumentState::TitlePage => {
                self.state = DocumentState::NewPage;
                Some(LayoutEvent::TitlePage {
                    page: self.cursor.page_number(),
                })
            }
            DocumentState::NewPage => {
                self.cursor.next_page(self.page.content_top());
                let y = self.cursor.y();
                self.cursor
                    .skip(self.config.header_height + self.config.header_gap);
                self.state = DocumentState::RowStream;
                Some(LayoutEvent::TableHeader {
                    page: self.cursor.page_number(),
                    y,
                })
            }
            DocumentState::RowStream => {
                let Some(height) = self.pending.take().or_else(|| self.heights.next()) else {
                    self.state = DocumentState::Finalize;
                    return self.next();
                };

                let fit = check_row_fit(self.cursor.y(), height, self.content_bottom());
                if !fit.should_break {
                    return Some(self.place(height));
                }

                if self.cursor.rows_on_page() == 0 {
                    // A fresh page is as good as it gets; place it and let it clip.
                    log::warn!(
                        "Row {} needs {:.1}pt but a page only offers {:.1}pt; it will be clipped",
                        self.next_index,
                        height,
                        fit.remaining_height
                    );
                    return Some(self.place(height));
                }

                log::debug!(
                    "Page break before row {}: needs {:.1}pt, {:.1}pt left on page {}",
                    self.next_index,
                    height,
                    fit.remaining_height,
                    self.cursor.page_number()
                );
                self.pending = Some(height);
                self.state = DocumentState::NewPage;
                Some(LayoutEvent::Footer {
                    page: self.cursor.page_number(),
                })
            }
            DocumentState::Finalize => {
                self.state = DocumentState::Done;
                Some(LayoutEvent::Footer {
                    page: self.cursor.page_number(),
                })
            }
            DocumentState::Done => None,
        }
    }
}
