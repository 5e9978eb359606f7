pub mod pagination;

pub use pagination::{check_row_fit, should_break_page, BreakAnalysis};
