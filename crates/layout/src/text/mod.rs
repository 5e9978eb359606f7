mod sanitize;
mod wrapper;

pub use sanitize::{sanitize, EMPTY_PLACEHOLDER};
pub use wrapper::{estimate_width, wrap_lines};
