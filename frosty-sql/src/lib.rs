mod clean;
mod extract;
mod guard;

pub use clean::clean;
pub use extract::{ExtractionMode, SqlExtractor};
pub use guard::is_mutating;
