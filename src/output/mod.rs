mod detail;
mod formatter;

pub use detail::{qualified_name, FileLocation, TestDetail};
pub use formatter::{OutputFormatter, NO_TESTS_FOUND};
