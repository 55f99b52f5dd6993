mod path;
mod string;

pub use path::{absolute_path, clean_path, relative_path};
pub use string::{normalize_test_name, unquote_string};
