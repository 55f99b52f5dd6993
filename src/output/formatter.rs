use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::OutputOptions;
use crate::error::Result;

use super::TestDetail;

pub const NO_TESTS_FOUND: &str = "No tests found";

pub struct OutputFormatter;

impl OutputFormatter {
    /// Renders tests as JSON, or the sentinel message when there are none.
    pub fn format(tests: &[TestDetail], options: &OutputOptions) -> Result<String> {
        if tests.is_empty() {
            return Ok(NO_TESTS_FOUND.to_string());
        }

        if options.pretty {
            to_tab_indented_json(&tests)
        } else {
            Ok(serde_json::to_string(tests)?)
        }
    }
}

fn to_tab_indented_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
