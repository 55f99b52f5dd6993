pub fn unquote_string(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('`') && s.ends_with('`')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Turns a literal subtest name into the segment `go test -run` reports:
/// quotes dropped, spaces replaced by underscores.
pub fn normalize_test_name(literal: &str) -> String {
    unquote_string(literal).replace('"', "").replace(' ', "_")
}
