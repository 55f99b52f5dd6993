//! Go-specific scanner tests
//!
//! Exercises the declaration scanner, statement classifier and table
//! resolver on real Go source. Fixtures: tests/fixtures/go/

mod fixtures;

use fixtures::get_test_fixture_path;
use gotest_ls::output::qualified_name;
use gotest_ls::scanner::{scan_tree, DiscoveredTest, SourceFile};
use gotest_ls::syntax::{GoParser, SourceParser};
use pretty_assertions::assert_eq;
use std::path::Path;

fn scan_go_inline(source: &str) -> Vec<DiscoveredTest> {
    let tree = GoParser::new()
        .parse(Path::new("inline_test.go"), source)
        .unwrap();
    scan_tree(&tree)
}

fn scan_go_file(fixture: &str) -> (SourceFile, Vec<DiscoveredTest>) {
    let path = get_test_fixture_path("go", Some(fixture));
    let file = SourceFile::load(&path, &path, &GoParser::new())
        .unwrap_or_else(|e| panic!("Failed to load {fixture}: {e}"));
    let tests = scan_tree(&file.tree);
    (file, tests)
}

fn qualified(tests: &[DiscoveredTest]) -> Vec<String> {
    let mut names: Vec<_> = tests
        .iter()
        .map(|t| qualified_name(&t.function, t.child.as_ref().map(|c| c.name.as_str())))
        .collect();
    names.sort();
    names
}

// =============================================================================
// fixture files
// =============================================================================

#[test]
fn test_sample_file_has_one_entry_per_function() {
    let (file, tests) = scan_go_file("sample/sample_test.go");

    assert_eq!(
        qualified(&tests),
        vec!["BenchmarkSomething", "Example_something", "TestSomething"]
    );

    let something = tests.iter().find(|t| t.function == "TestSomething").unwrap();
    assert_eq!(file.lines.line(something.offset()), 8);
    assert_eq!(something.offset() + 1, 56);
}

#[test]
fn test_subtest_file_has_no_parent_entry() {
    let (file, tests) = scan_go_file("subtests/subtest_test.go");

    assert_eq!(
        qualified(&tests),
        vec!["Test_subTestPattern/subtest", "Test_subTestPattern/subtest_2"]
    );

    let lines: Vec<_> = tests.iter().map(|t| file.lines.line(t.offset())).collect();
    assert_eq!(lines, vec![10, 15]);
}

#[test]
fn test_mixed_table_file() {
    let (file, tests) = scan_go_file("table/table_test.go");

    assert_eq!(
        qualified(&tests),
        vec![
            "Test/5_+_5_=_10",
            "Test/5_-_5_=_0",
            "Test/mixed_subtest_1",
            "Test/mixed_test_2",
        ]
    );

    let mut positions: Vec<_> = tests
        .iter()
        .map(|t| (file.lines.line(t.offset()), t.offset() + 1))
        .collect();
    positions.sort();
    assert_eq!(positions, vec![(12, 111), (23, 265), (30, 355), (48, 635)]);
}

// =============================================================================
// inline shapes
// =============================================================================

#[test]
fn test_n_literal_runs_give_n_entries() {
    let tests = scan_go_inline(
        r#"package sample

import "testing"

func TestMany(t *testing.T) {
	t.Run("a", func(t *testing.T) {})
	t.Parallel()
	t.Run("b c", func(t *testing.T) {})
	t.Run("d", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(qualified(&tests), vec!["TestMany/a", "TestMany/b_c", "TestMany/d"]);
}

#[test]
fn test_benchmark_subtests() {
    let tests = scan_go_inline(
        r#"package sample

import "testing"

func BenchmarkSizes(b *testing.B) {
	b.Run("small", func(b *testing.B) {})
	b.Run("large", func(b *testing.B) {})
}
"#,
    );
    assert_eq!(
        qualified(&tests),
        vec!["BenchmarkSizes/large", "BenchmarkSizes/small"]
    );
}

#[test]
fn test_table_with_custom_field_and_loop_var() {
    let tests = scan_go_inline(
        r#"package sample

import "testing"

func TestCases(t *testing.T) {
	cases := []struct {
		desc  string
		input int
	}{
		{desc: "zero value", input: 0},
		{desc: "one", input: 1},
		{input: 2},
	}
	for _, tc := range cases {
		t.Run(tc.desc, func(t *testing.T) {
			_ = tc.input
		})
	}
}
"#,
    );
    assert_eq!(qualified(&tests), vec!["TestCases/one", "TestCases/zero_value"]);
}

#[test]
fn test_table_declared_with_var_is_not_resolved() {
    let tests = scan_go_inline(
        r#"package sample

import "testing"

func TestVar(t *testing.T) {
	var tests = []struct{ name string }{{name: "x"}}
	for _, tt := range tests {
		t.Run(tt.name, func(t *testing.T) {})
	}
}
"#,
    );
    assert!(tests.is_empty());
}

#[test]
fn test_doubly_nested_loop_keeps_parent() {
    let tests = scan_go_inline(
        r#"package sample

import "testing"

func TestNested(t *testing.T) {
	for _, group := range groups {
		for _, tt := range group {
			t.Run(tt.name, func(t *testing.T) {})
		}
	}
}
"#,
    );
    assert_eq!(qualified(&tests), vec!["TestNested"]);
}

#[test]
fn test_methods_and_helpers_are_ignored() {
    let tests = scan_go_inline(
        r#"package sample

import "testing"

type suite struct{}

func (s *suite) TestMethod(t *testing.T) {}

func helperTest(t *testing.T) {}

func ExampleThing() {}
"#,
    );
    assert_eq!(qualified(&tests), vec!["ExampleThing"]);
}

#[test]
fn test_raw_string_subtest_names_lose_backticks() {
    let tests = scan_go_inline(
        "package sample\n\nimport \"testing\"\n\nfunc TestRaw(t *testing.T) {\n\tt.Run(`raw name`, func(t *testing.T) {})\n}\n",
    );
    assert_eq!(qualified(&tests), vec!["TestRaw/raw_name"]);
}
