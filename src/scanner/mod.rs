//! Test discovery over a parsed file.
//!
//! The scanner walks the top-level statements of every test-like function
//! and decides, purely from their shape, whether the function is a plain
//! test, a set of `t.Run` subtests, or a table-driven test. Subtests and
//! table rows replace the parent: a function that has any of them never
//! produces a bare entry of its own.
mod classify;
mod source;
mod subtest;
mod table;

pub use classify::{classify, subtest_call, StatementClass};
pub use source::SourceFile;
pub use subtest::subtest_entry;
pub use table::{name_field, table_rows};

use tracing::trace;

use crate::config::TEST_PREFIXES;
use crate::syntax::{FunctionDecl, SyntaxTree};

/// A child test name as written in the source, quotes included.
///
/// For subtests `offset` points at the `Run` call; for table rows it points
/// at the key of the name field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: String,
    pub offset: usize,
}

/// One runnable test found in a file, before paths and lines are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTest {
    pub function: String,
    pub function_offset: usize,
    pub child: Option<ChildEntry>,
}

impl DiscoveredTest {
    fn bare(func: &FunctionDecl) -> Self {
        Self {
            function: func.name.name.clone(),
            function_offset: func.name.offset,
            child: None,
        }
    }

    fn with_child(func: &FunctionDecl, entry: ChildEntry) -> Self {
        Self {
            function: func.name.name.clone(),
            function_offset: func.name.offset,
            child: Some(entry),
        }
    }

    pub fn offset(&self) -> usize {
        self.child
            .as_ref()
            .map_or(self.function_offset, |child| child.offset)
    }
}

pub fn is_test_function(name: &str) -> bool {
    TEST_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

pub fn test_functions(tree: &SyntaxTree) -> impl Iterator<Item = &FunctionDecl> {
    tree.functions().filter(|func| is_test_function(&func.name.name))
}

pub fn scan_tree(tree: &SyntaxTree) -> Vec<DiscoveredTest> {
    test_functions(tree).flat_map(scan_function).collect()
}

pub fn scan_function(func: &FunctionDecl) -> Vec<DiscoveredTest> {
    let mut found = Vec::new();
    let mut has_children = false;

    for (index, stmt) in func.body.iter().enumerate() {
        match classify(stmt) {
            StatementClass::Plain => {}
            StatementClass::SubtestCall(call) => {
                has_children = true;
                if let Some(entry) = subtest_entry(call) {
                    found.push(DiscoveredTest::with_child(func, entry));
                }
            }
            StatementClass::TableLoop(body) => {
                has_children = true;
                if let Some(field) = name_field(body) {
                    let rows = table_rows(&func.body[..index], field);
                    trace!(
                        function = %func.name.name,
                        field,
                        rows = rows.len(),
                        "resolved table test"
                    );
                    found.extend(rows.into_iter().map(|row| DiscoveredTest::with_child(func, row)));
                }
            }
        }
    }

    if !has_children {
        found.push(DiscoveredTest::bare(func));
    }

    found
}
