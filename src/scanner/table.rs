//! Table-driven tests.
//!
//! A table test names its subtests from a struct field:
//!
//! ```go
//! tests := []struct{ name string }{{name: "a"}, {name: "b"}}
//! for _, tt := range tests {
//!     t.Run(tt.name, func(t *testing.T) { ... })
//! }
//! ```
//!
//! The loop tells us which field holds the name; the rows come from struct
//! literal slices assigned earlier in the same function.
use super::{subtest_call, ChildEntry};
use crate::syntax::{CompositeLit, Expr, NodeKind, Stmt};

/// Field used as the subtest name in `t.Run(<loopVar>.<field>, ...)`.
pub fn name_field(loop_body: &[Stmt]) -> Option<&str> {
    loop_body
        .iter()
        .filter_map(subtest_call)
        .find_map(|call| match call.args.first()? {
            Expr::Selector(selector) if selector.operand.kind() == NodeKind::Ident => {
                Some(selector.field.name.as_str())
            }
            _ => None,
        })
}

/// Rows from every struct-literal slice assigned before the loop, nearest
/// statement first. Several matching slices all contribute rows.
pub fn table_rows(preceding: &[Stmt], field: &str) -> Vec<ChildEntry> {
    preceding
        .iter()
        .rev()
        .flat_map(|stmt| rows_in(stmt, field))
        .collect()
}

fn rows_in(stmt: &Stmt, field: &str) -> Vec<ChildEntry> {
    let Stmt::Assign { rhs, .. } = stmt else {
        return Vec::new();
    };

    rhs.iter()
        .filter_map(as_composite)
        .flat_map(|table| &table.elements)
        .filter_map(as_composite)
        .flat_map(|row| &row.elements)
        .filter_map(|element| row_name(element, field))
        .collect()
}

fn as_composite(expr: &Expr) -> Option<&CompositeLit> {
    match expr {
        Expr::CompositeLit(lit) => Some(lit),
        _ => None,
    }
}

fn row_name(element: &Expr, field: &str) -> Option<ChildEntry> {
    let Expr::KeyValue(pair) = element else {
        return None;
    };
    let key = pair.key.as_ident()?;
    if key.name != field {
        return None;
    }
    match pair.value.as_ref() {
        Expr::BasicLit(lit) => Some(ChildEntry {
            name: lit.value.clone(),
            offset: key.offset,
        }),
        _ => None,
    }
}
