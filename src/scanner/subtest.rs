use super::ChildEntry;
use crate::syntax::{CallExpr, Expr};

/// Name and position of `t.Run("literal", ...)`. Any other first argument
/// is left to the table resolver.
pub fn subtest_entry(call: &CallExpr) -> Option<ChildEntry> {
    match call.args.first()? {
        Expr::BasicLit(lit) => Some(ChildEntry {
            name: lit.value.clone(),
            offset: call.offset,
        }),
        _ => None,
    }
}
