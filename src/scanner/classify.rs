use crate::config::SUBTEST_METHOD;
use crate::syntax::{CallExpr, Expr, NodeKind, Stmt};

/// Shape of one top-level statement in a test body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementClass<'a> {
    Plain,
    SubtestCall(&'a CallExpr),
    /// A range loop; carries the loop body.
    TableLoop(&'a [Stmt]),
}

pub fn classify(stmt: &Stmt) -> StatementClass<'_> {
    if let Some(call) = subtest_call(stmt) {
        return StatementClass::SubtestCall(call);
    }

    // Only the loop's own statements are inspected, not nested blocks.
    if let Stmt::Range { body } = stmt {
        if body.iter().any(|inner| subtest_call(inner).is_some()) {
            return StatementClass::TableLoop(body);
        }
    }

    StatementClass::Plain
}

/// Matches an expression statement of the form `<ident>.Run(<args>)`.
pub fn subtest_call(stmt: &Stmt) -> Option<&CallExpr> {
    let Stmt::Expr(Expr::Call(call)) = stmt else {
        return None;
    };
    let Expr::Selector(selector) = call.fun.as_ref() else {
        return None;
    };

    (selector.operand.kind() == NodeKind::Ident && selector.field.name == SUBTEST_METHOD)
        .then_some(call)
}
