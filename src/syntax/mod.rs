//! Parser-independent syntax tree.
//!
//! The scanner only needs a handful of node shapes, so each parser adapter
//! lowers its concrete tree into this owned model once per file. All
//! offsets are 0-based byte offsets into the file's source text.
mod go;
mod line_index;

pub use go::GoParser;
pub use line_index::LineIndex;

use std::path::Path;

use crate::error::ParserError;

/// Turns raw source text into a [`SyntaxTree`].
pub trait SourceParser: Send + Sync {
    fn parse(&self, path: &Path, source: &str) -> Result<SyntaxTree, ParserError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    FunctionDecl,
    ExprStmt,
    AssignStmt,
    RangeStmt,
    CallExpr,
    SelectorExpr,
    CompositeLit,
    KeyValueExpr,
    BasicLit,
    Ident,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    pub decls: Vec<Decl>,
}

impl SyntaxTree {
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Function(func) => Some(func),
            Decl::Other => None,
        })
    }
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Function(FunctionDecl),
    Other,
}

impl Decl {
    pub fn kind(&self) -> NodeKind {
        match self {
            Decl::Function(_) => NodeKind::FunctionDecl,
            Decl::Other => NodeKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: Ident,
    /// Top-level statements of the body, in source order.
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expr(Expr),
    Assign { lhs: Vec<Expr>, rhs: Vec<Expr> },
    /// A for-each style loop.
    Range { body: Vec<Stmt> },
    Other,
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::Expr(_) => NodeKind::ExprStmt,
            Stmt::Assign { .. } => NodeKind::AssignStmt,
            Stmt::Range { .. } => NodeKind::RangeStmt,
            Stmt::Other => NodeKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Call(CallExpr),
    Selector(SelectorExpr),
    CompositeLit(CompositeLit),
    KeyValue(KeyValueExpr),
    BasicLit(BasicLit),
    Ident(Ident),
    Other,
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Call(_) => NodeKind::CallExpr,
            Expr::Selector(_) => NodeKind::SelectorExpr,
            Expr::CompositeLit(_) => NodeKind::CompositeLit,
            Expr::KeyValue(_) => NodeKind::KeyValueExpr,
            Expr::BasicLit(_) => NodeKind::BasicLit,
            Expr::Ident(_) => NodeKind::Ident,
            Expr::Other => NodeKind::Other,
        }
    }

    pub fn as_ident(&self) -> Option<&Ident> {
        match self {
            Expr::Ident(ident) => Some(ident),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    pub args: Vec<Expr>,
    pub offset: usize,
}

/// `operand.field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorExpr {
    pub operand: Box<Expr>,
    pub field: Ident,
}

/// A composite literal, typed or elided (`{name: "x"}` inside a slice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeLit {
    pub elements: Vec<Expr>,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueExpr {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
}

/// Literal exactly as written, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLit {
    pub value: String,
    pub offset: usize,
}
