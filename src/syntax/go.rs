use std::path::Path;

use tracing::trace;
use tree_sitter::{Node, Parser};

use super::{
    BasicLit, CallExpr, CompositeLit, Decl, Expr, FunctionDecl, Ident, KeyValueExpr, NodeKind,
    SelectorExpr, SourceParser, Stmt, SyntaxTree,
};
use crate::error::ParserError;

/// Tree-sitter backed parser for Go source files.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoParser;

impl GoParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for GoParser {
    fn parse(&self, path: &Path, source: &str) -> Result<SyntaxTree, ParserError> {
        // tree_sitter::Parser is not Sync, so each call gets its own.
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|_| ParserError::language_setup_failed("go"))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParserError::parse_failed(path))?;
        let root = tree.root_node();

        if root.has_error() {
            let at = first_error(root).unwrap_or(root).start_position();
            return Err(ParserError::syntax_error(path, at.row + 1, at.column + 1));
        }

        let lowering = Lowering {
            source: source.as_bytes(),
        };
        let decls = named_children(root)
            .into_iter()
            .map(|node| lowering.decl(node))
            .collect();

        Ok(SyntaxTree { decls })
    }
}

/// Maps a tree-sitter-go node kind onto the generic [`NodeKind`] tags.
pub fn node_kind(kind: &str) -> NodeKind {
    match kind {
        "function_declaration" => NodeKind::FunctionDecl,
        "expression_statement" => NodeKind::ExprStmt,
        "short_var_declaration" | "assignment_statement" => NodeKind::AssignStmt,
        "for_statement" => NodeKind::RangeStmt,
        "call_expression" => NodeKind::CallExpr,
        "selector_expression" => NodeKind::SelectorExpr,
        "composite_literal" | "literal_value" => NodeKind::CompositeLit,
        "keyed_element" => NodeKind::KeyValueExpr,
        "interpreted_string_literal" | "raw_string_literal" | "rune_literal" | "int_literal"
        | "float_literal" | "imaginary_literal" => NodeKind::BasicLit,
        "identifier" | "field_identifier" => NodeKind::Ident,
        _ => NodeKind::Other,
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(found) = first_error(child) {
                return Some(found);
            }
        }
    }
    None
}

fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

struct Lowering<'a> {
    source: &'a [u8],
}

impl Lowering<'_> {
    fn text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or("").to_string()
    }

    fn ident(&self, node: Node) -> Ident {
        Ident {
            name: self.text(node),
            offset: node.start_byte(),
        }
    }

    fn decl(&self, node: Node) -> Decl {
        if node_kind(node.kind()) != NodeKind::FunctionDecl {
            // Methods land here too: they are not top-level functions.
            return Decl::Other;
        }

        let Some(name) = node.child_by_field_name("name") else {
            return Decl::Other;
        };
        let body = node
            .child_by_field_name("body")
            .map(|block| self.block(block))
            .unwrap_or_default();

        trace!(name = %self.text(name), statements = body.len(), "lowered function");
        Decl::Function(FunctionDecl {
            name: self.ident(name),
            body,
        })
    }

    fn block(&self, node: Node) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        for child in named_children(node) {
            // Newer grammars wrap block contents in a statement_list.
            if child.kind() == "statement_list" {
                stmts.extend(self.block(child));
            } else {
                stmts.push(self.stmt(child));
            }
        }
        stmts
    }

    fn stmt(&self, node: Node) -> Stmt {
        match node_kind(node.kind()) {
            NodeKind::ExprStmt => named_children(node)
                .first()
                .map(|expr| Stmt::Expr(self.expr(*expr)))
                .unwrap_or(Stmt::Other),
            NodeKind::AssignStmt => Stmt::Assign {
                lhs: self.expr_list(node.child_by_field_name("left")),
                rhs: self.expr_list(node.child_by_field_name("right")),
            },
            NodeKind::RangeStmt => {
                let is_range = named_children(node)
                    .iter()
                    .any(|child| child.kind() == "range_clause");
                match node.child_by_field_name("body") {
                    Some(body) if is_range => Stmt::Range {
                        body: self.block(body),
                    },
                    _ => Stmt::Other,
                }
            }
            _ => Stmt::Other,
        }
    }

    fn expr_list(&self, node: Option<Node>) -> Vec<Expr> {
        match node {
            Some(list) if list.kind() == "expression_list" => named_children(list)
                .into_iter()
                .map(|expr| self.expr(expr))
                .collect(),
            Some(expr) => vec![self.expr(expr)],
            None => Vec::new(),
        }
    }

    fn expr(&self, node: Node) -> Expr {
        if node.kind() == "literal_element" {
            return named_children(node)
                .first()
                .map(|inner| self.expr(*inner))
                .unwrap_or(Expr::Other);
        }

        match node_kind(node.kind()) {
            NodeKind::CallExpr => {
                let Some(fun) = node.child_by_field_name("function") else {
                    return Expr::Other;
                };
                let args = node
                    .child_by_field_name("arguments")
                    .map(|list| {
                        named_children(list)
                            .into_iter()
                            .map(|arg| self.expr(arg))
                            .collect()
                    })
                    .unwrap_or_default();
                Expr::Call(CallExpr {
                    fun: Box::new(self.expr(fun)),
                    args,
                    offset: node.start_byte(),
                })
            }
            NodeKind::SelectorExpr => {
                match (
                    node.child_by_field_name("operand"),
                    node.child_by_field_name("field"),
                ) {
                    (Some(operand), Some(field)) => Expr::Selector(SelectorExpr {
                        operand: Box::new(self.expr(operand)),
                        field: self.ident(field),
                    }),
                    _ => Expr::Other,
                }
            }
            NodeKind::CompositeLit => {
                let body = if node.kind() == "literal_value" {
                    Some(node)
                } else {
                    node.child_by_field_name("body")
                };
                let elements = body
                    .map(|body| {
                        named_children(body)
                            .into_iter()
                            .map(|element| self.expr(element))
                            .collect()
                    })
                    .unwrap_or_default();
                Expr::CompositeLit(CompositeLit {
                    elements,
                    offset: node.start_byte(),
                })
            }
            NodeKind::KeyValueExpr => {
                let children = named_children(node);
                let key = node
                    .child_by_field_name("key")
                    .or_else(|| children.first().copied());
                let value = node
                    .child_by_field_name("value")
                    .or_else(|| children.last().copied());
                match (key, value) {
                    (Some(key), Some(value)) => Expr::KeyValue(KeyValueExpr {
                        key: Box::new(self.expr(key)),
                        value: Box::new(self.expr(value)),
                    }),
                    _ => Expr::Other,
                }
            }
            NodeKind::BasicLit => Expr::BasicLit(BasicLit {
                value: self.text(node),
                offset: node.start_byte(),
            }),
            NodeKind::Ident => Expr::Ident(self.ident(node)),
            _ => Expr::Other,
        }
    }
}
