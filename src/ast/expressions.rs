/// Expression AST node.
///
/// A closed set of alternatives dispatched by exhaustive matching. Each
/// node exclusively owns its children; the result of a parse is a strict
/// tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal.
    Constant(i64),
    /// Plain identifier reference.
    Variable(String),
    /// The receiver keyword `this`.
    This,
    /// Class reference, written `@Name`.
    ClassRef(String),
    /// Fully parenthesized binary operation, written `(lhs op rhs)`.
    /// The operator is always one of `+ - * / =`.
    Binop {
        left: Box<Expr>,
        operator: char,
        right: Box<Expr>,
    },
    /// Field read, written `&base.field`.
    FieldRead { base: Box<Expr>, field: String },
    /// Method call, written `^base.method(args...)`. Arguments keep their
    /// source left-to-right order; the list may be empty.
    MethodCall {
        base: Box<Expr>,
        method: String,
        arguments: Vec<Expr>,
    },
}
