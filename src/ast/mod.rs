//! AST (Abstract Syntax Tree) module.
//!
//! Contains the expression node definitions produced by the parser.

pub mod expressions;
