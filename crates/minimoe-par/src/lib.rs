//! minimoe-par — the declaration and expression parser.
//!
//! Consumes the `CodeFile` produced by `minimoe_lex::parse` and builds a
//! `Module`: a flat collection of `using`/`tag`/`type`/function
//! declarations, plus whatever diagnostics the parse recorded along the
//! way. Expression parsing (used both for function bodies and, in
//! isolation, by the test suite) lives in `expr`; the lexically scoped
//! name table it resolves against lives in `symtab`.

pub mod ast;
pub mod expr;
mod items;
pub mod symtab;
mod util;

pub use ast::Module;
pub use expr::{parse_expression, parse_list, parse_symbol};
pub use items::parse_module;
pub use symtab::{load_predefined_symbol, Frame, SymbolStack};
pub use util::{LineCursor, TokenCursor};
