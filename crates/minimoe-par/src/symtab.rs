//! The symbol stack: a lexically scoped, innermost-first name table.
//!
//! Each frame is pushed when the expression parser enters a new scope
//! (a function body, a nested block) and popped on exit. No module-level
//! mutable state exists here — a `SymbolStack` is an ordinary owned
//! value, constructed fresh per compilation.

use indexmap::IndexMap;

use crate::ast::{BuiltinType, Function, KeywordSymbol, Symbol, SymbolKind, SymbolPayload};

/// One lexical scope: an ordered set of visible functions and an
/// ordered, name-keyed set of visible symbols.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub functions: Vec<Function>,
    pub symbols: IndexMap<String, Symbol>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_symbol(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    pub fn insert_function(&mut self, function: Function) {
        self.functions.push(function);
    }
}

/// An ordered stack of `Frame`s, searched innermost-first.
#[derive(Debug, Clone, Default)]
pub struct SymbolStack {
    frames: Vec<Frame>,
}

impl SymbolStack {
    pub fn new() -> Self {
        SymbolStack { frames: Vec::new() }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Resolves `name` innermost-first, stopping at the first match.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.frames.iter().rev().find_map(|frame| frame.symbols.get(name))
    }

    /// Every visible function, innermost frame first, declaration order
    /// within a frame — the order `parse_invoke` must try them in.
    pub fn functions_innermost_first(&self) -> impl Iterator<Item = &Function> {
        self.frames.iter().rev().flat_map(|frame| frame.functions.iter())
    }
}

/// Populates a frame with the language's built-in type symbols and
/// keyword symbols. Called once per compilation and pushed as the
/// outermost frame before any user scope.
pub fn load_predefined_symbol() -> Frame {
    let mut frame = Frame::new();

    const BUILTIN_TYPES: &[(&str, BuiltinType)] = &[
        ("Array", BuiltinType::Array),
        ("Boolean", BuiltinType::Boolean),
        ("Float", BuiltinType::Float),
        ("Function", BuiltinType::Function),
        ("Integer", BuiltinType::Integer),
        ("Null", BuiltinType::Null),
        ("String", BuiltinType::String),
        ("Tag", BuiltinType::Tag),
    ];
    for (name, builtin) in BUILTIN_TYPES {
        frame.insert_symbol(Symbol {
            name: (*name).to_string(),
            kind: SymbolKind::Type,
            payload: SymbolPayload::BuiltinType(*builtin),
        });
    }

    const KEYWORDS: &[(&str, KeywordSymbol)] = &[
        ("null", KeywordSymbol::Null),
        ("true", KeywordSymbol::True),
        ("false", KeywordSymbol::False),
        ("result", KeywordSymbol::Result),
        ("if", KeywordSymbol::If),
        ("else", KeywordSymbol::Else),
        ("continuation", KeywordSymbol::Continuation),
        ("var", KeywordSymbol::Var),
        ("getitem", KeywordSymbol::GetItem),
        ("size", KeywordSymbol::Size),
        ("type", KeywordSymbol::Type),
        ("redirectto", KeywordSymbol::RedirectTo),
    ];
    for (name, keyword) in KEYWORDS {
        frame.insert_symbol(Symbol {
            name: (*name).to_string(),
            kind: SymbolKind::Keyword,
            payload: SymbolPayload::Keyword(*keyword),
        });
    }

    frame
}
