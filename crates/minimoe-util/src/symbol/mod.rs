//! String interning.
//!
//! `Symbol` is a compact, `Copy` handle into a [`StringTable`]. Unlike a
//! process-wide interner, a `StringTable` is an ordinary owned value: the
//! front-end has no module-level mutable state, so each compilation owns
//! its own table instead of reaching into a global.

use std::fmt;

use crate::FxHashMap;

/// An interned string handle. Two symbols from the same [`StringTable`]
/// compare equal iff the strings they name are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    index: u32,
}

impl Symbol {
    fn new(index: u32) -> Self {
        Symbol { index }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.index)
    }
}

/// An owned, append-only table of interned strings.
///
/// Interning is deduplicating but never frees: once a string has been
/// interned it lives for the lifetime of the table. This is the
/// single-threaded counterpart of a process-wide interner, scoped to one
/// compilation instead of the whole process.
#[derive(Default)]
pub struct StringTable {
    index: FxHashMap<Box<str>, Symbol>,
    strings: Vec<Box<str>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            strings: Vec::new(),
        }
    }

    /// Intern `text`, returning its symbol. Interning the same text twice
    /// returns the same symbol.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&symbol) = self.index.get(text) {
            return symbol;
        }
        let boxed: Box<str> = text.into();
        let symbol = Symbol::new(self.strings.len() as u32);
        self.strings.push(boxed.clone());
        self.index.insert(boxed, symbol);
        symbol
    }

    /// Resolve a symbol back to its text. Panics if `symbol` was not
    /// produced by this table.
    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.index as usize]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_the_same_text_yields_the_same_symbol() {
        let mut table = StringTable::new();
        let a = table.intern("hello");
        let b = table.intern("hello");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_text_yields_distinct_symbols() {
        let mut table = StringTable::new();
        let a = table.intern("hello");
        let b = table.intern("world");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut table = StringTable::new();
        let sym = table.intern("SumFrom");
        assert_eq!(table.resolve(sym), "SumFrom");
    }

    #[quickcheck_macros::quickcheck]
    fn round_trip_is_the_identity(text: String) -> bool {
        let mut table = StringTable::new();
        let symbol = table.intern(&text);
        table.resolve(symbol) == text
    }

    #[quickcheck_macros::quickcheck]
    fn interning_is_idempotent(text: String) -> bool {
        let mut table = StringTable::new();
        let first = table.intern(&text);
        let second = table.intern(&text);
        first == second
    }
}
