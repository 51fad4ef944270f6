//! minimoe — the front end of a small English-like scripting language.
//!
//! ============================================================================
//! PIPELINE OVERVIEW
//! ============================================================================
//!
//! ```text
//! Source text
//!      │
//!      ▼
//! [minimoe-lex] ──▶ CodeFile (lines of Token, plus lexer diagnostics)
//!      │
//!      ▼
//! [minimoe-par] ──▶ Module (using/tag/type/function declarations)
//! ```
//!
//! This crate only assembles the two phases; it does not evaluate
//! anything the parser produces. `compile` is the single entry point:
//! it never panics on malformed input, it reports diagnostics instead.

pub use minimoe_lex::{CodeFile, Diagnostic, DiagnosticKind, Token, TokenKind};
pub use minimoe_par::{ast, Module};

/// Lexes and parses `source`, returning the resulting `Module` together
/// with every diagnostic recorded by either phase, lexer diagnostics
/// first in source order, followed by parser diagnostics in the order
/// they were raised.
pub fn compile(source: &str) -> (Module, Vec<Diagnostic>) {
    let file = minimoe_lex::parse(source);
    let mut diagnostics = file.diagnostics.clone();
    let module = minimoe_par::parse_module(&file, &mut diagnostics);
    (module, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_tag_declaration_with_no_diagnostics() {
        let (module, diagnostics) = compile("tag t\n");
        assert!(diagnostics.is_empty());
        assert_eq!(module.tags.len(), 1);
        assert_eq!(module.tags[0].name, "t");
    }

    #[test]
    fn surfaces_lexer_diagnostics_alongside_parser_output() {
        let (_, diagnostics) = compile("tag \"unterminated\n");
        assert!(diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::IncompleteString));
    }
}
