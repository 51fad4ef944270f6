//! The declaration parser: recognizes top-level module constructs and
//! computes each function's body extent.
//!
//! Dispatch is driven by the first token of each physical line; this
//! module never looks past the first token before deciding which
//! recognizer to hand the line to.

use minimoe_lex::{CodeFile, Diagnostic, DiagnosticKind, TokenKind};

use crate::ast::{ArgDecl, ArgKind, Fragment, Function, FunctionKind, Module, Tag, TypeDecl, Using};
use crate::util::{with_line, LineCursor, TokenCursor};

/// First-token kinds that terminate a function's forward body scan —
/// any other top-level declaration, or a line this parser doesn't
/// recognize at all (`cps`/`category`).
fn is_top_level_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Phrase
            | TokenKind::Sentence
            | TokenKind::Block
            | TokenKind::Tag
            | TokenKind::Type
            | TokenKind::Module
            | TokenKind::Using
            | TokenKind::Cps
            | TokenKind::Category
    )
}

/// Entry point: inspects every line's first token and dispatches.
pub fn parse_module(file: &CodeFile, diagnostics: &mut Vec<Diagnostic>) -> Module {
    let mut module = Module::default();
    let mut cursor = LineCursor::new(&file.lines);

    while !cursor.is_at_end() {
        let first_kind = cursor.current().expect("checked not at end").tokens[0].kind;
        match first_kind {
            TokenKind::Module => {
                if let Some(name) = parse_simple_name(&mut cursor, diagnostics) {
                    module.name = Some(name);
                }
            }
            TokenKind::Using => {
                if let Some(name) = parse_simple_name(&mut cursor, diagnostics) {
                    module.usings.push(Using { module_name: name });
                }
            }
            TokenKind::Tag => {
                if let Some(name) = parse_simple_name(&mut cursor, diagnostics) {
                    module.tags.push(Tag { name });
                }
            }
            TokenKind::Type => {
                parse_type(&mut cursor, diagnostics, &mut module);
            }
            TokenKind::Phrase | TokenKind::Sentence | TokenKind::Block => {
                parse_function(&mut cursor, diagnostics, &mut module);
            }
            TokenKind::Cps | TokenKind::Category => {
                let anchor = cursor.current().expect("checked not at end").tokens[0].clone();
                diagnostics.push(Diagnostic::anchored(
                    DiagnosticKind::UnExpectedTokenType,
                    anchor,
                    "cps/category declarations are not implemented",
                ));
                cursor.advance();
            }
            _ => cursor.advance(),
        }
    }

    module
}

/// A line of the shape `<keyword> <Identifier> <trailing...>`. Absence
/// of the identifier emits `NoMoreToken`; trailing tokens are reported
/// but not fatal.
fn parse_simple_name(cursor: &mut LineCursor, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
    let mut name = None;
    let ok = with_line(cursor, diagnostics, |tc, diags| {
        tc.advance(); // the keyword itself
        if super::util::reached_end(tc, diags) {
            return false;
        }
        let tok = tc.current().expect("just checked not at end").clone();
        if tok.kind != TokenKind::Identifier {
            diags.push(Diagnostic::anchored(
                DiagnosticKind::UnExpectedTokenType,
                tok,
                "expected an identifier",
            ));
            return false;
        }
        tc.advance();
        name = Some(tok.literal.to_string());
        true
    });
    if ok {
        name
    } else {
        None
    }
}

/// A bare `<Identifier>` line, used for `type` member lines.
fn parse_member_name(cursor: &mut LineCursor, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
    let mut name = None;
    let ok = with_line(cursor, diagnostics, |tc, diags| {
        if super::util::reached_end(tc, diags) {
            return false;
        }
        let tok = tc.current().expect("just checked not at end").clone();
        if tok.kind != TokenKind::Identifier {
            diags.push(Diagnostic::anchored(
                DiagnosticKind::UnExpectedTokenType,
                tok,
                "expected a member name",
            ));
            return false;
        }
        tc.advance();
        name = Some(tok.literal.to_string());
        true
    });
    if ok {
        name
    } else {
        None
    }
}

/// Header line `type <Identifier>`, then zero or more member lines,
/// ended by a line whose first token is `end`.
fn parse_type(cursor: &mut LineCursor, diagnostics: &mut Vec<Diagnostic>, module: &mut Module) {
    let Some(name) = parse_simple_name(cursor, diagnostics) else { return };

    let mut members = Vec::new();
    loop {
        if cursor.is_at_end() {
            break;
        }
        let first_kind = cursor.current().expect("checked not at end").tokens[0].kind;
        if first_kind == TokenKind::End {
            cursor.advance();
            break;
        }
        match parse_member_name(cursor, diagnostics) {
            Some(member) => members.push(member),
            None => {
                if !cursor.is_at_end() {
                    cursor.advance();
                }
            }
        }
    }

    module.types.push(TypeDecl { name, members });
}

/// Maps a qualifier token inside an argument bracket to its `ArgKind`.
/// `blockbody`-flavored arguments reuse the `block` reserved word
/// (there is no separate `blockbody` keyword in the lexer's reserved
/// word table) — see DESIGN.md for the grounding of this reading.
fn qualifier_from_kind(kind: TokenKind) -> Option<ArgKind> {
    match kind {
        TokenKind::List => Some(ArgKind::List),
        TokenKind::Block => Some(ArgKind::BlockBody),
        TokenKind::Deferred => Some(ArgKind::Deferred),
        TokenKind::Assignable => Some(ArgKind::Assignable),
        _ => None,
    }
}

/// Consumes `( [qualifier] Identifier )`. Precondition: the cursor is
/// positioned at the opening `(`.
fn parse_arg_decl(cursor: &mut TokenCursor, diagnostics: &mut Vec<Diagnostic>) -> Option<ArgDecl> {
    cursor.advance(); // consume '('

    let mut kind = ArgKind::Normal;
    let mut tok = match cursor.current() {
        Some(t) => t.clone(),
        None => {
            diagnostics.push(Diagnostic::unanchored(
                DiagnosticKind::InvalidArgumentDeclaration,
                "argument declaration truncated",
            ));
            return None;
        }
    };

    if let Some(qualifier) = qualifier_from_kind(tok.kind) {
        kind = qualifier;
        cursor.advance();
        tok = match cursor.current() {
            Some(t) => t.clone(),
            None => {
                diagnostics.push(Diagnostic::unanchored(
                    DiagnosticKind::InvalidArgumentDeclaration,
                    "argument declaration truncated after qualifier",
                ));
                return None;
            }
        };
    }

    if tok.kind != TokenKind::Identifier {
        diagnostics.push(Diagnostic::anchored(
            DiagnosticKind::InvalidArgumentDeclaration,
            tok,
            "expected an argument name",
        ));
        return None;
    }
    cursor.advance();
    let name = tok.literal.to_string();

    match cursor.current() {
        Some(t) if t.kind == TokenKind::RParen => {
            cursor.advance();
            Some(ArgDecl { kind, name })
        }
        Some(t) => {
            let t = t.clone();
            diagnostics.push(Diagnostic::anchored(
                DiagnosticKind::InvalidArgumentDeclaration,
                t,
                "expected ')' to close argument declaration",
            ));
            None
        }
        None => {
            diagnostics.push(Diagnostic::unanchored(
                DiagnosticKind::InvalidArgumentDeclaration,
                "expected ')' to close argument declaration",
            ));
            None
        }
    }
}

/// Parses a `phrase`/`sentence`/`block` header, then computes the body
/// extent by scanning forward for the next top-level declaration (the
/// hard stop) and, within that bound, the first `end` line.
fn parse_function(cursor: &mut LineCursor, diagnostics: &mut Vec<Diagnostic>, module: &mut Module) {
    let header_token = cursor.current().expect("dispatcher guarantees a line").tokens[0].clone();
    let kind = match header_token.kind {
        TokenKind::Phrase => FunctionKind::Phrase,
        TokenKind::Sentence => FunctionKind::Sentence,
        TokenKind::Block => FunctionKind::Block,
        _ => unreachable!("dispatcher only calls parse_function for phrase/sentence/block"),
    };

    let mut fragments = Vec::new();
    let mut arguments = Vec::new();
    let mut alias = None;

    let header_ok = with_line(cursor, diagnostics, |tc, diags| {
        tc.advance(); // consume phrase/sentence/block
        loop {
            let Some(tok) = tc.current().cloned() else { break };
            match tok.kind {
                TokenKind::Colon => {
                    tc.advance();
                    if super::util::reached_end(tc, diags) {
                        return false;
                    }
                    let name_tok = tc.current().expect("just checked not at end").clone();
                    if name_tok.kind != TokenKind::Identifier {
                        diags.push(Diagnostic::anchored(
                            DiagnosticKind::UnExpectedTokenType,
                            name_tok,
                            "expected an alias identifier",
                        ));
                        return false;
                    }
                    tc.advance();
                    alias = Some(name_tok.literal.to_string());
                    break;
                }
                TokenKind::Identifier => {
                    tc.advance();
                    fragments.push(Fragment::Name(tok.literal.to_string()));
                }
                TokenKind::LParen => match parse_arg_decl(tc, diags) {
                    Some(arg) => {
                        fragments.push(Fragment::Argument(arg.clone()));
                        arguments.push(arg);
                    }
                    None => return false,
                },
                _ => {
                    diags.push(Diagnostic::anchored(
                        DiagnosticKind::UnExpectedTokenType,
                        tok,
                        "unexpected token in function header",
                    ));
                    return false;
                }
            }
        }
        true
    });

    if !header_ok {
        if !cursor.is_at_end() {
            cursor.advance();
        }
        return;
    }

    let lines = cursor.lines();
    let body_start = cursor.pos();

    let mut scan_limit = lines.len();
    for (offset, line) in lines[body_start..].iter().enumerate() {
        if is_top_level_start(line.tokens[0].kind) {
            scan_limit = body_start + offset;
            break;
        }
    }

    let body_end = lines[body_start..scan_limit]
        .iter()
        .position(|line| line.tokens[0].kind == TokenKind::End)
        .map(|offset| body_start + offset);

    match body_end {
        Some(end_idx) => {
            module.functions.push(Function {
                kind,
                fragments,
                arguments,
                alias,
                body_start,
                body_end: end_idx,
            });
            cursor.set_pos(end_idx + 1);
        }
        None => {
            diagnostics.push(Diagnostic::anchored(
                DiagnosticKind::ExpectEndForFunctionDeclaration,
                header_token,
                "no matching 'end' found for this function declaration",
            ));
            cursor.set_pos(scan_limit);
        }
    }
}
