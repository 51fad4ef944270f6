//! The expression parser: `Or`/`And`/`Prim` with fixed two-level
//! precedence, mixfix function invocation, and list literals.
//!
//! The grammar, informally:
//!
//! ```text
//! Expression := Or
//! Or         := And ( 'or' And )*
//! And        := Prim ( 'and' Prim )*
//! Prim       := Invoke                         -- try first
//!             | ParenGroup                     -- then try ('(' ... ')', list or grouping)
//!             | Literal
//!             | ('+'|'-'|'not') Prim
//!             | Symbol
//! ```
//!
//! `Invoke` and `ParenGroup` are each attempted with a private,
//! scratch diagnostic sink and a cursor snapshot; on failure the cursor
//! rolls back and the next alternative is tried. Only if every
//! alternative fails are the accumulated scratch diagnostics merged
//! into the caller's sink.

use minimoe_lex::{Diagnostic, DiagnosticKind, TokenKind};

use crate::ast::{BinaryOp, Expression, Literal, UnaryOp};
use crate::symtab::SymbolStack;
use crate::util::TokenCursor;

type InnerParser = fn(&mut TokenCursor, &SymbolStack, &mut Vec<Diagnostic>) -> Option<Expression>;

/// Entry point: `Expression := Or`.
pub fn parse_expression(
    cursor: &mut TokenCursor,
    symbols: &SymbolStack,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Expression> {
    parse_or(cursor, symbols, diagnostics)
}

fn parse_or(cursor: &mut TokenCursor, symbols: &SymbolStack, diagnostics: &mut Vec<Diagnostic>) -> Option<Expression> {
    fold_binary(cursor, symbols, diagnostics, &[(TokenKind::Or, BinaryOp::Or)], parse_and)
}

fn parse_and(cursor: &mut TokenCursor, symbols: &SymbolStack, diagnostics: &mut Vec<Diagnostic>) -> Option<Expression> {
    fold_binary(cursor, symbols, diagnostics, &[(TokenKind::And, BinaryOp::And)], parse_prim)
}

/// Table-driven binary folder shared by `Or` and `And`. Peeks the
/// current token; if it matches one of `ops`, consumes it, parses the
/// right operand with `inner`, and folds `exp := Binary(op, exp, rhs)`.
/// On right-operand failure the operator is left unconsumed and the
/// partial left-hand result is returned.
fn fold_binary(
    cursor: &mut TokenCursor,
    symbols: &SymbolStack,
    diagnostics: &mut Vec<Diagnostic>,
    ops: &[(TokenKind, BinaryOp)],
    inner: InnerParser,
) -> Option<Expression> {
    let mut left = inner(cursor, symbols, diagnostics)?;
    loop {
        let matched = cursor
            .current_kind()
            .and_then(|kind| ops.iter().find(|(k, _)| *k == kind).map(|(_, op)| *op));
        let Some(op) = matched else { break };

        let operator_pos = cursor.pos();
        cursor.advance();
        match inner(cursor, symbols, diagnostics) {
            Some(rhs) => {
                left = Expression::Binary { op, lhs: Box::new(left), rhs: Box::new(rhs) };
            }
            None => {
                cursor.set_pos(operator_pos);
                break;
            }
        }
    }
    Some(left)
}

fn parse_prim(cursor: &mut TokenCursor, symbols: &SymbolStack, diagnostics: &mut Vec<Diagnostic>) -> Option<Expression> {
    let snapshot = cursor.pos();

    let mut invoke_scratch = Vec::new();
    if let Some(expr) = parse_invoke(cursor, symbols, &mut invoke_scratch) {
        return Some(expr);
    }
    cursor.set_pos(snapshot);

    let mut list_scratch = Vec::new();
    if let Some(expr) = parse_paren_group_ambiguous(cursor, symbols, &mut list_scratch) {
        return Some(expr);
    }
    cursor.set_pos(snapshot);

    match dispatch_by_kind(cursor, symbols, diagnostics) {
        Some(expr) => Some(expr),
        None => {
            diagnostics.append(&mut invoke_scratch);
            diagnostics.append(&mut list_scratch);
            None
        }
    }
}

fn dispatch_by_kind(cursor: &mut TokenCursor, symbols: &SymbolStack, diagnostics: &mut Vec<Diagnostic>) -> Option<Expression> {
    let tok = cursor.current()?.clone();
    match tok.kind {
        TokenKind::Integer => {
            cursor.advance();
            Some(Expression::Literal(Literal::Integer(tok.literal.to_string())))
        }
        TokenKind::Float => {
            cursor.advance();
            Some(Expression::Literal(Literal::Float(tok.literal.to_string())))
        }
        TokenKind::StringLiteral => {
            cursor.advance();
            Some(Expression::Literal(Literal::String(tok.literal.to_string())))
        }
        TokenKind::Add => {
            cursor.advance();
            let operand = parse_prim(cursor, symbols, diagnostics)?;
            Some(Expression::Unary { op: UnaryOp::Plus, operand: Box::new(operand) })
        }
        TokenKind::Sub => {
            cursor.advance();
            let operand = parse_prim(cursor, symbols, diagnostics)?;
            Some(Expression::Unary { op: UnaryOp::Neg, operand: Box::new(operand) })
        }
        TokenKind::Not => {
            cursor.advance();
            let operand = parse_prim(cursor, symbols, diagnostics)?;
            Some(Expression::Unary { op: UnaryOp::Not, operand: Box::new(operand) })
        }
        TokenKind::Identifier => parse_symbol(cursor, symbols, diagnostics),
        _ => None,
    }
}

/// Consumes one `Identifier` and resolves it via the symbol stack.
pub fn parse_symbol(cursor: &mut TokenCursor, symbols: &SymbolStack, diagnostics: &mut Vec<Diagnostic>) -> Option<Expression> {
    let tok = cursor.current()?.clone();
    if tok.kind != TokenKind::Identifier {
        return None;
    }
    cursor.advance();
    match symbols.resolve(&tok.literal) {
        Some(symbol) => Some(Expression::Symbol(symbol.clone())),
        None => {
            diagnostics.push(Diagnostic::anchored(
                DiagnosticKind::CanNotResolveSymbol,
                tok,
                "cannot resolve symbol",
            ));
            None
        }
    }
}

/// Iterates the symbol stack innermost-to-outermost and, for every
/// visible function, attempts `parse_one_function`. The first success
/// wins; each attempt uses a private sink, merged only on the last
/// failure so the caller sees the most relevant diagnostics.
fn parse_invoke(cursor: &mut TokenCursor, symbols: &SymbolStack, diagnostics: &mut Vec<Diagnostic>) -> Option<Expression> {
    let mut last_attempt_diagnostics = Vec::new();
    let mut attempted = false;
    for function in symbols.functions_innermost_first() {
        attempted = true;
        let snapshot = cursor.pos();
        let mut scratch = Vec::new();
        if let Some(arguments) = parse_one_function(cursor, function, symbols, &mut scratch) {
            return Some(Expression::Invoke { callee_name: callee_display_name(function), arguments });
        }
        cursor.set_pos(snapshot);
        last_attempt_diagnostics = scratch;
    }
    if attempted {
        diagnostics.append(&mut last_attempt_diagnostics);
    }
    None
}

fn callee_display_name(function: &crate::ast::Function) -> String {
    function
        .fragments
        .iter()
        .filter_map(|f| match f {
            crate::ast::Fragment::Name(n) => Some(n.as_str()),
            crate::ast::Fragment::Argument(_) => None,
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Walks `function`'s fragments in order: a `Name` fragment must match
/// an identifier with that exact text; an `Argument` fragment expects
/// `(`, a full expression, and `)`.
fn parse_one_function(
    cursor: &mut TokenCursor,
    function: &crate::ast::Function,
    symbols: &SymbolStack,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Vec<Expression>> {
    let mut arguments = Vec::new();
    for fragment in &function.fragments {
        match fragment {
            crate::ast::Fragment::Name(text) => match cursor.current() {
                Some(tok) if tok.kind == TokenKind::Identifier && tok.literal.as_ref() == text.as_str() => {
                    cursor.advance();
                }
                other => {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::WrongFunctionName,
                        other.cloned(),
                        format!("expected function-name fragment '{text}'"),
                    ));
                    return None;
                }
            },
            crate::ast::Fragment::Argument(_) => {
                if cursor.current_kind() != Some(TokenKind::LParen) {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::UnExpectedTokenType,
                        cursor.current().cloned(),
                        "expected '(' to begin argument",
                    ));
                    return None;
                }
                cursor.advance();
                let expr = parse_expression(cursor, symbols, diagnostics)?;
                if cursor.current_kind() != Some(TokenKind::RParen) {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::CloseBracketNotFound,
                        cursor.current().cloned(),
                        "expected ')' to close argument",
                    ));
                    return None;
                }
                cursor.advance();
                arguments.push(expr);
            }
        }
    }
    Some(arguments)
}

/// Parses `'(' expr (',' expr)* ','? ')'`, returning the parsed elements
/// and whether a trailing comma preceded the closing paren. Returns
/// `None` (with the cursor rolled back) if the current token isn't `(`
/// or any element fails to parse.
fn parse_paren_elements(
    cursor: &mut TokenCursor,
    symbols: &SymbolStack,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<(Vec<Expression>, bool)> {
    if cursor.current_kind() != Some(TokenKind::LParen) {
        return None;
    }
    let snapshot = cursor.pos();
    cursor.advance();

    if cursor.current_kind() == Some(TokenKind::RParen) {
        cursor.advance();
        return Some((Vec::new(), false));
    }

    let mut elements = Vec::new();
    loop {
        match parse_expression(cursor, symbols, diagnostics) {
            Some(expr) => elements.push(expr),
            None => {
                cursor.set_pos(snapshot);
                return None;
            }
        }
        match cursor.current_kind() {
            Some(TokenKind::Comma) => {
                cursor.advance();
                if cursor.current_kind() == Some(TokenKind::RParen) {
                    cursor.advance();
                    return Some((elements, true));
                }
            }
            Some(TokenKind::RParen) => {
                cursor.advance();
                return Some((elements, false));
            }
            _ => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::CloseBracketNotFound,
                    cursor.current().cloned(),
                    "expected ',' or ')'",
                ));
                cursor.set_pos(snapshot);
                return None;
            }
        }
    }
}

/// The ambiguous Prim-level attempt: `()` is an empty list; a single
/// element with no trailing comma unwraps to a parenthesized
/// expression (not a one-element list); anything else follows the
/// strict list rules.
fn parse_paren_group_ambiguous(
    cursor: &mut TokenCursor,
    symbols: &SymbolStack,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Expression> {
    let (mut elements, trailing_comma) = parse_paren_elements(cursor, symbols, diagnostics)?;
    match elements.len() {
        1 if !trailing_comma => Some(elements.pop().expect("len checked above")),
        _ if elements.len() >= 2 && trailing_comma => {
            diagnostics.push(Diagnostic::unanchored(
                DiagnosticKind::NotOneElementListShouldNotEndWithComma,
                "a multi-element list must not end with a trailing comma",
            ));
            None
        }
        _ => Some(Expression::List(elements)),
    }
}

/// The strict list-literal entry point: a single element always
/// requires a trailing comma, unlike the ambiguous Prim-level attempt.
pub fn parse_list(cursor: &mut TokenCursor, symbols: &SymbolStack, diagnostics: &mut Vec<Diagnostic>) -> Option<Expression> {
    let (elements, trailing_comma) = parse_paren_elements(cursor, symbols, diagnostics)?;
    match elements.len() {
        1 if !trailing_comma => {
            diagnostics.push(Diagnostic::unanchored(
                DiagnosticKind::OneElementListShouldEndWithComma,
                "a one-element list must end with a trailing comma",
            ));
            None
        }
        _ if elements.len() >= 2 && trailing_comma => {
            diagnostics.push(Diagnostic::unanchored(
                DiagnosticKind::NotOneElementListShouldNotEndWithComma,
                "a multi-element list must not end with a trailing comma",
            ));
            None
        }
        _ => Some(Expression::List(elements)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symtab::load_predefined_symbol;
    use minimoe_lex::parse;

    fn parse_expr(src: &str) -> (Option<Expression>, Vec<Diagnostic>) {
        let file = parse(src);
        let mut symbols = SymbolStack::new();
        symbols.push(load_predefined_symbol());
        let mut diagnostics = Vec::new();
        let mut cursor = TokenCursor::new(&file.lines[0].tokens);
        let expr = parse_expression(&mut cursor, &symbols, &mut diagnostics);
        (expr, diagnostics)
    }

    #[test]
    fn scenario_mixfix_list_and_binary() {
        let (expr, diagnostics) = parse_expr("(1,2,3) or (1 and 2) and \"doyoubi\"");
        assert!(diagnostics.is_empty());
        assert_eq!(
            expr.unwrap().to_log(),
            "or(List(1, 2, 3), and(and(1, 2), \"doyoubi\"))"
        );
    }

    #[test]
    fn empty_parens_is_empty_list() {
        let (expr, _) = parse_expr("()");
        assert_eq!(expr.unwrap().to_log(), "List()");
    }

    #[test]
    fn single_element_without_comma_is_parenthesized_not_a_list() {
        let (expr, diagnostics) = parse_expr("(1)");
        assert!(diagnostics.is_empty());
        assert_eq!(expr.unwrap().to_log(), "1");
    }

    #[test]
    fn single_element_with_trailing_comma_is_a_one_element_list() {
        let (expr, _) = parse_expr("(1,)");
        assert_eq!(expr.unwrap().to_log(), "List(1)");
    }

    #[test]
    fn two_elements_with_trailing_comma_is_an_error() {
        let (expr, diagnostics) = parse_expr("(1,2,)");
        assert!(expr.is_none());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::NotOneElementListShouldNotEndWithComma);
    }

    #[test]
    fn parse_list_direct_requires_trailing_comma_for_one_element() {
        let file = parse("(1)");
        let mut symbols = SymbolStack::new();
        symbols.push(load_predefined_symbol());
        let mut diagnostics = Vec::new();
        let mut cursor = TokenCursor::new(&file.lines[0].tokens);
        let result = parse_list(&mut cursor, &symbols, &mut diagnostics);
        assert!(result.is_none());
        assert_eq!(diagnostics[0].kind, DiagnosticKind::OneElementListShouldEndWithComma);
    }

    #[test]
    fn unresolved_symbol_emits_diagnostic() {
        let (expr, diagnostics) = parse_expr("nonexistent");
        assert!(expr.is_none());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::CanNotResolveSymbol);
    }

    #[test]
    fn dangling_operator_leaves_partial_left_hand_result() {
        let (expr, _) = parse_expr("1 and");
        assert_eq!(expr.unwrap().to_log(), "1");
    }
}
