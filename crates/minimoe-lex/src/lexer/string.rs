//! String literal scanning (`InString`/`InStringEscape`).
//!
//! The scanner never decodes escapes itself — it only captures the raw
//! content between quotes, exactly as written. Decoding happens
//! afterward in [`crate::escape::unescape_string`].

use super::cursor::Cursor;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::token::{Token, TokenKind};

/// Scans a string literal. The cursor must be positioned on the opening
/// `"`. Returns `Some(token)` with the token's `literal` set to the raw,
/// un-decoded content on a properly closed string; returns `None` if the
/// string was closed early by a newline (or end of input), in which case
/// an `IncompleteString` diagnostic has been recorded and the newline (if
/// any) is left unconsumed for `Begin` to reprocess.
pub fn scan_string(
    cursor: &mut Cursor,
    row: u32,
    column: u32,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Token> {
    let quote_pos = cursor.position();
    cursor.advance(); // consume opening '"'
    let content_start = cursor.position();

    loop {
        if cursor.is_at_end() {
            return incomplete(cursor, row, column, quote_pos, diagnostics);
        }
        match cursor.current() {
            b'\n' => return incomplete(cursor, row, column, quote_pos, diagnostics),
            b'\\' => {
                cursor.advance(); // consume the backslash
                if cursor.is_at_end() || cursor.current() == b'\n' {
                    return incomplete(cursor, row, column, quote_pos, diagnostics);
                }
                cursor.advance(); // consume exactly one escaped byte
            }
            b'"' => {
                let raw = cursor.slice_from(content_start).to_string();
                cursor.advance(); // consume closing '"'
                return Some(Token::new(row, column, raw, TokenKind::StringLiteral));
            }
            _ => cursor.advance(),
        }
    }
}

fn incomplete(
    cursor: &Cursor,
    row: u32,
    column: u32,
    quote_pos: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Token> {
    let spanning = cursor.slice_from(quote_pos);
    let anchor = Token::new(row, column, spanning, TokenKind::StringLiteral);
    diagnostics.push(Diagnostic::anchored(
        DiagnosticKind::IncompleteString,
        anchor,
        "string literal is not closed before the end of the line",
    ));
    None
}
