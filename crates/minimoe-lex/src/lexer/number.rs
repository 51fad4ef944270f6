//! Numeric literal scanning (`InInteger`/`InFloat`).

use super::cursor::Cursor;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::token::{Token, TokenKind};

/// Scans a numeric literal starting at the cursor (already positioned on
/// the first digit). Handles the `.`-followed-by-digit disambiguation:
/// a `.` not followed by a digit is not part of the number at all, but
/// still produces a `Float` token (with only the digits as its literal)
/// plus an `InvalidFloat` diagnostic spanning through the `.`.
pub fn scan_number(cursor: &mut Cursor, row: u32, column: u32, diagnostics: &mut Vec<Diagnostic>) -> Token {
    let start = cursor.position();
    while cursor.current().is_ascii_digit() {
        cursor.advance();
    }

    if cursor.current() == b'.' {
        if cursor.peek(1).is_ascii_digit() {
            cursor.advance(); // consume '.'
            while cursor.current().is_ascii_digit() {
                cursor.advance();
            }
            let text = cursor.slice_from(start);
            return Token::new(row, column, text, TokenKind::Float);
        }

        // Lone '.': the digits form a Float token, but the '.' is flagged.
        let digits = cursor.slice_from(start).to_string();
        cursor.advance(); // consume the offending '.'
        let spanning = cursor.slice_from(start);
        let anchor = Token::new(row, column, spanning, TokenKind::Float);
        diagnostics.push(Diagnostic::anchored(
            DiagnosticKind::InvalidFloat,
            anchor,
            format!("'{spanning}' is not a valid float literal"),
        ));
        return Token::new(row, column, digits, TokenKind::Float);
    }

    let text = cursor.slice_from(start);
    Token::new(row, column, text, TokenKind::Integer)
}
