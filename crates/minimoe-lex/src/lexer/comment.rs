//! Comment-vs-subtraction disambiguation (the `InPreComment`/`InComment`
//! states).
//!
//! `-` is ambiguous: `--` starts a line comment, a lone `-` is the
//! subtraction operator. Resolving this needs exactly one byte of
//! lookahead.

use super::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// The cursor must be positioned on the `-` that starts this dispatch.
/// Returns `Some(Sub)` if this is the subtraction operator; returns
/// `None` if this was a line comment, which has already been fully
/// skipped (the cursor is left on the terminating `\n`, or at end of
/// input, for `Begin` to reprocess).
pub fn scan_minus(cursor: &mut Cursor, row: u32, column: u32) -> Option<Token> {
    cursor.advance(); // consume the first '-'
    if cursor.current() == b'-' {
        cursor.advance(); // consume the second '-'
        while !cursor.is_at_end() && cursor.current() != b'\n' {
            cursor.advance();
        }
        None
    } else {
        Some(Token::new(row, column, "-", TokenKind::Sub))
    }
}
