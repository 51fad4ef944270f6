//! Two-character operator lookahead for `<`, `>`, `=`.

use super::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Handles `<`, `<=`, and `<>`.
pub fn scan_less(cursor: &mut Cursor, row: u32, column: u32) -> Token {
    cursor.advance();
    if cursor.match_byte(b'=') {
        Token::new(row, column, "<=", TokenKind::Le)
    } else if cursor.match_byte(b'>') {
        Token::new(row, column, "<>", TokenKind::Ne)
    } else {
        Token::new(row, column, "<", TokenKind::Lt)
    }
}

/// Handles `>` and `>=`.
pub fn scan_greater(cursor: &mut Cursor, row: u32, column: u32) -> Token {
    cursor.advance();
    if cursor.match_byte(b'=') {
        Token::new(row, column, ">=", TokenKind::Ge)
    } else {
        Token::new(row, column, ">", TokenKind::Gt)
    }
}

/// Handles `=` and `==`.
pub fn scan_equals(cursor: &mut Cursor, row: u32, column: u32) -> Token {
    cursor.advance();
    if cursor.match_byte(b'=') {
        Token::new(row, column, "==", TokenKind::EqEq)
    } else {
        Token::new(row, column, "=", TokenKind::Assign)
    }
}
