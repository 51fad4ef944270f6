//! Identifier and reserved-word scanning (the `InIdentifier` state).

use super::cursor::Cursor;
use crate::token::{keyword_from_ident, Token, TokenKind};

pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Digits are deliberately excluded: the grammar observed in the source
/// does not accept them in identifiers (see the open question recorded
/// in DESIGN.md).
pub fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b)
}

/// Scans `[A-Za-z_]+` starting at the cursor (already positioned on the
/// first character) and resolves it against the reserved-word table.
pub fn scan_identifier(cursor: &mut Cursor, row: u32, column: u32) -> Token {
    let start = cursor.position();
    while is_ident_continue(cursor.current()) {
        cursor.advance();
    }
    let text = cursor.slice_from(start);
    let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
    Token::new(row, column, text, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> Token {
        let mut cursor = Cursor::new(src);
        scan_identifier(&mut cursor, 1, 1)
    }

    #[test]
    fn plain_identifier() {
        let tok = scan("result");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.literal.as_ref(), "result");
    }

    #[test]
    fn reserved_word_phrase() {
        assert_eq!(scan("phrase").kind, TokenKind::Phrase);
    }

    #[test]
    fn underscore_leading_identifier() {
        assert_eq!(scan("_hidden").kind, TokenKind::Identifier);
    }

    #[test]
    fn stops_before_digit() {
        let mut cursor = Cursor::new("x1");
        let tok = scan_identifier(&mut cursor, 1, 1);
        assert_eq!(tok.literal.as_ref(), "x");
        assert_eq!(cursor.current(), b'1');
    }
}
