//! The scanner's `Begin`-state dispatch loop and the crate's public
//! `parse` entry point.

use super::comment;
use super::cursor::Cursor;
use super::identifier;
use super::number;
use super::operator;
use super::string;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::escape::unescape_string;
use crate::token::{CodeFile, CodeLine, Token, TokenKind};

/// Tokenizes `source` into a [`CodeFile`]. This is the lexer's entire
/// public contract: no other entry point is needed.
pub fn parse(source: &str) -> CodeFile {
    let mut cursor = Cursor::new(source);
    let mut diagnostics = Vec::new();
    let mut lines: Vec<CodeLine> = Vec::new();

    loop {
        skip_whitespace(&mut cursor);
        if cursor.is_at_end() {
            break;
        }

        let row = cursor.row();
        let column = cursor.column();
        let token = scan_one(&mut cursor, row, column, &mut diagnostics);

        if let Some(token) = token {
            push_token(&mut lines, token);
        }
    }

    CodeFile { lines, diagnostics }
}

fn skip_whitespace(cursor: &mut Cursor) {
    loop {
        match cursor.current() {
            b' ' | b'\t' | b'\r' | b'\n' => cursor.advance(),
            _ => return,
        }
    }
}

fn punct(cursor: &mut Cursor, row: u32, column: u32, literal: &'static str, kind: TokenKind) -> Token {
    cursor.advance();
    Token::new(row, column, literal, kind)
}

fn scan_one(
    cursor: &mut Cursor,
    row: u32,
    column: u32,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Token> {
    let c = cursor.current();
    match c {
        b'[' => Some(punct(cursor, row, column, "[", TokenKind::LBracket)),
        b']' => Some(punct(cursor, row, column, "]", TokenKind::RBracket)),
        b'(' => Some(punct(cursor, row, column, "(", TokenKind::LParen)),
        b')' => Some(punct(cursor, row, column, ")", TokenKind::RParen)),
        b',' => Some(punct(cursor, row, column, ",", TokenKind::Comma)),
        b':' => Some(punct(cursor, row, column, ":", TokenKind::Colon)),
        b'+' => Some(punct(cursor, row, column, "+", TokenKind::Add)),
        b'*' => Some(punct(cursor, row, column, "*", TokenKind::Mul)),
        b'/' => Some(punct(cursor, row, column, "/", TokenKind::Div)),
        b'%' => Some(punct(cursor, row, column, "%", TokenKind::Mod)),
        b'.' => Some(punct(cursor, row, column, ".", TokenKind::Dot)),
        b'-' => comment::scan_minus(cursor, row, column),
        b'<' => Some(operator::scan_less(cursor, row, column)),
        b'>' => Some(operator::scan_greater(cursor, row, column)),
        b'=' => Some(operator::scan_equals(cursor, row, column)),
        b'"' => scan_string_literal(cursor, row, column, diagnostics),
        b if b.is_ascii_digit() => Some(number::scan_number(cursor, row, column, diagnostics)),
        b if identifier::is_ident_start(b) => Some(identifier::scan_identifier(cursor, row, column)),
        b => {
            cursor.advance();
            let ch = b as char;
            diagnostics.push(Diagnostic::anchored(
                DiagnosticKind::UnexpectedChar,
                Token::new(row, column, ch.to_string(), TokenKind::Unknown),
                format!("unexpected character '{ch}'"),
            ));
            None
        }
    }
}

fn scan_string_literal(
    cursor: &mut Cursor,
    row: u32,
    column: u32,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Token> {
    let raw = string::scan_string(cursor, row, column, diagnostics)?;
    let decoded = unescape_string(&raw, diagnostics);
    Some(Token::new(row, column, decoded, TokenKind::StringLiteral))
}

/// Appends `token` to the last `CodeLine` if it shares that line's row,
/// otherwise starts a new line. Diagnostics never affect this grouping.
fn push_token(lines: &mut Vec<CodeLine>, token: Token) {
    let starts_new_line = match lines.last() {
        Some(line) => token.row > line.row(),
        None => true,
    };
    if starts_new_line {
        lines.push(CodeLine { tokens: vec![token] });
    } else {
        lines.last_mut().expect("just checked non-empty").tokens.push(token);
    }
}
