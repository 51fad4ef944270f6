//! Parser utilities: the token-level checks and the line-bounded helper
//! shared by the declaration and expression parsers.
//!
//! Tokens and lines are consumed through slice-backed cursors rather
//! than iterators borrowed from a container type, so a parser only ever
//! sees `&[Token]`/`&[CodeLine]` and never the cursor arithmetic behind
//! `CodeFile`'s storage.

use minimoe_lex::{CodeLine, Diagnostic, DiagnosticKind, Token, TokenKind};

/// A cursor over one line's tokens.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    pub fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }
}

/// A cursor over a file's lines.
pub struct LineCursor<'a> {
    lines: &'a [CodeLine],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [CodeLine]) -> Self {
        LineCursor { lines, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn current(&self) -> Option<&'a CodeLine> {
        self.lines.get(self.pos)
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn lines(&self) -> &'a [CodeLine] {
        self.lines
    }
}

/// Variant A: silent. Advances and returns `true` on a match; otherwise
/// leaves the cursor untouched and returns `false`.
pub fn expect(cursor: &mut TokenCursor, kind: TokenKind) -> bool {
    match cursor.current() {
        Some(tok) if tok.kind == kind => {
            cursor.advance();
            true
        }
        _ => false,
    }
}

/// Variant B: noisy. Precondition: `cursor` is not already at end.
/// Emits `UnExpectedTokenType` on mismatch.
pub fn expect_noisy(cursor: &mut TokenCursor, kind: TokenKind, diagnostics: &mut Vec<Diagnostic>) -> bool {
    let tok = cursor
        .current()
        .expect("expect_noisy precondition: cursor must not be at end")
        .clone();
    if tok.kind == kind {
        cursor.advance();
        true
    } else {
        diagnostics.push(Diagnostic::anchored(
            DiagnosticKind::UnExpectedTokenType,
            tok.clone(),
            format!("expected {kind:?}, found {:?}", tok.kind),
        ));
        false
    }
}

/// If `cursor` is at end, emits `NoMoreToken` anchored at the preceding
/// token (if any) and returns `true`.
pub fn reached_end(cursor: &TokenCursor, diagnostics: &mut Vec<Diagnostic>) -> bool {
    if cursor.is_at_end() {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::NoMoreToken,
            cursor.previous().cloned(),
            "no more tokens on this line",
        ));
        true
    } else {
        false
    }
}

/// If `cursor` still has tokens left, emits `CanNotParseLeftToken`
/// anchored at the current token and returns `false`; otherwise `true`.
pub fn not_at_end_of_line(cursor: &TokenCursor, diagnostics: &mut Vec<Diagnostic>) -> bool {
    match cursor.current() {
        Some(tok) => {
            diagnostics.push(Diagnostic::anchored(
                DiagnosticKind::CanNotParseLeftToken,
                tok.clone(),
                "tokens remain unconsumed on this line",
            ));
            false
        }
        None => true,
    }
}

/// Runs `body` against the current line's tokens. Advances the line
/// cursor iff `body` returns `true`; always reports any trailing tokens
/// left unconsumed (non-fatal). On end-of-file, emits an anchor-less
/// `NoMoreLine` and returns `false` without running `body`.
pub fn with_line<F>(line_cursor: &mut LineCursor, diagnostics: &mut Vec<Diagnostic>, body: F) -> bool
where
    F: FnOnce(&mut TokenCursor, &mut Vec<Diagnostic>) -> bool,
{
    match line_cursor.current() {
        None => {
            diagnostics.push(Diagnostic::unanchored(DiagnosticKind::NoMoreLine, "no more lines"));
            false
        }
        Some(line) => {
            let mut token_cursor = TokenCursor::new(&line.tokens);
            let ok = body(&mut token_cursor, diagnostics);
            if ok {
                not_at_end_of_line(&token_cursor, diagnostics);
                line_cursor.advance();
            }
            ok
        }
    }
}
