//! String-escape decoding, kept separate from scanning: the lexer only
//! captures the raw content between quotes, and `unescape_string` walks
//! that raw content afterward to build the decoded value.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::token::Token;

fn decode_escape(c: char) -> Option<char> {
    match c {
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Decodes the raw, un-decoded content of a string literal (the text
/// between the quotes, exclusive). `raw_token` anchors any
/// `InvalidEscapeChar` diagnostics: its `literal` is the original,
/// un-decoded text, per the contract that the diagnostic anchor retains
/// the value the lexer actually scanned.
pub fn unescape_string(raw_token: &Token, diagnostics: &mut Vec<Diagnostic>) -> String {
    let raw = &raw_token.literal;
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped) => match decode_escape(escaped) {
                Some(decoded) => out.push(decoded),
                None => {
                    diagnostics.push(Diagnostic::anchored(
                        DiagnosticKind::InvalidEscapeChar,
                        raw_token.clone(),
                        format!("unrecognized escape sequence '\\{escaped}'"),
                    ));
                    out.push(escaped);
                }
            },
            // A trailing lone backslash: the lexer only ever produces this
            // content from InStringEscape, which always consumes one byte
            // after `\`, so this arm is unreachable for well-formed input.
            None => out.push('\\'),
        }
    }

    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::token::TokenKind;
    use proptest::prelude::*;

    fn token(literal: &str) -> Token {
        Token::new(1, 1, literal, TokenKind::StringLiteral)
    }

    proptest! {
        /// Text with no backslash in it is never touched by decoding,
        /// and never raises a diagnostic.
        #[test]
        fn text_without_backslashes_passes_through_unchanged(s in "[^\\\\]*") {
            let mut diags = Vec::new();
            let decoded = unescape_string(&token(&s), &mut diags);
            prop_assert_eq!(decoded, s);
            prop_assert!(diags.is_empty());
        }

        /// Every recognized escape, embedded anywhere in arbitrary
        /// surrounding text, decodes to exactly one character and never
        /// raises a diagnostic.
        #[test]
        fn recognized_escape_decodes_to_one_char(prefix in "[^\\\\]{0,8}", suffix in "[^\\\\]{0,8}") {
            for &(escape, decoded) in &[
                ('n', '\n'), ('t', '\t'), ('r', '\r'), ('\\', '\\'), ('"', '"'),
            ] {
                let raw = format!("{prefix}\\{escape}{suffix}");
                let mut diags = Vec::new();
                let result = unescape_string(&token(&raw), &mut diags);
                prop_assert_eq!(result, format!("{prefix}{decoded}{suffix}"));
                prop_assert!(diags.is_empty());
            }
        }
    }
}
