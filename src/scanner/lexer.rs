//! Single-pass tokenizer for Python-style source text.
//!
//! Produces a flat token stream plus a per-line table. The tokenizer never
//! fails: unterminated strings run to the end of their line (or of the input
//! for triple-quoted strings) and any unrecognized character becomes a
//! one-character punctuation token.
//!
//! Comments are dropped and string literals collapse into a single
//! [`TokenKind::Str`] token, so keywords that only appear inside strings or
//! comments never reach the detection rules.

use std::ops::Range;

use memchr::{memchr, memchr_iter, memmem};

/// Multi-character operators emitted as a single punctuation token.
///
/// Longest match first so `**=` never splits into `**` and `=`.
const COMPOUND_OPERATORS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "...", "**", "//", "->", "==", "!=", "<=", ">=", ":=", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "@=",
];

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifiers and keywords (keywords are not distinguished here)
    Identifier,
    /// Numeric literal
    Number,
    /// String literal, quotes and prefix included
    Str,
    /// Operator or delimiter
    Punct,
}

/// A token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// 1-based line on which the token starts.
    pub line: usize,
}

impl<'a> Token<'a> {
    /// True if this is the punctuation token `p`.
    #[inline]
    #[must_use]
    pub fn is_punct(&self, p: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == p
    }

    /// True if this is the identifier `name`.
    #[inline]
    #[must_use]
    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == name
    }

    #[inline]
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}

/// One physical line of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Raw line text without the trailing newline.
    pub text: &'a str,
    /// Leading whitespace width in columns.
    pub indent: usize,
    /// Line contains only whitespace.
    pub blank: bool,
    /// Indices into [`Lexed::tokens`] of tokens starting on this line.
    pub tokens: Range<usize>,
}

/// Token stream and line table for one source text.
#[derive(Debug, Clone, Default)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub lines: Vec<SourceLine<'a>>,
}

impl<'a> Lexed<'a> {
    /// Tokens that start on `line`.
    #[must_use]
    pub fn line_tokens(&self, line: &SourceLine<'a>) -> &[Token<'a>] {
        &self.tokens[line.tokens.clone()]
    }
}

/// Tokenize `source` and build its line table.
#[must_use]
pub fn lex(source: &str, tab_width: usize) -> Lexed<'_> {
    let tokens = tokenize(source);
    let mut lines = Vec::new();

    for (idx, text) in source.lines().enumerate() {
        let number = idx + 1;
        let start = tokens.partition_point(|t| t.line < number);
        let end = tokens.partition_point(|t| t.line <= number);
        lines.push(SourceLine {
            number,
            text,
            indent: indent_width(text, tab_width),
            blank: text.trim().is_empty(),
            tokens: start..end,
        });
    }

    Lexed { tokens, lines }
}

/// Width of the leading whitespace of `line`, counting tabs as `tab_width`.
#[inline]
#[must_use]
pub fn indent_width(line: &str, tab_width: usize) -> usize {
    let mut width = 0;
    for b in line.bytes() {
        match b {
            b'\t' => width += tab_width,
            b' ' => width += 1,
            _ => break,
        }
    }
    width
}

/// Tokenize `source` into a flat token stream ordered by position.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'\n' => {
                line += 1;
                i += 1;
            }
            b' ' | b'\t' | b'\r' | b'\x0c' | b'\\' => i += 1,
            b'#' => {
                i = memchr(b'\n', &bytes[i..]).map_or(bytes.len(), |off| i + off);
            }
            b'"' | b'\'' => {
                let end = string_end(bytes, i);
                tokens.push(Token {
                    kind: TokenKind::Str,
                    text: &source[i..end],
                    line,
                });
                line += memchr_iter(b'\n', &bytes[i..end]).count();
                i = end;
            }
            b'0'..=b'9' => {
                let end = scan_while(bytes, i, |c| c.is_ascii_alphanumeric() || c == b'_' || c == b'.');
                tokens.push(Token {
                    kind: TokenKind::Number,
                    text: &source[i..end],
                    line,
                });
                i = end;
            }
            _ if is_ident_start(source, i) => {
                let end = ident_end(source, i);
                let word = &source[i..end];
                if is_string_prefix(word) && matches!(bytes.get(end), Some(b'"' | b'\'')) {
                    let str_end = string_end(bytes, end);
                    tokens.push(Token {
                        kind: TokenKind::Str,
                        text: &source[i..str_end],
                        line,
                    });
                    line += memchr_iter(b'\n', &bytes[end..str_end]).count();
                    i = str_end;
                } else {
                    tokens.push(Token {
                        kind: TokenKind::Identifier,
                        text: word,
                        line,
                    });
                    i = end;
                }
            }
            _ => {
                let len = COMPOUND_OPERATORS
                    .iter()
                    .find(|op| bytes[i..].starts_with(op.as_bytes()))
                    .map_or_else(|| char_len(source, i), |op| op.len());
                tokens.push(Token {
                    kind: TokenKind::Punct,
                    text: &source[i..i + len],
                    line,
                });
                i += len;
            }
        }
    }

    tokens
}

#[inline]
fn scan_while(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    let mut end = start;
    while end < bytes.len() && pred(bytes[end]) {
        end += 1;
    }
    end
}

#[inline]
fn char_len(source: &str, at: usize) -> usize {
    source[at..].chars().next().map_or(1, char::len_utf8)
}

fn is_ident_start(source: &str, at: usize) -> bool {
    source[at..]
        .chars()
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
}

fn ident_end(source: &str, start: usize) -> usize {
    source[start..]
        .char_indices()
        .find(|(_, c)| !(*c == '_' || c.is_alphanumeric()))
        .map_or(source.len(), |(off, _)| start + off)
}

fn is_string_prefix(word: &str) -> bool {
    word.len() <= 2
        && word
            .bytes()
            .all(|b| matches!(b.to_ascii_lowercase(), b'r' | b'b' | b'f' | b'u'))
}

/// Byte offset just past the string literal whose opening quote is at `start`.
fn string_end(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let triple = [quote; 3];

    if bytes[start..].starts_with(&triple) {
        let body = start + 3;
        return memmem::find(&bytes[body..], &triple).map_or(bytes.len(), |off| body + off + 3);
    }

    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}
