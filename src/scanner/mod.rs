//! Lexical pattern scanning.
//!
//! The scanner turns raw source text into a [`ScanResult`]: loop nesting,
//! function definitions, sort and membership markers, and container idioms.
//! It never fails. Text with no recognized construct yields an empty result.
//!
//! # Example
//!
//! ```
//! use brrr_bigo::scanner::scan;
//!
//! let result = scan("for i in range(5):\n    for j in range(5):\n        print(i*j)");
//! assert_eq!(result.max_loop_nesting_depth, 2);
//! assert!(result.functions.is_empty());
//! ```

pub mod lexer;
pub mod profile;
pub mod structure;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::containers::{constructs_list, detect_containers, ContainerKind};
use crate::analysis::nesting::{max_loop_nesting, LineShape};
use crate::error::Result;

pub use lexer::{lex, tokenize, Lexed, SourceLine, Token, TokenKind};
pub use profile::LexicalProfile;
pub use structure::{classify_line, extract_functions, FunctionSignature, LineKind};

/// Structured lexical signals extracted from one source text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub max_loop_nesting_depth: u32,
    /// Function definitions in order of appearance
    pub functions: Vec<FunctionSignature>,
    pub uses_sort: bool,
    pub uses_membership_test_on_list: bool,
    pub container_kinds: BTreeSet<ContainerKind>,
}

impl ScanResult {
    /// True if nothing at all was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_loop_nesting_depth == 0
            && self.functions.is_empty()
            && !self.uses_sort
            && !self.uses_membership_test_on_list
            && self.container_kinds.is_empty()
    }
}

/// Scanner bound to a validated [`LexicalProfile`].
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    profile: LexicalProfile,
}

impl Scanner {
    /// Create a scanner, rejecting invalid profiles.
    pub fn new(profile: LexicalProfile) -> Result<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    #[must_use]
    pub fn profile(&self) -> &LexicalProfile {
        &self.profile
    }

    /// Scan `source` into a [`ScanResult`].
    #[must_use]
    pub fn scan(&self, source: &str) -> ScanResult {
        let lexed = lex(source, self.profile.tab_width);
        let kinds: Vec<LineKind> = lexed
            .lines
            .iter()
            .map(|line| classify_line(line, lexed.line_tokens(line), &self.profile))
            .collect();

        let max_loop_nesting_depth = max_loop_nesting(
            lexed
                .lines
                .iter()
                .zip(&kinds)
                .map(|(line, kind)| line_shape(line, *kind)),
        );
        let functions = extract_functions(&lexed, &kinds, &self.profile);
        let uses_sort = self.calls_sort(&lexed.tokens);
        let uses_membership_test_on_list = lexed
            .tokens
            .iter()
            .any(|t| t.is_identifier() && self.profile.is_membership_keyword(t.text))
            && constructs_list(&lexed.tokens);
        let container_kinds = detect_containers(&lexed.tokens);

        debug!(
            lines = lexed.lines.len(),
            tokens = lexed.tokens.len(),
            max_loop_nesting_depth,
            functions = functions.len(),
            uses_sort,
            uses_membership_test_on_list,
            containers = container_kinds.len(),
            "scanned source"
        );

        ScanResult {
            max_loop_nesting_depth,
            functions,
            uses_sort,
            uses_membership_test_on_list,
            container_kinds,
        }
    }

    /// `sorted(...)` or `.sort(...)`, any configured sort name followed by `(`.
    fn calls_sort(&self, tokens: &[Token<'_>]) -> bool {
        tokens.windows(2).any(|pair| {
            pair[0].is_identifier()
                && self.profile.is_sort_call(pair[0].text)
                && pair[1].is_punct("(")
        })
    }
}

fn line_shape(line: &SourceLine<'_>, kind: LineKind) -> LineShape {
    match kind {
        LineKind::LoopStart => LineShape::LoopStart,
        LineKind::Blank => LineShape::Blank,
        _ if line.indent == 0 => LineShape::Unindented,
        _ => LineShape::Indented,
    }
}

/// Scan `source` with the default (Python) profile.
#[must_use]
pub fn scan(source: &str) -> ScanResult {
    Scanner::default().scan(source)
}
