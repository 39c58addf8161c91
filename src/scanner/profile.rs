//! Keyword sets that drive the lexical detection rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{BigOError, Result};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Largest accepted tab width.
pub const MAX_TAB_WIDTH: usize = 16;

/// Keywords and markers the scanner recognizes.
///
/// Defaults describe Python, the playground's language. Every field has a
/// serde default so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalProfile {
    /// Keywords that open a loop clause (`for`, `while`)
    pub loop_keywords: Vec<String>,
    /// Keywords that open a function definition (`def`)
    pub definition_keywords: Vec<String>,
    /// Call names that count as a sort operation (`sorted(...)`, `.sort(...)`)
    pub sort_calls: Vec<String>,
    /// Membership-test keywords (`in`)
    pub membership_keywords: Vec<String>,
    /// Columns per tab character when measuring indentation
    pub tab_width: usize,
}

impl Default for LexicalProfile {
    fn default() -> Self {
        Self {
            loop_keywords: strings(&["for", "while"]),
            definition_keywords: strings(&["def"]),
            sort_calls: strings(&["sorted", "sort"]),
            membership_keywords: strings(&["in"]),
            tab_width: 4,
        }
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl LexicalProfile {
    /// Check that every keyword list is non-empty and holds identifiers only.
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("loop_keywords", &self.loop_keywords),
            ("definition_keywords", &self.definition_keywords),
            ("sort_calls", &self.sort_calls),
            ("membership_keywords", &self.membership_keywords),
        ];

        for (field, words) in lists {
            if words.is_empty() {
                return Err(BigOError::Config(format!("{field} must not be empty")));
            }
            if let Some(bad) = words.iter().find(|w| !IDENTIFIER.is_match(w)) {
                return Err(BigOError::Config(format!(
                    "{field} entry {bad:?} is not an identifier"
                )));
            }
        }

        if !(1..=MAX_TAB_WIDTH).contains(&self.tab_width) {
            return Err(BigOError::Config(format!(
                "tab_width must be between 1 and {MAX_TAB_WIDTH}, got {}",
                self.tab_width
            )));
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn is_loop_keyword(&self, word: &str) -> bool {
        self.loop_keywords.iter().any(|k| k == word)
    }

    #[inline]
    pub(crate) fn is_definition_keyword(&self, word: &str) -> bool {
        self.definition_keywords.iter().any(|k| k == word)
    }

    #[inline]
    pub(crate) fn is_sort_call(&self, word: &str) -> bool {
        self.sort_calls.iter().any(|k| k == word)
    }

    #[inline]
    pub(crate) fn is_membership_keyword(&self, word: &str) -> bool {
        self.membership_keywords.iter().any(|k| k == word)
    }
}
