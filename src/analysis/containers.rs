//! Built-in container idiom detection.
//!
//! Presence only: each kind is reported once no matter how often it occurs,
//! and results are always ordered List, Dictionary, Set, Tuple.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::scanner::lexer::{Token, TokenKind};

/// Words after which an opening bracket starts a literal rather than a
/// call or subscript.
const LITERAL_CONTEXT_WORDS: &[&str] = &[
    "return", "in", "if", "elif", "else", "and", "or", "not", "is", "yield", "lambda", "assert",
    "await", "for", "while", "del", "with", "as", "from",
];

/// Kind of built-in container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    List,
    Dictionary,
    Set,
    Tuple,
}

impl ContainerKind {
    /// All kinds in reporting order.
    pub const ALL: [ContainerKind; 4] = [Self::List, Self::Dictionary, Self::Set, Self::Tuple];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Dictionary => "dictionary",
            Self::Set => "set",
            Self::Tuple => "tuple",
        }
    }

    /// Constructor call that also counts as this container (`list(...)`).
    #[must_use]
    pub const fn constructor(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Dictionary => "dict",
            Self::Set => "set",
            Self::Tuple => "tuple",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Container kinds present in `tokens`.
#[must_use]
pub fn detect_containers(tokens: &[Token<'_>]) -> BTreeSet<ContainerKind> {
    let groups = group_shapes(tokens);
    ContainerKind::ALL
        .into_iter()
        .filter(|kind| contains_container(tokens, &groups, *kind))
        .collect()
}

/// True if `tokens` build a list, by literal or by `list(...)`.
#[must_use]
pub fn constructs_list(tokens: &[Token<'_>]) -> bool {
    (0..tokens.len()).any(|idx| is_list_at(tokens, idx))
}

/// What sits directly inside one bracket group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GroupShape {
    empty: bool,
    comma: bool,
    colon: bool,
}

/// Shape of every group, indexed by its opening token. Unclosed groups run
/// to the end of input.
fn group_shapes(tokens: &[Token<'_>]) -> Vec<Option<GroupShape>> {
    let mut shapes = vec![None; tokens.len()];
    let mut open: Vec<usize> = Vec::new();

    for (idx, tok) in tokens.iter().enumerate() {
        if tok.kind != TokenKind::Punct {
            continue;
        }
        match tok.text {
            "(" | "[" | "{" => {
                shapes[idx] = Some(GroupShape {
                    empty: is_group_end(tokens.get(idx + 1)),
                    ..GroupShape::default()
                });
                open.push(idx);
            }
            ")" | "]" | "}" => {
                open.pop();
            }
            "," | ":" => {
                if let Some(shape) = open.last().and_then(|&o| shapes[o].as_mut()) {
                    if tok.text == "," {
                        shape.comma = true;
                    } else {
                        shape.colon = true;
                    }
                }
            }
            _ => {}
        }
    }

    shapes
}

fn is_group_end(tok: Option<&Token<'_>>) -> bool {
    tok.is_some_and(|t| matches!(t.text, ")" | "]" | "}"))
}

fn contains_container(
    tokens: &[Token<'_>],
    groups: &[Option<GroupShape>],
    kind: ContainerKind,
) -> bool {
    if kind == ContainerKind::List {
        return constructs_list(tokens);
    }
    (0..tokens.len()).any(|idx| {
        if is_constructor_call(tokens, idx, kind.constructor()) {
            return true;
        }
        let Some(shape) = groups[idx] else {
            return false;
        };
        if !is_literal_position(tokens, idx) {
            return false;
        }
        match (kind, tokens[idx].text) {
            (ContainerKind::Dictionary, "{") => shape.empty || shape.colon,
            (ContainerKind::Tuple, "(") => shape.comma,
            _ => false,
        }
    })
}

fn is_list_at(tokens: &[Token<'_>], idx: usize) -> bool {
    is_constructor_call(tokens, idx, ContainerKind::List.constructor())
        || (tokens[idx].is_punct("[") && is_literal_position(tokens, idx))
}

fn is_constructor_call(tokens: &[Token<'_>], idx: usize, name: &str) -> bool {
    tokens[idx].is_ident(name) && tokens.get(idx + 1).is_some_and(|t| t.is_punct("("))
}

/// An opening bracket at `idx` starts a literal unless it follows a value
/// (identifier, literal or closing bracket), which makes it a call or
/// subscript.
fn is_literal_position(tokens: &[Token<'_>], idx: usize) -> bool {
    let Some(prev) = idx.checked_sub(1).map(|p| &tokens[p]) else {
        return true;
    };
    match prev.kind {
        TokenKind::Identifier => LITERAL_CONTEXT_WORDS.contains(&prev.text),
        TokenKind::Number | TokenKind::Str => false,
        TokenKind::Punct => !matches!(prev.text, ")" | "]" | "}"),
    }
}
