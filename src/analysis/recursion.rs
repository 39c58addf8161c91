//! Recursion shape classification.
//!
//! Functions are inspected in source order and only the first one whose
//! body calls itself is classified. Later functions are never looked at,
//! even when they would give a more telling signal.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{BigOError, Result};
use crate::scanner::lexer::{tokenize, Token};
use crate::scanner::FunctionSignature;

/// Shape of the detected recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecursionKind {
    /// No self-calling function
    #[default]
    None,
    /// One self-call per invocation
    Linear,
    /// Two branching self-calls (`f(n-1)` and `f(n-2)`)
    Exponential,
    /// `n * f(n-1)` style
    Factorial,
}

impl std::fmt::Display for RecursionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Linear => write!(f, "linear"),
            Self::Exponential => write!(f, "exponential"),
            Self::Factorial => write!(f, "factorial"),
        }
    }
}

/// Outcome of recursion classification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecursionSignal {
    pub present: bool,
    pub kind: RecursionKind,
    /// Name of the function the signal was derived from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl RecursionSignal {
    /// No recursion found.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn detected(kind: RecursionKind, function: impl Into<String>) -> Self {
        Self {
            present: true,
            kind,
            function: Some(function.into()),
        }
    }
}

/// A call to the function from inside its own body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SelfCall<'t> {
    /// Tokens of the first argument
    argument: &'t [Token<'t>],
}

impl SelfCall<'_> {
    /// True if the argument, whitespace removed, reads exactly `text`.
    fn spells(&self, text: &str) -> bool {
        let mut rest = text;
        for tok in self.argument {
            match rest.strip_prefix(tok.text) {
                Some(tail) => rest = tail,
                None => return false,
            }
        }
        rest.is_empty()
    }
}

/// Classify the first self-calling function in `functions`.
///
/// Fails only on malformed signatures (an empty name), which cannot come out
/// of the scanner but can be constructed by hand.
pub fn classify_recursion(functions: &[FunctionSignature]) -> Result<RecursionSignal> {
    for function in functions {
        if function.name.is_empty() {
            return Err(BigOError::analysis(format!(
                "function signature at line {} has no name",
                function.line
            )));
        }

        let tokens = tokenize(&function.body);
        let calls = self_calls(&tokens, &function.name);
        if calls.is_empty() {
            continue;
        }

        let kind = classify_shape(function, &tokens, &calls);
        debug!(function = %function.name, calls = calls.len(), %kind, "recursive function");
        return Ok(RecursionSignal::detected(kind, function.name.clone()));
    }

    Ok(RecursionSignal::none())
}

fn classify_shape(
    function: &FunctionSignature,
    tokens: &[Token<'_>],
    calls: &[SelfCall<'_>],
) -> RecursionKind {
    let has_argument = |arg: &str| calls.iter().any(|c| c.spells(arg));

    let branching = function
        .params
        .iter()
        .any(|p| has_argument(&format!("{p}-1")) && has_argument(&format!("{p}-2")));
    if branching || function.name.contains("fibonacci") {
        return RecursionKind::Exponential;
    }

    let multiplies = function
        .params
        .iter()
        .any(|p| has_argument(&format!("{p}-1")) && multiplies_by(tokens, p));
    if multiplies {
        return RecursionKind::Factorial;
    }

    RecursionKind::Linear
}

/// Every `name(` call in `tokens` together with its first argument.
///
/// One pass with a stack of open groups; an argument ends at the first
/// top-level `,`, at the closing bracket, or at end of input.
fn self_calls<'t>(tokens: &'t [Token<'t>], name: &str) -> Vec<SelfCall<'t>> {
    let mut spans: Vec<(usize, Option<usize>)> = Vec::new();
    // Per open group: the span it collects, if it is a self-call.
    let mut open: Vec<Option<usize>> = Vec::new();

    for (idx, tok) in tokens.iter().enumerate() {
        match tok.text {
            "(" | "[" | "{" => {
                let is_call = tok.is_punct("(") && idx > 0 && tokens[idx - 1].is_ident(name);
                if is_call {
                    spans.push((idx + 1, None));
                    open.push(Some(spans.len() - 1));
                } else {
                    open.push(None);
                }
            }
            ")" | "]" | "}" => {
                if let Some(Some(span)) = open.pop() {
                    spans[span].1.get_or_insert(idx);
                }
            }
            "," => {
                if let Some(Some(span)) = open.last() {
                    spans[*span].1.get_or_insert(idx);
                }
            }
            _ => {}
        }
    }

    spans
        .into_iter()
        .map(|(start, end)| {
            let argument = &tokens[start..end.unwrap_or(tokens.len())];
            trace!(%name, tokens = argument.len(), "self-call");
            SelfCall { argument }
        })
        .collect()
}

/// True if `param` appears directly next to a `*` operator.
fn multiplies_by(tokens: &[Token<'_>], param: &str) -> bool {
    tokens.windows(2).any(|pair| {
        (pair[0].is_ident(param) && pair[1].is_punct("*"))
            || (pair[0].is_punct("*") && pair[1].is_ident(param))
    })
}
