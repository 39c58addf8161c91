//! Line classification and function definition extraction.

use serde::{Deserialize, Serialize};

use super::lexer::{Lexed, SourceLine, Token};
use super::profile::LexicalProfile;

/// Role of a physical line for the structural rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Whitespace only
    Blank,
    /// Opens a loop clause (`for ...:` / `while ...:`)
    LoopStart,
    /// Opens a function definition (`def name(...)`)
    Definition,
    /// Anything else, including lines inside multi-line strings
    Code,
}

/// A function definition found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Function name as written
    pub name: String,
    /// Parameter names in declaration order (annotations and defaults stripped)
    pub params: Vec<String>,
    /// 1-based line of the definition
    pub line: usize,
    /// Raw text of the lines that make up the body
    pub body: String,
}

/// Classify one line from the tokens that start on it.
#[must_use]
pub fn classify_line(
    line: &SourceLine<'_>,
    tokens: &[Token<'_>],
    profile: &LexicalProfile,
) -> LineKind {
    if line.blank {
        return LineKind::Blank;
    }
    if definition_name_index(tokens, profile).is_some() {
        return LineKind::Definition;
    }
    if is_loop_start(tokens, profile) {
        return LineKind::LoopStart;
    }
    LineKind::Code
}

/// Loop keyword first, followed somewhere by a `:` outside any brackets.
fn is_loop_start(tokens: &[Token<'_>], profile: &LexicalProfile) -> bool {
    let Some((first, rest)) = tokens.split_first() else {
        return false;
    };
    if !first.is_identifier() || !profile.is_loop_keyword(first.text) {
        return false;
    }

    let mut depth: i32 = 0;
    for tok in rest {
        match tok.text {
            "(" | "[" | "{" => depth += 1,
            ")" | "]" | "}" => depth -= 1,
            ":" if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Index of the name token when `tokens` open a definition, e.g.
/// `def name(` or `async def name(`.
fn definition_name_index(tokens: &[Token<'_>], profile: &LexicalProfile) -> Option<usize> {
    let keyword = usize::from(tokens.first().is_some_and(|t| t.is_ident("async")));
    let is_definition = tokens
        .get(keyword)
        .is_some_and(|t| t.is_identifier() && profile.is_definition_keyword(t.text));
    let name = keyword + 1;

    let well_formed = is_definition
        && tokens.get(name).is_some_and(Token::is_identifier)
        && tokens.get(name + 1).is_some_and(|t| t.is_punct("("));
    well_formed.then_some(name)
}

/// Parameter names of a parameter list. `tokens` starts at the opening `(`
/// and may run past the closing one.
#[must_use]
pub fn parameter_names(tokens: &[Token<'_>]) -> Vec<String> {
    let mut names = Vec::new();
    let mut depth = 0;
    let mut expecting_name = true;

    for tok in tokens {
        match tok.text {
            "(" | "[" | "{" => depth += 1,
            ")" | "]" | "}" => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            "," if depth == 1 => expecting_name = true,
            "*" | "**" if depth == 1 => {}
            _ if depth == 1 && expecting_name => {
                if tok.is_identifier() {
                    names.push(tok.text.to_string());
                }
                expecting_name = false;
            }
            _ => {}
        }
    }

    names
}

/// Extract every function definition in source order.
///
/// A body runs from the line after the definition up to the next definition
/// indented at or left of this one, or to the end of input. Nested
/// definitions therefore stay inside their parent's body and are also
/// reported on their own.
#[must_use]
pub fn extract_functions(
    lexed: &Lexed<'_>,
    kinds: &[LineKind],
    profile: &LexicalProfile,
) -> Vec<FunctionSignature> {
    let definitions: Vec<usize> = (0..lexed.lines.len())
        .filter(|&idx| kinds[idx] == LineKind::Definition)
        .collect();
    let ends = body_ends(lexed, &definitions);
    let mut functions = Vec::new();

    for (pos, &idx) in definitions.iter().enumerate() {
        let line = &lexed.lines[idx];
        let line_tokens = lexed.line_tokens(line);
        let Some(name_idx) = definition_name_index(line_tokens, profile) else {
            continue;
        };

        // Signatures may span lines but never run into the next definition.
        let params_end = definitions
            .get(pos + 1)
            .map_or(lexed.tokens.len(), |&next| lexed.lines[next].tokens.start);
        let params = parameter_names(&lexed.tokens[line.tokens.start + name_idx + 1..params_end]);

        let body = lexed.lines[idx + 1..ends[pos]]
            .iter()
            .map(|l| l.text)
            .collect::<Vec<_>>()
            .join("\n");

        functions.push(FunctionSignature {
            name: line_tokens[name_idx].text.to_string(),
            params,
            line: line.number,
            body,
        });
    }

    functions
}

/// For each definition line, the line index where its body stops: the next
/// definition at the same or lower indentation, or end of input.
fn body_ends(lexed: &Lexed<'_>, definitions: &[usize]) -> Vec<usize> {
    let mut ends = vec![lexed.lines.len(); definitions.len()];
    let mut later: Vec<usize> = Vec::new();

    for (pos, &idx) in definitions.iter().enumerate().rev() {
        let indent = lexed.lines[idx].indent;
        while later.last().is_some_and(|&j| lexed.lines[j].indent > indent) {
            later.pop();
        }
        if let Some(&j) = later.last() {
            ends[pos] = j;
        }
        later.push(idx);
    }

    ends
}
