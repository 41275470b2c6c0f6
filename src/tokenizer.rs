use tracing::{debug, trace};

use crate::error::TokenizeError;

/// Where the scanner is relative to the token being read. `start` is the index
/// of the first content character, past any opening quote.
#[derive(Debug, Clone, Copy)]
enum State {
    Idle,
    Unquoted { start: usize },
    SingleQuoted { start: usize },
    DoubleQuoted { start: usize },
}

/// Splits `input` into arguments the way a shell would split a simple command
/// line.
///
/// Leading and trailing whitespace is ignored and runs of whitespace between
/// words collapse. A quoted section is one argument, quotes of the other kind
/// are literal inside it, and `\'`, `\"`, `\\` or a backslash before
/// whitespace resolve to the escaped character. A quote may not start in the
/// middle of an unquoted word, and whitespace may not be escaped outside
/// quotes.
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    let chars: Vec<char> = input.trim_matches(is_whitespace).chars().collect();
    let mut spans: Vec<&[char]> = Vec::new();
    let mut state = State::Idle;

    for (index, &c) in chars.iter().enumerate() {
        state = match state {
            State::Idle => match c {
                '\'' => State::SingleQuoted { start: index + 1 },
                '"' => State::DoubleQuoted { start: index + 1 },
                c if is_whitespace(c) => State::Idle,
                _ => State::Unquoted { start: index },
            },
            State::Unquoted { start } => {
                if is_whitespace(c) {
                    if is_escaped(&chars, index) {
                        debug!(index, "escaped whitespace outside quotes");
                        return Err(TokenizeError::InvalidSyntax);
                    }
                    spans.push(&chars[start..index]);
                    State::Idle
                } else if is_special(c) {
                    debug!(index, quote = %c, "quote inside an unquoted word");
                    return Err(TokenizeError::InvalidArgument);
                } else {
                    state
                }
            }
            State::SingleQuoted { start } if c == '\'' && !is_escaped(&chars, index) => {
                spans.push(&chars[start..index]);
                State::Idle
            }
            State::DoubleQuoted { start } if c == '"' && !is_escaped(&chars, index) => {
                spans.push(&chars[start..index]);
                State::Idle
            }
            quoted => quoted,
        };
    }

    match state {
        State::Idle => {}
        // No parity check here: a trailing backslash escapes nothing.
        State::Unquoted { start } => spans.push(&chars[start..]),
        State::SingleQuoted { .. } | State::DoubleQuoted { .. } => {
            debug!("input ended inside a quoted section");
            return Err(TokenizeError::UnexpectedEndOfInput);
        }
    }

    let tokens: Vec<String> = spans.into_iter().map(unescape).collect();
    trace!(count = tokens.len(), ?tokens, "tokenized input");
    Ok(tokens)
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_special(c: char) -> bool {
    is_whitespace(c) || c == '\'' || c == '"'
}

/// True when an odd run of backslashes sits right before `index`.
fn is_escaped(chars: &[char], index: usize) -> bool {
    let backslashes = chars[..index]
        .iter()
        .rev()
        .take_while(|&&c| c == '\\')
        .count();
    backslashes % 2 == 1
}

/// Collapses `\` + (whitespace | quote | backslash) into the escaped character.
/// Any other backslash is kept as is.
fn unescape(raw: &[char]) -> String {
    let mut token = String::with_capacity(raw.len());
    let mut chars = raw.iter().copied().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next) if is_special(next) || next == '\\' => {
                    token.push(next);
                    chars.next();
                }
                _ => token.push('\\'),
            },
            _ => token.push(c),
        }
    }

    token
}
