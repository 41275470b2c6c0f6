//! Split a single line into shell-style arguments.
//!
//! Words are separated by whitespace. Single or double quotes group words
//! together, and a backslash escapes a quote (or another backslash) inside a
//! quoted section. Nothing is expanded: no variables, no globs.

mod error;
mod tokenizer;

pub use error::TokenizeError;
pub use tokenizer::tokenize;
