//! API table model for the rsg command-protocol generator.
//!
//! This crate holds the pure data the emitters consume (types, call entries,
//! the ordered table) plus the parser for the textual `.spec` format.

mod entry;
mod lexer;
mod parser;
mod table;
mod types;

pub use entry::*;
pub use parser::*;
pub use table::*;
pub use types::*;

use thiserror::Error;

/// Spec parsing errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpecError {
    #[error("line {line}: unexpected character '{ch}'")]
    UnexpectedChar { line: usize, ch: char },
    #[error("line {line}: unexpected `{found}`, expected {expected}")]
    UnexpectedToken {
        line: usize,
        found: String,
        expected: &'static str,
    },
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },
    #[error("line {line}: unknown keyword `{keyword}` in `{api}`")]
    UnknownKeyword {
        line: usize,
        api: String,
        keyword: String,
    },
    #[error("line {line}: parameter of `{api}` has no name")]
    MissingParamName { line: usize, api: String },
    #[error("line {line}: return type of `{api}` must not be named")]
    NamedReturn { line: usize, api: String },
    #[error("line {line}: `{api}` is missing its closing brace")]
    UnterminatedBlock { line: usize, api: String },
    #[error("duplicate api `{0}`")]
    DuplicateApi(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;
