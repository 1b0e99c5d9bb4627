//! Error types for numeric parsing and format-spec handling.
//!
//! Two failure families exist, each handled once, deliberately:
//!
//! - **Numeric parse failures** (no digits, overflow, out of range) are
//!   recoverable. The prefix parsers signal them through the
//!   consumed-length sentinel (`Option`); the `*_from_str` conveniences
//!   lift them into [`Error::InvalidNumber`] /
//!   [`Error::TrailingCharacters`].
//! - **Format-spec failures** (out-of-order directive, unknown token,
//!   missing alignment companion) are also recoverable here:
//!   [`Error::Spec`] carries the offending position instead of halting,
//!   since a `Result` composes better than an assertion even for
//!   call-site literals.

use thiserror::Error;

/// All errors the crate surface can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is not a valid number (no digits, magnitude overflow,
    /// or out of range for the target type).
    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },

    /// A valid number was parsed, but input remained after it.
    #[error("trailing characters after {consumed} parsed character(s) in {input:?}")]
    TrailingCharacters { consumed: usize, input: String },

    /// A format-spec string is malformed.
    #[error("bad format spec at byte {pos}: {msg}")]
    Spec { pos: usize, msg: String },
}

impl Error {
    pub fn invalid_number(input: &str) -> Self {
        Error::InvalidNumber {
            input: input.to_string(),
        }
    }

    pub fn trailing(consumed: usize, input: &str) -> Self {
        Error::TrailingCharacters {
            consumed,
            input: input.to_string(),
        }
    }

    pub fn spec(pos: usize, msg: &str) -> Self {
        Error::Spec {
            pos,
            msg: msg.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
