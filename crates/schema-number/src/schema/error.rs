//! Errors raised while building or loading a numeric schema.

use serde_json::Number;
use thiserror::Error;

use super::loader::Draft;

/// A numeric schema could not be constructed.
///
/// These are problems with the *schema*, never with a candidate value;
/// candidate failures are reported through a
/// [`FailureReporter`](crate::foundation::FailureReporter).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// The schema node is not a JSON object.
    #[error("schema must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The `type` keyword names something other than `number`/`integer`.
    #[error("type {found:?} does not describe a number")]
    NotNumeric { found: String },

    /// A keyword holds a JSON value of the wrong type.
    #[error("{keyword}: expected {expected}, found {found}")]
    InvalidKeywordType {
        keyword: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// An exclusivity keyword uses the encoding of another draft.
    #[error("{keyword} as a {found} is not allowed in {draft}")]
    ExclusivityEncoding {
        keyword: &'static str,
        found: &'static str,
        draft: Draft,
    },

    /// A bound or divisor was NaN or infinite.
    #[error("{keyword} must be a finite number")]
    NonFinite { keyword: &'static str },

    /// `multipleOf` was zero or negative.
    #[error("multipleOf must be strictly greater than 0, found {value}")]
    NonPositiveMultipleOf { value: Number },
}

/// Result alias for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;
