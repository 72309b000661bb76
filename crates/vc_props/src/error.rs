//! Errors reported by field access, text parsing and method invocation.

use alloc::string::String;

use thiserror::Error;

/// A field could not be read or assigned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("field `{field}` of `{owner}` is private and was not made accessible")]
    Inaccessible {
        owner: &'static str,
        field: &'static str,
    },
    #[error("field `{field}` of `{owner}` is read-only")]
    ReadOnly {
        owner: &'static str,
        field: &'static str,
    },
    #[error("field `{field}` needs a `{expected}` instance")]
    TargetMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field `{field}` holds `{expected}`, received `{found}`")]
    ValueMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Text could not be converted into a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseFailure {
    #[error("no parser is registered for `{type_path}`")]
    NoParser { type_path: &'static str },
    #[error("`{text}` is not a valid `{type_path}`: {reason}")]
    Malformed {
        type_path: &'static str,
        text: String,
        reason: String,
    },
    #[error("`{name}` is not a variant of `{type_path}`")]
    UnknownVariant { type_path: &'static str, name: String },
}

/// A method could not be called, or reported a failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvokeError {
    #[error("method `{method}` is private and was not made accessible")]
    Inaccessible { method: &'static str },
    #[error("method `{method}` needs a `{expected}` receiver")]
    TargetMismatch {
        method: &'static str,
        expected: &'static str,
    },
    #[error("method `{method}` takes {expected} argument(s), received {found}")]
    ArgumentCount {
        method: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("argument {index} of `{method}` should be `{expected}`, received `{found}`")]
    ArgumentMismatch {
        method: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("method `{method}` failed: {reason}")]
    Failed { method: &'static str, reason: String },
}
