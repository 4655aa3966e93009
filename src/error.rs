//! Errors raised by the sample operations.

use std::fmt;

use thiserror::Error;

/// Failure of one of the operations in [`crate::sample`].
///
/// Every failure is either a wrong container type or a value that breaks a
/// constraint; the message is meant for the person who supplied the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("{0}")]
    TypeMismatch(String),

    #[error("{0}")]
    ValueConstraint(String),
}

/// Category of a [`SampleError`], for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,
    ValueConstraint,
}

impl SampleError {
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        SampleError::TypeMismatch(message.into())
    }

    pub fn value_constraint(message: impl Into<String>) -> Self {
        SampleError::ValueConstraint(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SampleError::TypeMismatch(_) => ErrorKind::TypeMismatch,
            SampleError::ValueConstraint(_) => ErrorKind::ValueConstraint,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TypeMismatch => write!(f, "type mismatch"),
            ErrorKind::ValueConstraint => write!(f, "value constraint"),
        }
    }
}
