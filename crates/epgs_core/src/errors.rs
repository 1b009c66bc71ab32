//! crates/epgs_core/src/errors.rs
//! Minimal error set for core-domain validation. I/O-free.

use core::fmt;

/// Errors raised while validating scenario/profile domain invariants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreError {
    EmptyRequests,
    NegativeIndex(&'static str),
    DomainOutOfRange(&'static str),
    InvalidHex,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyRequests => write!(f, "scenario.requests must be non-empty"),
            CoreError::NegativeIndex(field) => write!(f, "{field}: step_index must be >= 0"),
            CoreError::DomainOutOfRange(field) => write!(f, "domain out of range: {field}"),
            CoreError::InvalidHex => write!(f, "invalid hex digest"),
        }
    }
}

impl std::error::Error for CoreError {}
