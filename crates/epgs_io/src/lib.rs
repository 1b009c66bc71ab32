//! epgs_io — canonical JSON, SHA-256 hashing, scenario loading, and R-Block
//! ledger I/O.
//!
//! This crate owns every byte that ever crosses a filesystem boundary or
//! feeds the hash chain. `epgs_core` defines *what* the data means;
//! `epgs_io` defines *how it is read, canonicalized, and written*.
//!
//! Single source of truth per module: no inline duplicates of
//! `canonical_json`/`hasher` logic anywhere else in the workspace.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error type for `epgs_io` (canonicalization, hashing, loading, ledger I/O).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (create_dir_all, rename, fsync, open, read, ...).
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON serialization/deserialization errors.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Scenario failed domain validation (spec §2/§7 input-validation boundary).
    #[error("scenario validation error: {0}")]
    Validation(String),

    /// R-Block immutability violation: target path already exists.
    #[error("ledger immutability violation: {0} already exists")]
    ImmutabilityViolation(String),

    /// No R-Blocks found in a ledger directory during verification.
    #[error("no R-Blocks found in {0}")]
    EmptyLedger(String),

    /// Hash-chain tamper detection: previous_hash field does not match the
    /// accumulator from the prior block.
    #[error("previous_hash mismatch in {0}")]
    PreviousHashMismatch(String),

    /// Hash-chain tamper detection: recomputed hash does not match the
    /// embedded rblock_hash.
    #[error("hash mismatch in {0}")]
    HashMismatch(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

impl From<epgs_core::errors::CoreError> for IoError {
    fn from(e: epgs_core::errors::CoreError) -> Self {
        IoError::Validation(e.to_string())
    }
}

#[cfg(feature = "serde")]
pub mod canonical_json;
#[cfg(feature = "hash")]
pub mod hasher;
#[cfg(all(feature = "serde", feature = "hash"))]
pub mod ledger;
#[cfg(all(feature = "serde", feature = "hash"))]
pub mod loader;

pub mod prelude {
    #[cfg(feature = "serde")]
    pub use crate::canonical_json::{canonical_json_string, to_canonical_bytes, to_canonical_json_bytes};
    #[cfg(feature = "hash")]
    pub use crate::hasher::{chained_hash, sha256_hex};
    #[cfg(all(feature = "serde", feature = "hash"))]
    pub use crate::ledger::{write_rblock, LedgerReader, RBlockRecord};
    #[cfg(all(feature = "serde", feature = "hash"))]
    pub use crate::loader::load_scenario;
    pub use crate::{IoError, IoResult};
}
