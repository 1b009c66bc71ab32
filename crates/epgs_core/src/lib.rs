//! epgs_core — Scenario/domain types, tagged enums, frozen thresholds.
//!
//! This crate is **I/O-free** and performs no hashing and no file access. It
//! defines the stable vocabulary shared by `epgs_io`, `epgs_engine`,
//! `epgs_pipeline`, `epgs_cli`, and `epgs_api`:
//!
//! - Scenario input types (`Scenario`, `ExecutionRequest`, `TemporalSignal`, `UBEStepVector`)
//! - Subsystem output records (`NeuroPauseOut`, `UBEOut`, `AegixaOut`, `NRRPOut`, `ExecutionSinkOut`)
//! - Tagged enums for every discriminant the pipeline carries
//! - `Profile`: the frozen thresholds from spec §3/§11
//! - The genesis hash constant and hex-digest shape check
//!
//! Serialization derives are gated behind the `serde` feature (on by default).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod enums;
pub mod errors;
pub mod hashes;
pub mod outputs;
pub mod profile;
pub mod rblock;
pub mod scenario;

pub mod prelude {
    pub use crate::enums::{FailureClass, FinalState, Permission, Readiness, SectorLabel, StabilityClass};
    pub use crate::errors::CoreError;
    pub use crate::hashes::{is_hex64, GENESIS_HASH};
    pub use crate::outputs::{AegixaOut, ExecutionSinkOut, NRRPOut, NeuroPauseOut, UBEOut, TAU_MS_REQUIRED};
    pub use crate::profile::Profile;
    pub use crate::rblock::RBlockPayload;
    pub use crate::scenario::{ActionType, ExecutionRequest, Scenario, TemporalSignal, UBEStepVector};
}
