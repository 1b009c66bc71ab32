//! crates/epgs_pipeline/src/errors.rs
//! Orchestrator-level error type. Wraps the lower crates' errors; verifier
//! failures are NOT represented here (spec §7: they are structural,
//! returned as a `VerifyOutcome` value, never raised).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Io(#[from] epgs_io::IoError),

    #[error(transparent)]
    Core(#[from] epgs_core::errors::CoreError),
}
