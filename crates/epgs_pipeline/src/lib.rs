//! epgs_pipeline — orchestration, deterministic identifiers, the chain
//! verifier, and the determinism-proof driver (spec components C9/C10/C12).
//!
//! This crate is the seam between the pure classifiers in `epgs_engine`,
//! the byte-level I/O in `epgs_io`, and the thin adapters (`epgs_cli`,
//! `epgs_api`) that only ever call into `run_scenario` / `verify_chain` /
//! `prove_all`.

#![forbid(unsafe_code)]

pub mod determinism;
pub mod errors;
pub mod ids;
pub mod orchestrator;
pub mod verifier;

pub mod prelude {
    pub use crate::determinism::{prove_all, prove_scenario, ScenarioProof};
    pub use crate::errors::PipelineError;
    pub use crate::orchestrator::{run_loaded_scenario, run_scenario, RunResult};
    pub use crate::verifier::{verify_chain, VerifyOutcome};
}
