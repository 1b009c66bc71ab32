//! epgs_engine — the five pure classifier stages of the EPGS pipeline
//! (spec §4.2–§4.6): NeuroPause, UBE, Aegixa, NRRP, Execution Sink.
//!
//! Every function here is a total, side-effect-free mapping from values to
//! values: no file I/O, no hashing beyond the one hash the Execution Sink
//! needs (delegated to `epgs_io::hasher`), no wall-clock or RNG sources.
//! `epgs_pipeline` sequences these stages; this crate only classifies.

#![forbid(unsafe_code)]

pub mod aegixa;
pub mod execution_sink;
pub mod neuropause;
pub mod nrrp;
pub mod ube;

pub mod prelude {
    pub use crate::aegixa::{mid_execution_monitor, precheck};
    pub use crate::execution_sink::{sink, EffectPayload};
    pub use crate::neuropause::evaluate_temporal;
    pub use crate::nrrp::decide;
    pub use crate::ube::classify;
}
