//! crates/epgs_core/src/outputs.rs
//! Immutable subsystem output records (spec §3). Each stage of the pipeline
//! consumes values and produces a new one; nothing here is mutated in place.
//!
//! Optional fields are never omitted from the wire shape (no
//! `skip_serializing_if`): the R-Block's key set must stay stable across
//! every run so hashing never depends on which branch of the pipeline fired.

use crate::enums::{FailureClass, Permission, Readiness, StabilityClass};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// TAU_MS: required cumulative unjittered stability window (spec §4.2).
pub const TAU_MS_REQUIRED: u64 = 330;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct NeuroPauseOut {
    pub readiness: Readiness,
    pub tau_ms_required: u64,
    pub tau_ms_observed: u64,
    pub resets: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct UBEOut {
    pub phi: f64,
    pub degradation_rate: f64,
    pub risk_load: f64,
    pub stability_class: StabilityClass,
    pub invariant_violation: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct AegixaOut {
    pub permission: Permission,
    pub stop_issued: bool,
    pub stop_reason_code: Option<String>,
    pub stop_step_index: Option<u32>,
}

impl AegixaOut {
    pub fn allow() -> Self {
        Self { permission: Permission::Allow, stop_issued: false, stop_reason_code: None, stop_step_index: None }
    }
    pub fn assist() -> Self {
        Self { permission: Permission::Assist, stop_issued: false, stop_reason_code: None, stop_step_index: None }
    }
    pub fn block(reason: &str) -> Self {
        Self {
            permission: Permission::Block,
            stop_issued: false,
            stop_reason_code: Some(reason.to_string()),
            stop_step_index: None,
        }
    }
    pub fn mid_exec_stop(step_index: u32) -> Self {
        Self {
            permission: Permission::Block,
            stop_issued: true,
            stop_reason_code: Some("MID_EXEC_UNSAFE".to_string()),
            stop_step_index: Some(step_index),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct NRRPOut {
    pub retries_attempted: u32,
    pub retry_allowed: bool,
    pub terminal_stop: bool,
    pub failure_class: FailureClass,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct ExecutionSinkOut {
    pub executed: bool,
    pub final_state: crate::enums::FinalState,
    pub reason_code: String,
    pub execution_effect_hash: String,
}
