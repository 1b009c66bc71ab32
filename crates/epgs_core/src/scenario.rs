//! crates/epgs_core/src/scenario.rs
//! Validated, immutable scenario record (spec §3). I/O-free: parsing and
//! schema-shaped validation happen in `epgs_io::loader`; this module only
//! owns the type and the domain invariants a loader must enforce.

use crate::enums::SectorLabel;
use crate::errors::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct ExecutionRequest {
    pub execution_id: String,
    #[cfg_attr(feature = "serde", serde(rename = "action_type"))]
    pub action_type: ActionType,
    pub sector_label: SectorLabel,
    pub requested_at_ms: u64,
}

/// Single fixed value per spec §3; modeled as a unit enum so the wire shape
/// stays a tagged constant rather than a free-form string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionType {
    #[cfg_attr(feature = "serde", serde(rename = "IRREVERSIBLE"))]
    Irreversible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct TemporalSignal {
    pub step_index: u32,
    pub stable_ms: u64,
    pub jitter: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct UBEStepVector {
    pub step_index: u32,
    pub phi: f64,
    pub degradation_rate: f64,
    pub risk_load: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct Scenario {
    pub scenario_id: String,
    pub sector_label: SectorLabel,
    pub requests: Vec<ExecutionRequest>,
    pub temporal: Vec<TemporalSignal>,
    pub ube_vectors: Vec<UBEStepVector>,
}

impl Scenario {
    /// Domain invariants from spec §3: `requests` non-empty and every
    /// request's sector matches the scenario's. `step_index >= 0` is
    /// enforced structurally by the unsigned field type.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.requests.is_empty() {
            return Err(CoreError::EmptyRequests);
        }
        for req in &self.requests {
            if req.sector_label != self.sector_label {
                return Err(CoreError::DomainOutOfRange("requests[].sector_label"));
            }
        }
        Ok(())
    }

    /// The scenario's temporal signals, sorted by `step_index` ascending
    /// (stable), as NeuroPause (spec §4.2 step 1) requires.
    pub fn temporal_sorted(&self) -> Vec<TemporalSignal> {
        let mut v = self.temporal.clone();
        v.sort_by_key(|t| t.step_index);
        v
    }

    /// `ube_vectors` sorted by `step_index` ascending (stable), as the
    /// orchestrator (spec §4.8 step 3) and mid-execution monitor require.
    pub fn ube_vectors_sorted(&self) -> Vec<UBEStepVector> {
        let mut v = self.ube_vectors.clone();
        v.sort_by_key(|u| u.step_index);
        v
    }
}
