//! crates/epgs_core/src/rblock.rs
//! The R-Block payload (spec §3 "RBlock", §4.8 step 4): the fixed key set
//! that gets hash-chained into a ledger entry. This type carries every
//! subsystem output *except* the hash-chain envelope fields
//! (`previous_hash`, `rblock_hash`) — those are appended by
//! `epgs_io::ledger::write_rblock`, never by this crate, so the payload a
//! caller builds is exactly the bytes that get hashed.

use crate::outputs::{AegixaOut, ExecutionSinkOut, NRRPOut, NeuroPauseOut, UBEOut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct RBlockPayload {
    pub rblock_id: String,
    pub run_id: String,
    pub scenario_id: String,
    pub step_count: u32,
    pub neuropause: NeuroPauseOut,
    pub ube_initial: UBEOut,
    pub aegixa: AegixaOut,
    pub nrrp: NRRPOut,
    pub execution: ExecutionSinkOut,
}
