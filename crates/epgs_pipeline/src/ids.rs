//! crates/epgs_pipeline/src/ids.rs
//! Deterministic identifier derivation (spec §4.8 step 2, §9 Design Notes).
//!
//! `run_id` and `rblock_id` are version-5 UUIDs (name-based, SHA-1) derived
//! from a fixed namespace and a scenario-id-derived name string. No
//! version-4 (random) UUID may ever enter a hashed field — this module is
//! the only place the workspace constructs a `Uuid`, specifically to keep
//! that guarantee auditable in one place.

use uuid::Uuid;

/// Fixed namespace UUID from spec §6/§9. Never change this constant — doing
/// so would silently break every previously-produced R-Block's identifiers.
const NAMESPACE: Uuid = Uuid::from_bytes([
    0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78,
]);

/// `uuid5(NAMESPACE, "{scenario_id}::run")`.
pub fn run_id(scenario_id: &str) -> String {
    derive(scenario_id, "run")
}

/// `uuid5(NAMESPACE, "{scenario_id}::rblock")`.
pub fn rblock_id(scenario_id: &str) -> String {
    derive(scenario_id, "rblock")
}

fn derive(scenario_id: &str, suffix: &str) -> String {
    let name = format!("{scenario_id}::{suffix}");
    Uuid::new_v5(&NAMESPACE, name.as_bytes()).to_string()
}
