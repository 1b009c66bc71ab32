//! Execution Sink (C8): terminal reducer (spec §4.6).
//!
//! Grounded on `epgs.modules.execution_sink.sink`, with one deliberate
//! deviation recorded in DESIGN.md: `execution_effect_hash` is computed with
//! the workspace's single canonical-JSON + SHA-256 pipeline
//! (`epgs_io::canonical_json` / `epgs_io::hasher`) rather than the Python
//! original's `sha256(str(sorted(dict.items())))` string representation —
//! spec §9's rationale for a single canonicalization rule applies here too.

use epgs_core::enums::{FinalState, Permission};
use epgs_core::outputs::ExecutionSinkOut;
use epgs_io::canonical_json::to_canonical_bytes;
use epgs_io::hasher::sha256_hex;
use serde::Serialize;

/// The intended side effect of a scenario's execution request, carried
/// through only far enough to be hashed (spec §4.6): sector, a symbolic
/// action name, and the execution id.
#[derive(Clone, Debug, Serialize)]
pub struct EffectPayload {
    pub sector_label: epgs_core::enums::SectorLabel,
    pub action_name: String,
    pub execution_id: String,
}

/// Reduce the gate outputs to a final state, reason code, and a
/// content-addressed hash of the intended effect.
pub fn sink(permission: Permission, stop_issued: bool, terminal_stop: bool, effect_payload: &EffectPayload) -> ExecutionSinkOut {
    let execution_effect_hash = effect_hash(effect_payload);

    if terminal_stop {
        return ExecutionSinkOut {
            executed: false,
            final_state: FinalState::Terminated,
            reason_code: "NRRP_TERMINAL_STOP".to_string(),
            execution_effect_hash,
        };
    }

    if stop_issued {
        return ExecutionSinkOut {
            executed: false,
            final_state: FinalState::Stopped,
            reason_code: "AEGIXA_STOP".to_string(),
            execution_effect_hash,
        };
    }

    if matches!(permission, Permission::Allow | Permission::Assist) {
        return ExecutionSinkOut {
            executed: true,
            final_state: FinalState::Executed,
            reason_code: "PERMITTED".to_string(),
            execution_effect_hash,
        };
    }

    ExecutionSinkOut {
        executed: false,
        final_state: FinalState::Blocked,
        reason_code: "BLOCKED".to_string(),
        execution_effect_hash,
    }
}

fn effect_hash(payload: &EffectPayload) -> String {
    let bytes = to_canonical_bytes(payload).expect("EffectPayload always serializes");
    sha256_hex(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use epgs_core::enums::SectorLabel;

    fn payload() -> EffectPayload {
        EffectPayload {
            sector_label: SectorLabel::Energy,
            action_name: "IRREVERSIBLE".to_string(),
            execution_id: "E1".to_string(),
        }
    }

    #[test]
    fn terminal_stop_wins_over_everything() {
        let out = sink(Permission::Allow, true, true, &payload());
        assert_eq!(out.final_state, FinalState::Terminated);
        assert_eq!(out.reason_code, "NRRP_TERMINAL_STOP");
        assert!(!out.executed);
    }

    #[test]
    fn stop_issued_without_terminal_stops() {
        let out = sink(Permission::Allow, true, false, &payload());
        assert_eq!(out.final_state, FinalState::Stopped);
        assert_eq!(out.reason_code, "AEGIXA_STOP");
    }

    #[test]
    fn allow_executes() {
        let out = sink(Permission::Allow, false, false, &payload());
        assert!(out.executed);
        assert_eq!(out.final_state, FinalState::Executed);
        assert_eq!(out.reason_code, "PERMITTED");
    }

    #[test]
    fn assist_executes() {
        let out = sink(Permission::Assist, false, false, &payload());
        assert!(out.executed);
        assert_eq!(out.final_state, FinalState::Executed);
    }

    #[test]
    fn block_without_stop_is_blocked_not_terminated() {
        let out = sink(Permission::Block, false, false, &payload());
        assert!(!out.executed);
        assert_eq!(out.final_state, FinalState::Blocked);
        assert_eq!(out.reason_code, "BLOCKED");
    }

    #[test]
    fn effect_hash_is_deterministic_and_order_stable() {
        let h1 = effect_hash(&payload());
        let h2 = effect_hash(&payload());
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
    }
}
