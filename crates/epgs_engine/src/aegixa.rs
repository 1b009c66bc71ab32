//! Aegixa (C6): permission gate (spec §4.4).
//!
//! Grounded on `epgs.modules.aegixa.precheck` / `mid_execution_monitor`.
//! Two entry points, both pure: `precheck` decides the pre-execution
//! permission from NeuroPause + the first-step UBE classification;
//! `mid_execution_monitor` is re-run per step and only ever returns a STOP.

use epgs_core::enums::{Readiness, StabilityClass};
use epgs_core::outputs::{AegixaOut, NeuroPauseOut, UBEOut};

/// Pre-execution gate. Fail-closed: anything short of NeuroPause READY and
/// UBE SAFE/CAUTION blocks before execution is ever attempted.
pub fn precheck(np: &NeuroPauseOut, ube: &UBEOut) -> AegixaOut {
    if np.readiness != Readiness::Ready {
        return AegixaOut::block("NP_NOT_READY");
    }
    if ube.stability_class == StabilityClass::Unsafe || ube.invariant_violation {
        return AegixaOut::block("UBE_UNSAFE");
    }
    if ube.stability_class == StabilityClass::Caution {
        return AegixaOut::assist();
    }
    AegixaOut::allow()
}

/// Per-step monitor during execution. Returns `Some(stop)` the instant a
/// step's UBE classification is UNSAFE or invariant-violating; `None`
/// otherwise. The orchestrator stops iterating at the first `Some`.
pub fn mid_execution_monitor(step_index: u32, ube: &UBEOut) -> Option<AegixaOut> {
    if ube.stability_class == StabilityClass::Unsafe || ube.invariant_violation {
        Some(AegixaOut::mid_exec_stop(step_index))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epgs_core::enums::Permission;
    use epgs_core::outputs::TAU_MS_REQUIRED;

    fn ready() -> NeuroPauseOut {
        NeuroPauseOut {
            readiness: Readiness::Ready,
            tau_ms_required: TAU_MS_REQUIRED,
            tau_ms_observed: TAU_MS_REQUIRED,
            resets: 0,
        }
    }

    fn ube(stability_class: StabilityClass, invariant_violation: bool) -> UBEOut {
        UBEOut { phi: 0.8, degradation_rate: 0.0, risk_load: 0.0, stability_class, invariant_violation }
    }

    #[test]
    fn not_ready_blocks_regardless_of_ube() {
        let np = NeuroPauseOut { readiness: Readiness::NotReady, ..ready() };
        let out = precheck(&np, &ube(StabilityClass::Safe, false));
        assert_eq!(out.permission, Permission::Block);
        assert_eq!(out.stop_reason_code.as_deref(), Some("NP_NOT_READY"));
        assert!(!out.stop_issued);
    }

    #[test]
    fn unsafe_ube_blocks() {
        let out = precheck(&ready(), &ube(StabilityClass::Unsafe, false));
        assert_eq!(out.permission, Permission::Block);
        assert_eq!(out.stop_reason_code.as_deref(), Some("UBE_UNSAFE"));
    }

    #[test]
    fn invariant_violation_blocks_even_if_tagged_safe() {
        let out = precheck(&ready(), &ube(StabilityClass::Safe, true));
        assert_eq!(out.permission, Permission::Block);
    }

    #[test]
    fn caution_assists() {
        let out = precheck(&ready(), &ube(StabilityClass::Caution, false));
        assert_eq!(out.permission, Permission::Assist);
        assert!(!out.stop_issued);
    }

    #[test]
    fn safe_allows() {
        let out = precheck(&ready(), &ube(StabilityClass::Safe, false));
        assert_eq!(out.permission, Permission::Allow);
    }

    #[test]
    fn monitor_stops_on_unsafe_step() {
        let stop = mid_execution_monitor(3, &ube(StabilityClass::Unsafe, false)).unwrap();
        assert!(stop.stop_issued);
        assert_eq!(stop.stop_step_index, Some(3));
        assert_eq!(stop.stop_reason_code.as_deref(), Some("MID_EXEC_UNSAFE"));
    }

    #[test]
    fn monitor_is_silent_on_safe_step() {
        assert!(mid_execution_monitor(0, &ube(StabilityClass::Safe, false)).is_none());
        assert!(mid_execution_monitor(0, &ube(StabilityClass::Caution, false)).is_none());
    }
}
