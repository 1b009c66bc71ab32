//! NeuroPause (C4): temporal-readiness classifier (spec §4.2).
//!
//! Grounded on `epgs.modules.neuropause.evaluate_temporal`: accumulate
//! `stable_ms` across the ordered temporal signals, resetting the
//! accumulator on every jittered step, and declare readiness the instant the
//! cumulative unjittered stability crosses `TAU_MS_REQUIRED`.

use epgs_core::outputs::{NeuroPauseOut, TAU_MS_REQUIRED};
use epgs_core::scenario::TemporalSignal;
use epgs_core::enums::Readiness;

/// Evaluate temporal readiness over `temporal`, which MUST already be sorted
/// ascending by `step_index` (see [`epgs_core::scenario::Scenario::temporal_sorted`]).
pub fn evaluate_temporal(temporal: &[TemporalSignal]) -> NeuroPauseOut {
    let mut observed: u64 = 0;
    let mut resets: u32 = 0;

    for t in temporal {
        if t.jitter {
            resets += 1;
            observed = 0;
        }
        observed += t.stable_ms;
        if observed >= TAU_MS_REQUIRED {
            return NeuroPauseOut {
                readiness: Readiness::Ready,
                tau_ms_required: TAU_MS_REQUIRED,
                tau_ms_observed: observed,
                resets,
            };
        }
    }

    NeuroPauseOut {
        readiness: Readiness::NotReady,
        tau_ms_required: TAU_MS_REQUIRED,
        tau_ms_observed: observed,
        resets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(step_index: u32, stable_ms: u64, jitter: bool) -> TemporalSignal {
        TemporalSignal { step_index, stable_ms, jitter }
    }

    #[test]
    fn ready_once_cumulative_stability_crosses_tau() {
        let out = evaluate_temporal(&[signal(0, 200, false), signal(1, 200, false)]);
        assert_eq!(out.readiness, Readiness::Ready);
        assert_eq!(out.tau_ms_observed, 400);
        assert_eq!(out.resets, 0);
    }

    #[test]
    fn jitter_resets_the_accumulator() {
        let out = evaluate_temporal(&[signal(0, 300, false), signal(1, 50, true), signal(2, 100, false)]);
        // After the jittered step, accumulation restarts: 0 + 50 = 50 (itself
        // counted post-reset), then +100 = 150 — never crosses TAU.
        assert_eq!(out.readiness, Readiness::NotReady);
        assert_eq!(out.resets, 1);
    }

    #[test]
    fn not_ready_when_never_crossing_tau() {
        let out = evaluate_temporal(&[signal(0, 100, false)]);
        assert_eq!(out.readiness, Readiness::NotReady);
        assert_eq!(out.tau_ms_observed, 100);
    }

    #[test]
    fn empty_temporal_is_not_ready_with_zero_observed() {
        let out = evaluate_temporal(&[]);
        assert_eq!(out.readiness, Readiness::NotReady);
        assert_eq!(out.tau_ms_observed, 0);
        assert_eq!(out.resets, 0);
    }
}
