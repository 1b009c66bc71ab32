//! UBE (C5): stability classifier (spec §4.3).
//!
//! Grounded on `epgs.modules.ube.classify`: clamp-and-force-UNSAFE on any
//! domain-invariant violation, else classify SAFE / CAUTION / UNSAFE against
//! the frozen `Profile` thresholds.

use epgs_core::enums::StabilityClass;
use epgs_core::outputs::UBEOut;
use epgs_core::profile::Profile;
use epgs_core::scenario::UBEStepVector;

/// Classify one step vector. `v`'s fields may be out of domain (negative
/// rates, `phi` outside `[0,1]`) — this function never panics on bad input;
/// it clamps and forces UNSAFE per spec §4.3 / §7 (a designed fail-closed
/// path, not an error).
pub fn classify(v: &UBEStepVector, p: &Profile) -> UBEOut {
    let phi_in_range = (0.0..=1.0).contains(&v.phi);
    let rates_in_range = v.degradation_rate >= 0.0 && v.risk_load >= 0.0;

    if !phi_in_range || !rates_in_range {
        return UBEOut {
            phi: v.phi.clamp(0.0, 1.0),
            degradation_rate: v.degradation_rate.max(0.0),
            risk_load: v.risk_load.max(0.0),
            stability_class: StabilityClass::Unsafe,
            invariant_violation: true,
        };
    }

    let stability_class = if v.phi >= p.phi_min_safe
        && v.risk_load <= p.risk_load_max_safe
        && v.degradation_rate <= p.degradation_max_safe
    {
        StabilityClass::Safe
    } else if v.phi >= p.phi_min_safe - 0.10 {
        StabilityClass::Caution
    } else {
        StabilityClass::Unsafe
    };

    UBEOut {
        phi: v.phi,
        degradation_rate: v.degradation_rate,
        risk_load: v.risk_load,
        stability_class,
        invariant_violation: false,
    }
}
