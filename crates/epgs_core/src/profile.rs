//! crates/epgs_core/src/profile.rs
//! Frozen numeric thresholds consumed by UBE/Aegixa/NRRP (spec §3, §11 C11).
//! Grounded on the original `epgs.profiles.base.BaseProfile` defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct Profile {
    #[cfg_attr(feature = "serde", serde(default = "Profile::default_max_retries"))]
    pub max_retries: u32,
    #[cfg_attr(feature = "serde", serde(default = "Profile::default_phi_min_safe"))]
    pub phi_min_safe: f64,
    #[cfg_attr(feature = "serde", serde(default = "Profile::default_risk_load_max_safe"))]
    pub risk_load_max_safe: f64,
    #[cfg_attr(feature = "serde", serde(default = "Profile::default_degradation_max_safe"))]
    pub degradation_max_safe: f64,
}

impl Profile {
    const fn default_max_retries() -> u32 { 0 }
    const fn default_phi_min_safe() -> f64 { 0.75 }
    const fn default_risk_load_max_safe() -> f64 { 0.30 }
    const fn default_degradation_max_safe() -> f64 { 0.05 }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            max_retries: Self::default_max_retries(),
            phi_min_safe: Self::default_phi_min_safe(),
            risk_load_max_safe: Self::default_risk_load_max_safe(),
            degradation_max_safe: Self::default_degradation_max_safe(),
        }
    }
}
