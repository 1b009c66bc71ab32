//! NRRP (C7): retry/terminal decision layer (spec §4.5).
//!
//! Grounded on `epgs.modules.nrrp.decide`'s decision table, restated over
//! the tagged `Permission` enum instead of a bare string. Fail-closed: a
//! mid-execution STOP always wins and is always HIGH-severity terminal,
//! regardless of the pre-execution permission.

use epgs_core::enums::{FailureClass, Permission};
use epgs_core::outputs::NRRPOut;
use epgs_core::profile::Profile;

/// Decide retry vs terminal stop. `retries_attempted` is always `0` for a
/// single simulated run (spec §4.5), but is threaded as a parameter so a
/// future multi-attempt driver needs no signature change.
pub fn decide(pre_permission: Permission, stop_issued: bool, retries_attempted: u32, profile: &Profile) -> NRRPOut {
    if stop_issued {
        return NRRPOut {
            retries_attempted,
            retry_allowed: false,
            terminal_stop: true,
            failure_class: FailureClass::High,
        };
    }

    if pre_permission == Permission::Block {
        if retries_attempted < profile.max_retries {
            return NRRPOut {
                retries_attempted,
                retry_allowed: true,
                terminal_stop: false,
                failure_class: FailureClass::Medium,
            };
        }
        return NRRPOut {
            retries_attempted,
            retry_allowed: false,
            terminal_stop: true,
            failure_class: FailureClass::High,
        };
    }

    NRRPOut {
        retries_attempted,
        retry_allowed: false,
        terminal_stop: false,
        failure_class: FailureClass::Low,
    }
}
