//! crates/epgs_core/src/enums.rs
//! Tagged discriminants carried through the pipeline. Per spec §9 Design Notes,
//! these are never represented as bare strings outside the JSON boundary —
//! serde renders them to the wire strings named in spec §3 / §6.

#![allow(clippy::enum_variant_names)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    ($(#[$m:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$m])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(#[cfg_attr(feature = "serde", serde(rename = $wire))] $variant),+
        }

        impl $name {
            /// The exact wire token used in scenario/R-Block JSON.
            pub const fn as_wire(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_wire())
            }
        }
    };
}

wire_enum!(
    /// Scenario domain tag. One of four enumerated sectors.
    SectorLabel {
        Energy => "ENERGY",
        AerospaceDefense => "AEROSPACE_DEFENSE",
        Mobility => "MOBILITY",
        Robotics => "ROBOTICS",
    }
);

wire_enum!(
    /// NeuroPause temporal-readiness verdict.
    Readiness {
        Ready => "READY",
        NotReady => "NOT_READY",
    }
);

wire_enum!(
    /// UBE stability classification.
    StabilityClass {
        Safe => "SAFE",
        Caution => "CAUTION",
        Unsafe => "UNSAFE",
    }
);

wire_enum!(
    /// Aegixa permission verdict.
    Permission {
        Allow => "ALLOW",
        Assist => "ASSIST",
        Block => "BLOCK",
    }
);

wire_enum!(
    /// NRRP failure severity.
    FailureClass {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
);

wire_enum!(
    /// Execution Sink terminal state.
    FinalState {
        Executed => "EXECUTED",
        Blocked => "BLOCKED",
        Stopped => "STOPPED",
        Terminated => "TERMINATED",
    }
);
