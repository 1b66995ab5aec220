//! Capability domains that questions are grouped into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named category of organizational data capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapabilityDomain {
    Governance,
    Architecture,
    Security,
    Quality,
    Analytics,
    Culture,
}

impl CapabilityDomain {
    /// The fixed domain list, in report order.
    pub const ALL: [CapabilityDomain; 6] = [
        CapabilityDomain::Governance,
        CapabilityDomain::Architecture,
        CapabilityDomain::Security,
        CapabilityDomain::Quality,
        CapabilityDomain::Analytics,
        CapabilityDomain::Culture,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CapabilityDomain::Governance => "Governance",
            CapabilityDomain::Architecture => "Architecture",
            CapabilityDomain::Security => "Security",
            CapabilityDomain::Quality => "Quality",
            CapabilityDomain::Analytics => "Analytics",
            CapabilityDomain::Culture => "Culture",
        }
    }
}

impl fmt::Display for CapabilityDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
