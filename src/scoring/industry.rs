use serde::{Deserialize, Serialize};

/// Industry focus of the investing organization.
///
/// A closed enumeration: unknown industry strings parse to `Other`, which
/// carries no multipliers, so an unrecognized industry never adjusts a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Manufacturing,
    Technology,
    Logistics,
    Finance,
    Healthcare,
    Energy,
    Retail,
    RealEstate,
    Other,
}

impl Industry {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "manufacturing" => Self::Manufacturing,
            "tech" | "technology" => Self::Technology,
            "logistics" => Self::Logistics,
            "finance" => Self::Finance,
            "healthcare" => Self::Healthcare,
            "energy" => Self::Energy,
            "retail" => Self::Retail,
            "real_estate" | "real estate" => Self::RealEstate,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manufacturing => "Manufacturing",
            Self::Technology => "Technology",
            Self::Logistics => "Logistics & Distribution",
            Self::Finance => "Financial Services",
            Self::Healthcare => "Healthcare",
            Self::Energy => "Energy & Resources",
            Self::Retail => "Retail & E-commerce",
            Self::RealEstate => "Real Estate & Construction",
            Self::Other => "General",
        }
    }

    /// Multiplier applied to a named component score before clamping.
    /// Pairs not listed here are 1.0 (no adjustment).
    pub fn multiplier(self, component: &str) -> f64 {
        match (self, component) {
            (Self::Technology, "talent") => 1.3,
            (Self::Technology, "digital_readiness") => 1.4,
            (Self::Technology, "innovation") => 1.5,
            (Self::Technology, "cost_efficiency") => 0.9,

            (Self::Manufacturing, "infrastructure") => 1.2,
            (Self::Manufacturing, "supply_chain") => 1.3,
            (Self::Manufacturing, "cost_efficiency") => 1.1,
            (Self::Manufacturing, "talent") => 0.9,

            (Self::Logistics, "infrastructure") => 1.4,
            (Self::Logistics, "market_access") => 1.3,
            (Self::Logistics, "supply_chain") => 1.2,
            (Self::Logistics, "cost_efficiency") => 1.1,

            (Self::Finance, "regulatory") => 1.3,
            (Self::Finance, "political_stability") => 1.2,
            (Self::Finance, "talent") => 1.1,
            (Self::Finance, "market_access") => 1.1,

            _ => 1.0,
        }
    }
}
