use serde::{Deserialize, Serialize};

/// Investment tier classification. Ordered, non-overlapping thresholds,
/// inclusive on the lower edge of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentTier {
    Tier1,
    Tier2,
    Tier3,
}

impl InvestmentTier {
    pub const TIER_1_THRESHOLD: f64 = 85.0;
    pub const TIER_2_THRESHOLD: f64 = 70.0;
    /// Kept for the ROI bracket and confidence tables; Tier 3 itself is the
    /// residual bucket below `TIER_2_THRESHOLD`.
    pub const TIER_3_THRESHOLD: f64 = 55.0;

    /// Classify a composite score. Deterministic: the classification never
    /// changes without recomputing the score.
    pub fn classify(composite_score: f64) -> Self {
        if composite_score >= Self::TIER_1_THRESHOLD {
            Self::Tier1
        } else if composite_score >= Self::TIER_2_THRESHOLD {
            Self::Tier2
        } else {
            Self::Tier3
        }
    }

    /// Display label used in reports and the external JSON shape.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tier1 => "Tier 1 - Premium Investment",
            Self::Tier2 => "Tier 2 - Strategic Investment",
            Self::Tier3 => "Tier 3 - Emerging Opportunity",
        }
    }

    /// Enum-style name for the `tier_level` JSON field.
    pub fn level_name(self) -> &'static str {
        match self {
            Self::Tier1 => "TIER_1",
            Self::Tier2 => "TIER_2",
            Self::Tier3 => "TIER_3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_exact() {
        assert_eq!(InvestmentTier::classify(85.00), InvestmentTier::Tier1);
        assert_eq!(InvestmentTier::classify(84.99), InvestmentTier::Tier2);
        assert_eq!(InvestmentTier::classify(70.00), InvestmentTier::Tier2);
        assert_eq!(InvestmentTier::classify(69.99), InvestmentTier::Tier3);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(InvestmentTier::classify(100.0), InvestmentTier::Tier1);
        assert_eq!(InvestmentTier::classify(0.0), InvestmentTier::Tier3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(InvestmentTier::Tier1.label(), "Tier 1 - Premium Investment");
        assert_eq!(InvestmentTier::Tier2.level_name(), "TIER_2");
    }
}
