use serde::{Deserialize, Serialize};

use super::advice::{insurance_recommendations, mitigation_strategies};
use crate::metrics::RegionalMetrics;

/// Overall risk severity. The derived `Ord` gives Low < Medium < High <
/// Critical, which the assessor reduces over with `max`: the overall level
/// is the worst triggered check, never the most recently evaluated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
            Self::Critical => "Critical Risk",
        }
    }
}

/// Risk assessment for a region: the triggered factors in check order, the
/// max-severity overall level, and the derived advice lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: String,
    pub risk_factors: Vec<String>,
    pub mitigation_strategies: Vec<String>,
    pub insurance_recommendations: Vec<String>,
}

/// The fixed, ordered set of threshold checks. Each declares its own
/// severity contribution.
const CHECKS: [(&str, RiskLevel, fn(&RegionalMetrics) -> bool); 6] = [
    ("High inflation rate", RiskLevel::Medium, |r| r.inflation_rate > 0.08),
    ("Currency volatility", RiskLevel::High, |r| r.currency_stability < 0.5),
    ("Political instability", RiskLevel::High, |r| r.political_stability < 0.6),
    ("Geopolitical risk exposure", RiskLevel::Critical, |r| r.geopolitical_risk > 0.6),
    ("Regulatory complexity", RiskLevel::Medium, |r| r.regulatory_ease < 0.4),
    ("Limited market access", RiskLevel::Medium, |r| r.market_access < 0.5),
];

/// Factor list reported when nothing triggers.
const NO_RISK_SENTINEL: &str = "Minimal risk factors identified";

/// Evaluate all threshold checks against a region's metrics.
pub fn assess_risk(region: &RegionalMetrics) -> RiskAssessment {
    let mut factors = Vec::new();
    let mut level = RiskLevel::Low;

    for (factor, severity, triggered) in CHECKS {
        if triggered(region) {
            factors.push(factor.to_string());
            level = level.max(severity);
        }
    }

    if factors.is_empty() {
        factors.push(NO_RISK_SENTINEL.to_string());
    }

    RiskAssessment {
        risk_level: level.label().to_string(),
        mitigation_strategies: mitigation_strategies(&factors),
        insurance_recommendations: insurance_recommendations(level),
        risk_factors: factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::RegionInput;

    fn nominal_region() -> RegionalMetrics {
        RegionInput::default().normalize(&mut Vec::new())
    }

    #[test]
    fn test_nominal_region_is_low_risk() {
        let assessment = assess_risk(&nominal_region());
        assert_eq!(assessment.risk_level, "Low Risk");
        assert_eq!(assessment.risk_factors, vec![NO_RISK_SENTINEL.to_string()]);
        assert!(assessment.mitigation_strategies.is_empty());
        assert!(!assessment.insurance_recommendations.is_empty());
    }

    #[test]
    fn test_geopolitical_risk_is_critical() {
        let mut region = nominal_region();
        region.geopolitical_risk = 0.9;
        let assessment = assess_risk(&region);
        assert_eq!(assessment.risk_level, "Critical Risk");
        assert!(assessment
            .risk_factors
            .iter()
            .any(|f| f.contains("Geopolitical")));
    }

    #[test]
    fn test_overall_level_is_max_not_last() {
        // Currency (High) triggers before regulatory (Medium); evaluation
        // order must not let the later Medium check win.
        let mut region = nominal_region();
        region.currency_stability = 0.3;
        region.regulatory_ease = 0.2;
        let assessment = assess_risk(&region);
        assert_eq!(assessment.risk_level, "High Risk");
        assert_eq!(
            assessment.risk_factors,
            vec!["Currency volatility".to_string(), "Regulatory complexity".to_string()]
        );
    }

    #[test]
    fn test_factor_order_follows_check_order() {
        let mut region = nominal_region();
        region.inflation_rate = 0.12;
        region.political_stability = 0.4;
        region.market_access = 0.3;
        let assessment = assess_risk(&region);
        assert_eq!(
            assessment.risk_factors,
            vec![
                "High inflation rate".to_string(),
                "Political instability".to_string(),
                "Limited market access".to_string(),
            ]
        );
        assert_eq!(assessment.risk_level, "High Risk");
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert_eq!(RiskLevel::High.max(RiskLevel::Medium), RiskLevel::High);
    }

    #[test]
    fn test_threshold_edges_do_not_trigger() {
        let mut region = nominal_region();
        region.inflation_rate = 0.08;
        region.currency_stability = 0.5;
        region.political_stability = 0.6;
        region.geopolitical_risk = 0.6;
        region.regulatory_ease = 0.4;
        region.market_access = 0.5;
        let assessment = assess_risk(&region);
        assert_eq!(assessment.risk_level, "Low Risk");
    }
}
