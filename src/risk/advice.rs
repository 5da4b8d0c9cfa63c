use super::assessor::RiskLevel;

/// Mitigation strategies derived from the triggered factor list by keyword
/// match. Order follows the factor list; factors without a mapping
/// contribute nothing.
pub fn mitigation_strategies(risk_factors: &[String]) -> Vec<String> {
    let mut strategies = Vec::new();
    for factor in risk_factors {
        let lower = factor.to_lowercase();
        let strategy = if lower.contains("inflation") {
            Some("Implement inflation-linked contracts")
        } else if lower.contains("currency") {
            Some("Use currency hedging strategies")
        } else if lower.contains("geopolitical") {
            Some("Diversify operations across multiple regions")
        } else if lower.contains("political") {
            Some("Establish local partnerships and government relations")
        } else if lower.contains("regulatory") {
            Some("Engage local legal and compliance experts")
        } else if lower.contains("market access") {
            Some("Develop alternative market entry strategies")
        } else {
            None
        };
        if let Some(s) = strategy {
            strategies.push(s.to_string());
        }
    }
    strategies
}

/// Insurance recommendations for the overall risk level.
pub fn insurance_recommendations(level: RiskLevel) -> Vec<String> {
    let recommendations: &[&str] = match level {
        RiskLevel::Low => &["Standard business insurance", "Property insurance"],
        RiskLevel::Medium => &[
            "Political risk insurance",
            "Currency risk insurance",
            "Enhanced liability coverage",
        ],
        RiskLevel::High => &[
            "Comprehensive political risk insurance",
            "War and terrorism coverage",
            "Expropriation insurance",
        ],
        RiskLevel::Critical => &[
            "Full risk coverage",
            "Political risk insurance",
            "Currency insurance",
            "Supply chain insurance",
            "Force majeure coverage",
        ],
    };
    recommendations.iter().map(|s| s.to_string()).collect()
}
