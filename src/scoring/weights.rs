use super::components::ComponentScores;

/// Fixed component weights. The table must sum to 1.0; `test_weights_sum_to_one`
/// and the debug assertion in `aggregate` both guard the invariant.
const WEIGHTS: [(&str, f64); 12] = [
    ("infrastructure", 0.12),
    ("talent", 0.10),
    ("cost_efficiency", 0.15),
    ("market_access", 0.12),
    ("regulatory", 0.08),
    ("political_stability", 0.07),
    ("growth_potential", 0.10),
    ("risk_factors", 0.08),
    ("digital_readiness", 0.06),
    ("sustainability", 0.05),
    ("innovation", 0.04),
    ("supply_chain", 0.03),
];

/// Weight for a named component. Unknown names weigh 0 (they cannot
/// contribute to the composite).
pub fn component_weight(name: &str) -> f64 {
    WEIGHTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, w)| *w)
        .unwrap_or(0.0)
}

/// Weighted composite of the 12 component scores, rounded to 2 decimals.
pub fn aggregate(scores: &ComponentScores) -> f64 {
    debug_assert!((WEIGHTS.iter().map(|(_, w)| w).sum::<f64>() - 1.0).abs() < 1e-6);

    let composite: f64 = scores
        .entries()
        .iter()
        .map(|(name, score)| score * component_weight(name))
        .sum();
    (composite * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_scores(v: f64) -> ComponentScores {
        ComponentScores {
            infrastructure: v,
            talent: v,
            cost_efficiency: v,
            market_access: v,
            regulatory: v,
            political_stability: v,
            growth_potential: v,
            risk_factors: v,
            digital_readiness: v,
            sustainability: v,
            innovation: v,
            supply_chain: v,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-6, "weights sum to {}", sum);
    }

    #[test]
    fn test_every_component_is_weighted() {
        for name in super::super::components::COMPONENT_NAMES {
            assert!(component_weight(name) > 0.0, "{} has no weight", name);
        }
    }

    #[test]
    fn test_unknown_component_weighs_zero() {
        assert_eq!(component_weight("astrology"), 0.0);
    }

    #[test]
    fn test_uniform_scores_aggregate_to_same_value() {
        assert_eq!(aggregate(&uniform_scores(100.0)), 100.0);
        assert_eq!(aggregate(&uniform_scores(0.0)), 0.0);
        assert_eq!(aggregate(&uniform_scores(73.0)), 73.0);
    }

    #[test]
    fn test_aggregate_rounds_to_two_decimals() {
        let mut scores = uniform_scores(70.0);
        scores.infrastructure = 70.137;
        let composite = aggregate(&scores);
        assert_eq!(composite, (composite * 100.0).round() / 100.0);
    }

    #[test]
    fn test_higher_component_never_lowers_composite() {
        let base = uniform_scores(50.0);
        let mut boosted = uniform_scores(50.0);
        boosted.market_access = 90.0;
        assert!(aggregate(&boosted) > aggregate(&base));
    }
}
