use crate::scoring::ComponentScores;

const WEAK_FLOOR: f64 = 70.0;
const DIGITAL_FLOOR: f64 = 60.0;
const SUSTAINABILITY_FLOOR: f64 = 60.0;
const COST_OPPORTUNITY: f64 = 80.0;

/// Threshold-keyed suggestions for weak (or, for cost efficiency,
/// exceptionally strong) component scores. Order follows component
/// declaration order; an empty list is a valid result.
pub fn generate_recommendations(scores: &ComponentScores) -> Vec<String> {
    let mut recommendations = Vec::new();

    if scores.infrastructure < WEAK_FLOOR {
        recommendations.push("Consider infrastructure development partnerships".to_string());
    }
    if scores.talent < WEAK_FLOOR {
        recommendations.push("Implement talent development programs".to_string());
    }
    if scores.cost_efficiency > COST_OPPORTUNITY {
        recommendations.push("Leverage cost advantages for competitive pricing".to_string());
    }
    if scores.digital_readiness < DIGITAL_FLOOR {
        recommendations.push("Invest in digital infrastructure development".to_string());
    }
    if scores.sustainability < SUSTAINABILITY_FLOOR {
        recommendations.push("Develop sustainability initiatives".to_string());
    }

    recommendations
}
