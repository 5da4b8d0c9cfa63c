use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::components::{compute_component_scores, ComponentScores};
use super::tier::InvestmentTier;
use super::weights::aggregate;
use crate::metrics::{CompanyProfile, RegionalMetrics};
use crate::projection::{project_cost_savings, project_roi, CostSavings, RoiProjection};
use crate::recommend::generate_recommendations;
use crate::risk::{assess_risk, RiskAssessment};

/// Complete analysis for one (region, company) pair.
///
/// Immutable value object; the field names are the external JSON contract
/// the surrounding web layer serializes verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub composite_score: f64,
    pub investment_tier: String,
    pub tier_level: String,
    pub component_scores: ComponentScores,
    pub roi_projection: RoiProjection,
    pub cost_savings: CostSavings,
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<String>,
    pub confidence_level: String,
    pub analysis_timestamp: String,
}

impl AlgorithmResult {
    pub fn tier(&self) -> InvestmentTier {
        InvestmentTier::classify(self.composite_score)
    }
}

/// Score an investment opportunity.
///
/// Pure function of the two input records (plus the wall clock for the
/// timestamp): computes the 12 component scores, aggregates them into the
/// composite, classifies the tier, and derives projections, risk assessment,
/// and recommendations. Never fails; degenerate inputs degrade to defaults
/// or sentinels upstream.
pub fn score_investment(region: &RegionalMetrics, company: &CompanyProfile) -> AlgorithmResult {
    let component_scores = compute_component_scores(region, company);
    let composite_score = aggregate(&component_scores);
    let tier = InvestmentTier::classify(composite_score);

    AlgorithmResult {
        composite_score,
        investment_tier: tier.label().to_string(),
        tier_level: tier.level_name().to_string(),
        roi_projection: project_roi(composite_score, region, company),
        cost_savings: project_cost_savings(region, company),
        risk_assessment: assess_risk(region),
        recommendations: generate_recommendations(&component_scores),
        confidence_level: confidence_level(composite_score).to_string(),
        component_scores: component_scores.rounded(),
        analysis_timestamp: Utc::now().to_rfc3339(),
    }
}

/// Confidence bucket for the analysis, keyed off the composite score.
fn confidence_level(composite_score: f64) -> &'static str {
    if composite_score > 85.0 {
        "Very High (95%)"
    } else if composite_score > 70.0 {
        "High (85%)"
    } else if composite_score > 55.0 {
        "Medium (75%)"
    } else {
        "Low (65%)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{AnalysisRequest, CompanyInput, RegionInput};

    fn scenario_region() -> RegionInput {
        RegionInput {
            infrastructure_score: Some(0.85),
            talent_availability: Some(0.80),
            cost_of_living: Some(0.65),
            market_access: Some(0.80),
            political_stability: Some(0.85),
            growth_rate: Some(0.08),
            regulatory_ease: Some(0.75),
            digital_infrastructure: Some(0.90),
            tax_rate: Some(0.25),
            inflation_rate: Some(0.03),
            currency_stability: Some(0.95),
            ..Default::default()
        }
    }

    fn tech_large_company() -> CompanyInput {
        CompanyInput {
            industry_focus: Some("technology".to_string()),
            investment_size: Some("large".to_string()),
            risk_tolerance: Some("medium".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_strong_tech_region_scores_high() {
        let region = scenario_region().normalize(&mut Vec::new());
        let company = tech_large_company().normalize();
        let result = score_investment(&region, &company);

        assert!(result.composite_score >= 80.0, "got {}", result.composite_score);
        assert!(matches!(
            result.tier(),
            InvestmentTier::Tier1 | InvestmentTier::Tier2
        ));
    }

    #[test]
    fn test_scores_and_composite_in_range() {
        let region = scenario_region().normalize(&mut Vec::new());
        let company = tech_large_company().normalize();
        let result = score_investment(&region, &company);

        assert!((0.0..=100.0).contains(&result.composite_score));
        for (name, score) in result.component_scores.entries() {
            assert!((0.0..=100.0).contains(&score), "{} = {}", name, score);
        }
    }

    #[test]
    fn test_omitted_fields_match_explicit_defaults() {
        use crate::metrics::MetricDefaults;

        let implicit = RegionInput::default().normalize(&mut Vec::new());
        let explicit = RegionInput {
            city: Some(MetricDefaults::CITY.to_string()),
            country: Some(MetricDefaults::COUNTRY.to_string()),
            region: Some(MetricDefaults::REGION.to_string()),
            population: Some(MetricDefaults::POPULATION),
            gdp_per_capita: Some(MetricDefaults::GDP_PER_CAPITA),
            infrastructure_score: Some(MetricDefaults::INFRASTRUCTURE_SCORE),
            talent_availability: Some(MetricDefaults::TALENT_AVAILABILITY),
            cost_of_living: Some(MetricDefaults::COST_OF_LIVING),
            tax_rate: Some(MetricDefaults::TAX_RATE),
            regulatory_ease: Some(MetricDefaults::REGULATORY_EASE),
            market_access: Some(MetricDefaults::MARKET_ACCESS),
            political_stability: Some(MetricDefaults::POLITICAL_STABILITY),
            growth_rate: Some(MetricDefaults::GROWTH_RATE),
            inflation_rate: Some(MetricDefaults::INFLATION_RATE),
            currency_stability: Some(MetricDefaults::CURRENCY_STABILITY),
            digital_infrastructure: Some(MetricDefaults::DIGITAL_INFRASTRUCTURE),
            supply_chain_efficiency: Some(MetricDefaults::SUPPLY_CHAIN_EFFICIENCY),
            innovation_index: Some(MetricDefaults::INNOVATION_INDEX),
            sustainability_score: Some(MetricDefaults::SUSTAINABILITY_SCORE),
            geopolitical_risk: Some(MetricDefaults::GEOPOLITICAL_RISK),
            market_volatility: Some(MetricDefaults::MARKET_VOLATILITY),
        }
        .normalize(&mut Vec::new());
        let company = tech_large_company().normalize();

        let implicit_result = score_investment(&implicit, &company);
        let explicit_result = score_investment(&explicit, &company);

        assert_eq!(implicit_result.composite_score, explicit_result.composite_score);
        assert_eq!(implicit_result.component_scores, explicit_result.component_scores);
        assert_eq!(implicit_result.investment_tier, explicit_result.investment_tier);
        assert_eq!(implicit_result.risk_assessment, explicit_result.risk_assessment);
    }

    #[test]
    fn test_geopolitical_exposure_dominates_risk_level() {
        let mut input = scenario_region();
        input.geopolitical_risk = Some(0.9);
        let region = input.normalize(&mut Vec::new());
        let company = tech_large_company().normalize();
        let result = score_investment(&region, &company);

        assert_eq!(result.risk_assessment.risk_level, "Critical Risk");
        assert!(result
            .risk_assessment
            .risk_factors
            .iter()
            .any(|f| f.contains("Geopolitical")));
    }

    #[test]
    fn test_improving_a_metric_never_lowers_the_composite() {
        let company = tech_large_company().normalize();
        let mut input = scenario_region();

        input.infrastructure_score = Some(0.5);
        let low = score_investment(&input.normalize(&mut Vec::new()), &company);
        input.infrastructure_score = Some(0.9);
        let high = score_investment(&input.normalize(&mut Vec::new()), &company);

        assert!(high.composite_score >= low.composite_score);
    }

    #[test]
    fn test_result_json_round_trip() {
        let request = AnalysisRequest {
            region: scenario_region(),
            company: tech_large_company(),
        };
        let region = request.region.normalize(&mut Vec::new());
        let company = request.company.normalize();
        let result = score_investment(&region, &company);

        let json = serde_json::to_string(&result).unwrap();
        let parsed: AlgorithmResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }

    #[test]
    fn test_json_shape_has_documented_keys() {
        let region = scenario_region().normalize(&mut Vec::new());
        let company = tech_large_company().normalize();
        let result = score_investment(&region, &company);

        let value: serde_json::Value = serde_json::to_value(&result).unwrap();
        for key in [
            "composite_score",
            "investment_tier",
            "tier_level",
            "component_scores",
            "roi_projection",
            "cost_savings",
            "risk_assessment",
            "recommendations",
            "confidence_level",
            "analysis_timestamp",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(
            value["component_scores"].as_object().unwrap().len(),
            12
        );
        assert!(value["roi_projection"]["projected_roi"].is_number());
        assert!(value["risk_assessment"]["risk_level"].is_string());
    }

    #[test]
    fn test_confidence_buckets() {
        assert_eq!(confidence_level(90.0), "Very High (95%)");
        assert_eq!(confidence_level(80.0), "High (85%)");
        assert_eq!(confidence_level(60.0), "Medium (75%)");
        assert_eq!(confidence_level(40.0), "Low (65%)");
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let region = RegionInput::default().normalize(&mut Vec::new());
        let company = CompanyInput::default().normalize();
        let result = score_investment(&region, &company);
        assert!(chrono::DateTime::parse_from_rfc3339(&result.analysis_timestamp).is_ok());
    }
}
