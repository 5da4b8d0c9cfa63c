use serde::{Deserialize, Serialize};

use super::industry::Industry;
use crate::metrics::{CompanyProfile, InvestmentSize, RegionalMetrics, RiskTolerance};

/// Component names in declaration order. Recommendation output and the
/// weight table both follow this order.
pub const COMPONENT_NAMES: [&str; 12] = [
    "infrastructure",
    "talent",
    "cost_efficiency",
    "market_access",
    "regulatory",
    "political_stability",
    "growth_potential",
    "risk_factors",
    "digital_readiness",
    "sustainability",
    "innovation",
    "supply_chain",
];

/// The 12 named component scores, each in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub infrastructure: f64,
    pub talent: f64,
    pub cost_efficiency: f64,
    pub market_access: f64,
    pub regulatory: f64,
    pub political_stability: f64,
    pub growth_potential: f64,
    pub risk_factors: f64,
    pub digital_readiness: f64,
    pub sustainability: f64,
    pub innovation: f64,
    pub supply_chain: f64,
}

impl ComponentScores {
    /// All scores paired with their names, in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 12] {
        [
            ("infrastructure", self.infrastructure),
            ("talent", self.talent),
            ("cost_efficiency", self.cost_efficiency),
            ("market_access", self.market_access),
            ("regulatory", self.regulatory),
            ("political_stability", self.political_stability),
            ("growth_potential", self.growth_potential),
            ("risk_factors", self.risk_factors),
            ("digital_readiness", self.digital_readiness),
            ("sustainability", self.sustainability),
            ("innovation", self.innovation),
            ("supply_chain", self.supply_chain),
        ]
    }

    /// Round every score to 2 decimals for the external result shape.
    pub fn rounded(&self) -> Self {
        let r = |v: f64| (v * 100.0).round() / 100.0;
        Self {
            infrastructure: r(self.infrastructure),
            talent: r(self.talent),
            cost_efficiency: r(self.cost_efficiency),
            market_access: r(self.market_access),
            regulatory: r(self.regulatory),
            political_stability: r(self.political_stability),
            growth_potential: r(self.growth_potential),
            risk_factors: r(self.risk_factors),
            digital_readiness: r(self.digital_readiness),
            sustainability: r(self.sustainability),
            innovation: r(self.innovation),
            supply_chain: r(self.supply_chain),
        }
    }
}

/// Compute all 12 component scores. Each component is a pure function of the
/// two input records and the static multiplier table; no component reads
/// another component's output.
pub fn compute_component_scores(
    region: &RegionalMetrics,
    company: &CompanyProfile,
) -> ComponentScores {
    let industry = company.industry_focus;
    ComponentScores {
        infrastructure: infrastructure_score(region, industry),
        talent: talent_score(region, industry),
        cost_efficiency: cost_efficiency_score(region, company, industry),
        market_access: market_access_score(region, industry),
        regulatory: regulatory_score(region, industry),
        political_stability: political_stability_score(region, industry),
        growth_potential: growth_potential_score(region),
        risk_factors: risk_factors_score(region, company),
        digital_readiness: digital_readiness_score(region, industry),
        sustainability: sustainability_score(region, company),
        innovation: innovation_score(region, industry),
        supply_chain: supply_chain_score(region, industry),
    }
}

fn clamp_score(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

/// Infrastructure readiness. Bonus for modern infrastructure, penalty below
/// the 0.4 floor.
fn infrastructure_score(region: &RegionalMetrics, industry: Industry) -> f64 {
    let mut score = region.infrastructure_score * 100.0 * industry.multiplier("infrastructure");
    if region.infrastructure_score > 0.8 {
        score += 10.0;
    }
    if region.infrastructure_score < 0.4 {
        score -= 20.0;
    }
    clamp_score(score)
}

/// Talent availability, with a labor-pool adjustment from population size.
fn talent_score(region: &RegionalMetrics, industry: Industry) -> f64 {
    let mut score = region.talent_availability * 100.0 * industry.multiplier("talent");
    if region.population > 1_000_000 {
        score += 5.0;
    } else if region.population < 100_000 {
        score -= 10.0;
    }
    clamp_score(score)
}

/// Cost efficiency: the mean of a living-cost side and a tax side.
///
/// The living-cost side carries the industry multiplier, the investment-size
/// nudge (large investments benefit more from cheap regions), and the very
/// cheap / very expensive threshold adjustments.
fn cost_efficiency_score(
    region: &RegionalMetrics,
    company: &CompanyProfile,
    industry: Industry,
) -> f64 {
    let mut cost_side = (1.0 - region.cost_of_living) * 100.0 * industry.multiplier("cost_efficiency");
    match company.investment_size {
        InvestmentSize::Large | InvestmentSize::Enterprise => cost_side *= 1.1,
        InvestmentSize::Small => cost_side *= 0.9,
        InvestmentSize::Medium => {}
    }
    if region.cost_of_living < 0.3 {
        cost_side += 15.0;
    } else if region.cost_of_living > 0.7 {
        cost_side -= 10.0;
    }

    let tax_side = (1.0 - region.tax_rate) * 100.0;
    clamp_score((cost_side + tax_side) / 2.0)
}

/// Market access with a domestic-market-size bonus.
fn market_access_score(region: &RegionalMetrics, industry: Industry) -> f64 {
    let mut score = region.market_access * 100.0 * industry.multiplier("market_access");
    if region.population > 5_000_000 {
        score += 15.0;
    } else if region.population > 1_000_000 {
        score += 10.0;
    }
    clamp_score(score)
}

fn regulatory_score(region: &RegionalMetrics, industry: Industry) -> f64 {
    let mut score = region.regulatory_ease * 100.0 * industry.multiplier("regulatory");
    if region.regulatory_ease > 0.7 {
        score += 10.0;
    } else if region.regulatory_ease < 0.3 {
        score -= 15.0;
    }
    clamp_score(score)
}

/// Political stability, adjusted by geopolitical exposure.
fn political_stability_score(region: &RegionalMetrics, industry: Industry) -> f64 {
    let mut score = region.political_stability * 100.0 * industry.multiplier("political_stability");
    if region.geopolitical_risk < 0.2 {
        score += 10.0;
    } else if region.geopolitical_risk > 0.6 {
        score -= 20.0;
    }
    clamp_score(score)
}

/// Growth potential. The 0-0.10 growth band maps onto 0-100; GDP per capita
/// dampens mature markets and lifts emerging ones.
fn growth_potential_score(region: &RegionalMetrics) -> f64 {
    let mut score = region.growth_rate * 1000.0;
    if region.gdp_per_capita > 50_000.0 {
        score *= 0.8;
    } else if region.gdp_per_capita < 10_000.0 {
        score *= 1.3;
    }
    clamp_score(score)
}

/// Inverted risk score: 100 = safest. Risk-tolerant organizations discount
/// risk penalties; risk-averse ones weight them up.
fn risk_factors_score(region: &RegionalMetrics, company: &CompanyProfile) -> f64 {
    let mut score = 100.0;
    if region.inflation_rate > 0.1 {
        score -= 20.0;
    } else if region.inflation_rate < 0.02 {
        score += 10.0;
    }
    if region.currency_stability < 0.5 {
        score -= 15.0;
    }
    if region.market_volatility > 0.7 {
        score -= 10.0;
    }
    match company.risk_tolerance {
        RiskTolerance::Low => score *= 1.1,
        RiskTolerance::High => score *= 0.9,
        RiskTolerance::Medium => {}
    }
    clamp_score(score)
}

fn digital_readiness_score(region: &RegionalMetrics, industry: Industry) -> f64 {
    clamp_score(region.digital_infrastructure * 100.0 * industry.multiplier("digital_readiness"))
}

/// Sustainability, with a small alignment bonus when the company has stated
/// sustainability goals.
fn sustainability_score(region: &RegionalMetrics, company: &CompanyProfile) -> f64 {
    let mut score = region.sustainability_score * 100.0;
    if !company.sustainability_goals.is_empty() {
        score += 10.0;
    }
    clamp_score(score)
}

fn innovation_score(region: &RegionalMetrics, industry: Industry) -> f64 {
    clamp_score(region.innovation_index * 100.0 * industry.multiplier("innovation"))
}

fn supply_chain_score(region: &RegionalMetrics, industry: Industry) -> f64 {
    clamp_score(region.supply_chain_efficiency * 100.0 * industry.multiplier("supply_chain"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{RegionInput, Timeline};

    fn sample_metrics() -> RegionalMetrics {
        RegionInput::default().normalize(&mut Vec::new())
    }

    fn sample_company(industry: &str) -> CompanyProfile {
        CompanyProfile {
            company_type: "company".to_string(),
            investment_size: InvestmentSize::Medium,
            risk_tolerance: RiskTolerance::Medium,
            timeline: Timeline::MediumTerm,
            industry_focus: Industry::parse(industry),
            preferred_region: String::new(),
            technology_requirements: vec![],
            supply_chain_needs: vec![],
            sustainability_goals: vec![],
        }
    }

    #[test]
    fn test_all_components_in_range() {
        let region = sample_metrics();
        let company = sample_company("technology");
        let scores = compute_component_scores(&region, &company);
        for (name, score) in scores.entries() {
            assert!(
                (0.0..=100.0).contains(&score),
                "{} out of range: {}",
                name,
                score
            );
        }
    }

    #[test]
    fn test_entries_order_matches_component_names() {
        let scores = compute_component_scores(&sample_metrics(), &sample_company("finance"));
        let names: Vec<&str> = scores.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, COMPONENT_NAMES);
    }

    #[test]
    fn test_infrastructure_bonus_and_penalty() {
        let mut region = sample_metrics();
        let company = sample_company("other");

        region.infrastructure_score = 0.85;
        let high = compute_component_scores(&region, &company).infrastructure;
        assert_eq!(high, 95.0); // 85 + 10

        region.infrastructure_score = 0.3;
        let low = compute_component_scores(&region, &company).infrastructure;
        assert_eq!(low, 10.0); // 30 - 20
    }

    #[test]
    fn test_infrastructure_monotonic() {
        let company = sample_company("other");
        let mut region = sample_metrics();
        region.infrastructure_score = 0.5;
        let mid = compute_component_scores(&region, &company).infrastructure;
        region.infrastructure_score = 0.9;
        let high = compute_component_scores(&region, &company).infrastructure;
        assert!(high >= mid);
    }

    #[test]
    fn test_talent_industry_multiplier_applies() {
        let mut region = sample_metrics();
        region.talent_availability = 0.6;
        region.population = 500_000; // no population adjustment
        let tech = compute_component_scores(&region, &sample_company("technology")).talent;
        let neutral = compute_component_scores(&region, &sample_company("other")).talent;
        assert_eq!(neutral, 60.0);
        assert_eq!(tech, 78.0); // 60 * 1.3
    }

    #[test]
    fn test_talent_population_adjustment() {
        let mut region = sample_metrics();
        region.talent_availability = 0.6;
        let company = sample_company("other");

        region.population = 2_000_000;
        assert_eq!(compute_component_scores(&region, &company).talent, 65.0);

        region.population = 50_000;
        assert_eq!(compute_component_scores(&region, &company).talent, 50.0);
    }

    #[test]
    fn test_cost_efficiency_cheap_region_bonus() {
        let mut region = sample_metrics();
        region.cost_of_living = 0.25;
        region.tax_rate = 0.25;
        let company = sample_company("other");
        // cost side: 75 + 15 = 90, tax side: 75, mean = 82.5
        assert_eq!(
            compute_component_scores(&region, &company).cost_efficiency,
            82.5
        );
    }

    #[test]
    fn test_cost_efficiency_size_adjustment() {
        let mut region = sample_metrics();
        region.cost_of_living = 0.5;
        region.tax_rate = 0.25;
        let mut company = sample_company("other");

        company.investment_size = InvestmentSize::Large;
        let large = compute_component_scores(&region, &company).cost_efficiency;
        company.investment_size = InvestmentSize::Small;
        let small = compute_component_scores(&region, &company).cost_efficiency;
        assert!(large > small);
    }

    #[test]
    fn test_growth_potential_scaling() {
        let mut region = sample_metrics();
        region.growth_rate = 0.08;
        region.gdp_per_capita = 35_000.0;
        assert_eq!(
            compute_component_scores(&region, &sample_company("other")).growth_potential,
            80.0
        );
    }

    #[test]
    fn test_growth_potential_gdp_adjustments() {
        let mut region = sample_metrics();
        region.growth_rate = 0.08;
        let company = sample_company("other");

        region.gdp_per_capita = 60_000.0;
        assert_eq!(compute_component_scores(&region, &company).growth_potential, 64.0);

        region.gdp_per_capita = 5_000.0;
        // 80 * 1.3 = 104, clamped
        assert_eq!(compute_component_scores(&region, &company).growth_potential, 100.0);
    }

    #[test]
    fn test_risk_factors_tolerance_scaling() {
        let mut region = sample_metrics();
        region.inflation_rate = 0.05;
        region.currency_stability = 0.9;
        region.market_volatility = 0.3;
        let mut company = sample_company("other");

        company.risk_tolerance = RiskTolerance::Medium;
        assert_eq!(compute_component_scores(&region, &company).risk_factors, 100.0);

        company.risk_tolerance = RiskTolerance::High;
        assert_eq!(compute_component_scores(&region, &company).risk_factors, 90.0);
    }

    #[test]
    fn test_risk_factors_penalties_stack() {
        let mut region = sample_metrics();
        region.inflation_rate = 0.15; // -20
        region.currency_stability = 0.4; // -15
        region.market_volatility = 0.8; // -10
        let company = sample_company("other");
        assert_eq!(compute_component_scores(&region, &company).risk_factors, 55.0);
    }

    #[test]
    fn test_sustainability_goal_bonus() {
        let region = sample_metrics();
        let mut company = sample_company("other");
        let without = compute_component_scores(&region, &company).sustainability;
        company.sustainability_goals = vec!["carbon neutral".to_string()];
        let with = compute_component_scores(&region, &company).sustainability;
        assert_eq!(with - without, 10.0);
    }

    #[test]
    fn test_digital_readiness_clamped_after_multiplier() {
        let mut region = sample_metrics();
        region.digital_infrastructure = 0.9;
        let score = compute_component_scores(&region, &sample_company("technology"))
            .digital_readiness;
        assert_eq!(score, 100.0); // 90 * 1.4 clamps
    }
}
