use serde::{Deserialize, Serialize};

use super::defaults::MetricDefaults;
use super::types::{CompanyProfile, InvestmentSize, RegionalMetrics, RiskTolerance, Timeline};
use crate::scoring::Industry;

/// A scoring request as supplied by the caller. Every field is optional;
/// normalization fills gaps from `MetricDefaults` and clamps out-of-range
/// values, reporting each substitution as a data-quality note.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub region: RegionInput,
    #[serde(default)]
    pub company: CompanyInput,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegionInput {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub gdp_per_capita: Option<f64>,
    #[serde(default)]
    pub infrastructure_score: Option<f64>,
    #[serde(default)]
    pub talent_availability: Option<f64>,
    #[serde(default)]
    pub cost_of_living: Option<f64>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub regulatory_ease: Option<f64>,
    #[serde(default)]
    pub market_access: Option<f64>,
    #[serde(default)]
    pub political_stability: Option<f64>,
    #[serde(default)]
    pub growth_rate: Option<f64>,
    #[serde(default)]
    pub inflation_rate: Option<f64>,
    #[serde(default)]
    pub currency_stability: Option<f64>,
    #[serde(default)]
    pub digital_infrastructure: Option<f64>,
    #[serde(default)]
    pub supply_chain_efficiency: Option<f64>,
    #[serde(default)]
    pub innovation_index: Option<f64>,
    #[serde(default)]
    pub sustainability_score: Option<f64>,
    #[serde(default)]
    pub geopolitical_risk: Option<f64>,
    #[serde(default)]
    pub market_volatility: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyInput {
    #[serde(default)]
    pub company_type: Option<String>,
    #[serde(default)]
    pub investment_size: Option<String>,
    #[serde(default)]
    pub risk_tolerance: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub industry_focus: Option<String>,
    #[serde(default)]
    pub preferred_region: Option<String>,
    #[serde(default)]
    pub technology_requirements: Option<Vec<String>>,
    #[serde(default)]
    pub supply_chain_needs: Option<Vec<String>>,
    #[serde(default)]
    pub sustainability_goals: Option<Vec<String>>,
}

impl RegionInput {
    /// Normalize into `RegionalMetrics`, appending one note per defaulted or
    /// clamped field. All notes are collected, not just the first.
    pub fn normalize(&self, notes: &mut Vec<String>) -> RegionalMetrics {
        let mut indicator = |name: &str, value: Option<f64>, default: f64| match value {
            Some(v) if (0.0..=1.0).contains(&v) => v,
            Some(v) => {
                let clamped = v.clamp(0.0, 1.0);
                notes.push(format!("{}: {} out of range, clamped to {}", name, v, clamped));
                clamped
            }
            None => {
                notes.push(format!("{}: missing, using default {}", name, default));
                default
            }
        };

        let infrastructure_score = indicator(
            "infrastructure_score",
            self.infrastructure_score,
            MetricDefaults::INFRASTRUCTURE_SCORE,
        );
        let talent_availability = indicator(
            "talent_availability",
            self.talent_availability,
            MetricDefaults::TALENT_AVAILABILITY,
        );
        let cost_of_living =
            indicator("cost_of_living", self.cost_of_living, MetricDefaults::COST_OF_LIVING);
        let tax_rate = indicator("tax_rate", self.tax_rate, MetricDefaults::TAX_RATE);
        let regulatory_ease =
            indicator("regulatory_ease", self.regulatory_ease, MetricDefaults::REGULATORY_EASE);
        let market_access =
            indicator("market_access", self.market_access, MetricDefaults::MARKET_ACCESS);
        let political_stability = indicator(
            "political_stability",
            self.political_stability,
            MetricDefaults::POLITICAL_STABILITY,
        );
        let growth_rate = indicator("growth_rate", self.growth_rate, MetricDefaults::GROWTH_RATE);
        let inflation_rate =
            indicator("inflation_rate", self.inflation_rate, MetricDefaults::INFLATION_RATE);
        let currency_stability = indicator(
            "currency_stability",
            self.currency_stability,
            MetricDefaults::CURRENCY_STABILITY,
        );
        let digital_infrastructure = indicator(
            "digital_infrastructure",
            self.digital_infrastructure,
            MetricDefaults::DIGITAL_INFRASTRUCTURE,
        );
        let supply_chain_efficiency = indicator(
            "supply_chain_efficiency",
            self.supply_chain_efficiency,
            MetricDefaults::SUPPLY_CHAIN_EFFICIENCY,
        );
        let innovation_index =
            indicator("innovation_index", self.innovation_index, MetricDefaults::INNOVATION_INDEX);
        let sustainability_score = indicator(
            "sustainability_score",
            self.sustainability_score,
            MetricDefaults::SUSTAINABILITY_SCORE,
        );
        let geopolitical_risk = indicator(
            "geopolitical_risk",
            self.geopolitical_risk,
            MetricDefaults::GEOPOLITICAL_RISK,
        );
        let market_volatility = indicator(
            "market_volatility",
            self.market_volatility,
            MetricDefaults::MARKET_VOLATILITY,
        );

        let population = match self.population {
            Some(p) if p > 0 => p,
            Some(_) => {
                notes.push(format!(
                    "population: must be positive, using default {}",
                    MetricDefaults::POPULATION
                ));
                MetricDefaults::POPULATION
            }
            None => {
                notes.push(format!(
                    "population: missing, using default {}",
                    MetricDefaults::POPULATION
                ));
                MetricDefaults::POPULATION
            }
        };
        let gdp_per_capita = match self.gdp_per_capita {
            Some(g) if g > 0.0 => g,
            Some(_) => {
                notes.push(format!(
                    "gdp_per_capita: must be positive, using default {}",
                    MetricDefaults::GDP_PER_CAPITA
                ));
                MetricDefaults::GDP_PER_CAPITA
            }
            None => {
                notes.push(format!(
                    "gdp_per_capita: missing, using default {}",
                    MetricDefaults::GDP_PER_CAPITA
                ));
                MetricDefaults::GDP_PER_CAPITA
            }
        };

        RegionalMetrics {
            city: self.city.clone().unwrap_or_else(|| MetricDefaults::CITY.to_string()),
            country: self.country.clone().unwrap_or_else(|| MetricDefaults::COUNTRY.to_string()),
            region: self.region.clone().unwrap_or_else(|| MetricDefaults::REGION.to_string()),
            population,
            gdp_per_capita,
            infrastructure_score,
            talent_availability,
            cost_of_living,
            tax_rate,
            regulatory_ease,
            market_access,
            political_stability,
            growth_rate,
            inflation_rate,
            currency_stability,
            digital_infrastructure,
            supply_chain_efficiency,
            innovation_index,
            sustainability_score,
            geopolitical_risk,
            market_volatility,
        }
    }
}

impl CompanyInput {
    /// Normalize into `CompanyProfile`. Unknown categorical values map to
    /// their neutral variants and are not treated as data-quality failures.
    pub fn normalize(&self) -> CompanyProfile {
        CompanyProfile {
            company_type: self
                .company_type
                .clone()
                .unwrap_or_else(|| "company".to_string()),
            investment_size: InvestmentSize::parse(self.investment_size.as_deref().unwrap_or("")),
            risk_tolerance: RiskTolerance::parse(self.risk_tolerance.as_deref().unwrap_or("")),
            timeline: Timeline::parse(self.timeline.as_deref().unwrap_or("")),
            industry_focus: Industry::parse(self.industry_focus.as_deref().unwrap_or("")),
            preferred_region: self.preferred_region.clone().unwrap_or_default(),
            technology_requirements: self.technology_requirements.clone().unwrap_or_default(),
            supply_chain_needs: self.supply_chain_needs.clone().unwrap_or_default(),
            sustainability_goals: self.sustainability_goals.clone().unwrap_or_default(),
        }
    }
}
