use serde::{Deserialize, Serialize};

use crate::scoring::Industry;

/// Facts about a place, normalized for scoring.
///
/// All indicator fields are fractions in [0, 1] except `growth_rate` and
/// `inflation_rate`, which are fractional rates (typically 0-0.2). Values are
/// clamped at the input boundary; the scoring engine assumes they hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalMetrics {
    pub city: String,
    pub country: String,
    pub region: String,
    pub population: u64,
    pub gdp_per_capita: f64,
    pub infrastructure_score: f64,
    pub talent_availability: f64,
    pub cost_of_living: f64, // lower = better
    pub tax_rate: f64,
    pub regulatory_ease: f64,
    pub market_access: f64,
    pub political_stability: f64,
    pub growth_rate: f64,
    pub inflation_rate: f64,
    pub currency_stability: f64,
    pub digital_infrastructure: f64,
    pub supply_chain_efficiency: f64,
    pub innovation_index: f64,
    pub sustainability_score: f64,
    pub geopolitical_risk: f64,  // lower = better
    pub market_volatility: f64,  // lower = better
}

/// An investor's preferences and capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_type: String,
    pub investment_size: InvestmentSize,
    pub risk_tolerance: RiskTolerance,
    pub timeline: Timeline,
    pub industry_focus: Industry,
    pub preferred_region: String,
    pub technology_requirements: Vec<String>,
    pub supply_chain_needs: Vec<String>,
    pub sustainability_goals: Vec<String>,
}

/// Investment size bucket. Scales cost-savings magnitude and nudges
/// cost-efficiency and ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentSize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl InvestmentSize {
    /// Parse a user-supplied bucket name. Unknown values fall back to
    /// `Medium`, the neutral bucket.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "small" => Self::Small,
            "large" => Self::Large,
            "enterprise" => Self::Enterprise,
            _ => Self::Medium,
        }
    }

    /// Multiplier applied to the cost-savings percentage to get annual
    /// savings (in millions).
    pub fn savings_multiplier(self) -> f64 {
        match self {
            Self::Small => 1.0,
            Self::Medium => 10.0,
            Self::Large => 100.0,
            Self::Enterprise => 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    /// Unknown values fall back to `Medium` (no scaling either way).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeline {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Timeline {
    /// Accepts "long-term", "long term" and "long_term" spellings; anything
    /// unrecognized is treated as medium-term.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "short-term" => Self::ShortTerm,
            "long-term" => Self::LongTerm,
            _ => Self::MediumTerm,
        }
    }
}
