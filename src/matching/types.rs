use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::RegionalMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Government,
    Company,
    Investor,
    Nonprofit,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Company => "company",
            Self::Investor => "investor",
            Self::Nonprofit => "nonprofit",
        }
    }
}

/// Regional development classification, the four-tier variant used for
/// development profiles (the investment engine keeps its own three tiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevelopmentTier {
    Emerging,
    Growing,
    Established,
    Premium,
}

impl DevelopmentTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Emerging => "Emerging Region",
            Self::Growing => "Growing Region",
            Self::Established => "Established Region",
            Self::Premium => "Premium Region",
        }
    }

    /// Derive the tier from a region's fundamentals. All rates are
    /// fractions; growth saturates at 10% and unemployment at 10%.
    pub fn derive(profile: &RegionalProfile) -> Self {
        let m = &profile.metrics;
        let score = (m.growth_rate * 10.0).min(1.0) * 0.25
            + m.infrastructure_score * 0.20
            + m.talent_availability * 0.15
            + (m.gdp_per_capita / 100_000.0).min(1.0) * 0.15
            + m.political_stability * 0.15
            + (1.0 - profile.unemployment_rate * 10.0).clamp(0.0, 1.0) * 0.10;

        if score >= 0.85 {
            Self::Premium
        } else if score >= 0.70 {
            Self::Established
        } else if score >= 0.55 {
            Self::Growing
        } else {
            Self::Emerging
        }
    }
}

/// Kinds of development projects a region can host and an entity can seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Infrastructure,
    Technology,
    Manufacturing,
    Logistics,
    Healthcare,
    Education,
    RenewableEnergy,
    SmartCity,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure Development",
            Self::Technology => "Technology Hub",
            Self::Manufacturing => "Manufacturing Center",
            Self::Logistics => "Logistics Hub",
            Self::Healthcare => "Healthcare Facility",
            Self::Education => "Education Center",
            Self::RenewableEnergy => "Renewable Energy",
            Self::SmartCity => "Smart City Initiative",
        }
    }
}

/// A region as seen by the matching engine: core metrics plus development
/// state and the projects it can host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalProfile {
    pub region_id: String,
    pub name: String,
    pub metrics: RegionalMetrics,
    pub unemployment_rate: f64, // fraction, lower = better
    pub development_tier: DevelopmentTier,
    pub project_opportunities: Vec<ProjectType>,
    pub current_projects: Vec<String>,
}

/// A government, company, or investor looking for regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityProfile {
    pub entity_id: String,
    pub name: String,
    pub entity_type: EntityType,
    pub capabilities: Vec<String>,
    pub investment_capacity: f64,
    pub preferred_regions: Vec<String>,
    pub project_interests: Vec<ProjectType>,
}

/// One ranked match between an entity and a region. Immutable value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub entity_id: String,
    pub region_id: String,
    pub match_score: f64,
    pub compatibility_factors: Vec<String>,
    pub project_recommendations: Vec<String>,
    pub risk_assessment: MatchRiskAssessment,
    pub roi_projection: MatchRoiProjection,
    pub timeline: String,
    pub next_steps: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Match-level risk view, coarser than the investment engine's assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRiskAssessment {
    pub overall_risk: String,
    pub political_risk: String,
    pub economic_risk: String,
    pub infrastructure_risk: String,
    pub mitigation_strategies: Vec<String>,
}

/// ROI sketch for a match. `break_even_months` is `None` when the projected
/// ROI is non-positive (the "N/A" case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRoiProjection {
    pub projected_roi: f64,
    pub time_horizon: String,
    pub break_even_months: Option<u32>,
    pub confidence_level: String,
}
