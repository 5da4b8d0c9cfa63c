use chrono::Utc;

use super::registry::Registry;
use super::types::{
    EntityProfile, MatchResult, MatchRiskAssessment, MatchRoiProjection, ProjectType,
    RegionalProfile,
};

// Top-level blend weights over the four sub-scores.
const WEIGHT_PREFERENCE: f64 = 0.25;
const WEIGHT_INTERESTS: f64 = 0.30;
const WEIGHT_ECONOMIC: f64 = 0.25;
const WEIGHT_RISK: f64 = 0.20;

/// Score given to a region outside the entity's preferred set.
const NON_PREFERRED: f64 = 0.5;

/// Matches below this floor are dropped in discovery mode. Scoring a
/// specific pair with `score_match` is never filtered.
const DISCOVERY_FLOOR: f64 = 0.3;

/// Outcome of a registry-wide match search. An unknown entity id is a
/// recoverable lookup miss, not a computation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Ranked(Vec<MatchResult>),
    UnknownEntity(String),
}

impl MatchOutcome {
    pub fn matches(&self) -> Option<&[MatchResult]> {
        match self {
            Self::Ranked(matches) => Some(matches),
            Self::UnknownEntity(_) => None,
        }
    }
}

/// Compatibility score between one entity and one region, in [0, 1].
///
/// A fixed blend of four sub-scores: region preference, project-interest
/// overlap, economic compatibility, and a risk index. Rounded to 3 decimals.
pub fn score_match(entity: &EntityProfile, region: &RegionalProfile) -> f64 {
    let preference = if entity.preferred_regions.contains(&region.region_id) {
        1.0
    } else {
        NON_PREFERRED
    };

    let interest_overlap = shared_interests(entity, region).len() as f64
        / entity.project_interests.len().max(1) as f64;

    let score = preference * WEIGHT_PREFERENCE
        + interest_overlap * WEIGHT_INTERESTS
        + economic_compatibility(region) * WEIGHT_ECONOMIC
        + risk_index(region) * WEIGHT_RISK;

    (score.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

/// Rank every region in the registry for an entity, best first, with the
/// default discovery floor and truncated to `limit`.
pub fn find_matches(entity_id: &str, registry: &Registry, limit: usize) -> MatchOutcome {
    find_matches_with_floor(entity_id, registry, limit, DISCOVERY_FLOOR)
}

/// `find_matches` with an explicit score floor. Ties keep registry
/// insertion order (stable sort).
pub fn find_matches_with_floor(
    entity_id: &str,
    registry: &Registry,
    limit: usize,
    floor: f64,
) -> MatchOutcome {
    let Some(entity) = registry.entity(entity_id) else {
        return MatchOutcome::UnknownEntity(entity_id.to_string());
    };

    let mut matches: Vec<MatchResult> = registry
        .regions()
        .iter()
        .map(|region| build_match(entity, region))
        .filter(|m| m.match_score > floor)
        .collect();

    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);
    MatchOutcome::Ranked(matches)
}

/// Full match record for one (entity, region) pair.
pub fn build_match(entity: &EntityProfile, region: &RegionalProfile) -> MatchResult {
    let match_score = score_match(entity, region);
    let shared = shared_interests(entity, region);

    let mut compatibility_factors = Vec::new();
    if entity.preferred_regions.contains(&region.region_id) {
        compatibility_factors.push("Region in preferred locations".to_string());
    }
    if !shared.is_empty() {
        let names: Vec<&str> = shared.iter().map(|p| p.as_str()).collect();
        compatibility_factors.push(format!("Shared project interests: {}", names.join(", ")));
    }
    if region.metrics.growth_rate > 0.05 {
        compatibility_factors.push("High growth potential".to_string());
    }
    if region.metrics.infrastructure_score > 0.8 {
        compatibility_factors.push("Strong infrastructure".to_string());
    }

    let project_recommendations = shared
        .iter()
        .filter_map(|project| project_recommendation(*project))
        .map(str::to_string)
        .collect();

    MatchResult {
        entity_id: entity.entity_id.clone(),
        region_id: region.region_id.clone(),
        match_score,
        compatibility_factors,
        project_recommendations,
        risk_assessment: match_risk(match_score, region),
        roi_projection: match_roi(match_score),
        timeline: "6-12 months for initial setup, 2-3 years for full implementation".to_string(),
        next_steps: vec![
            "Schedule initial meeting with regional representatives".to_string(),
            "Conduct site visit and feasibility study".to_string(),
            "Develop detailed project proposal".to_string(),
            "Negotiate terms and incentives".to_string(),
            "Begin implementation planning".to_string(),
        ],
        created_at: Utc::now(),
    }
}

/// Entity interests also offered by the region, in the entity's declaration
/// order (deterministic, unlike a set intersection).
fn shared_interests(entity: &EntityProfile, region: &RegionalProfile) -> Vec<ProjectType> {
    entity
        .project_interests
        .iter()
        .filter(|p| region.project_opportunities.contains(p))
        .copied()
        .collect()
}

fn project_recommendation(project: ProjectType) -> Option<&'static str> {
    match project {
        ProjectType::Technology => Some("Establish technology innovation hub"),
        ProjectType::Manufacturing => Some("Develop advanced manufacturing facility"),
        ProjectType::Infrastructure => Some("Invest in critical infrastructure projects"),
        ProjectType::SmartCity => Some("Implement smart city technologies"),
        _ => None,
    }
}

/// Blend of growth, infrastructure, talent, and (inverted) living cost.
/// Growth saturates at 10%.
fn economic_compatibility(region: &RegionalProfile) -> f64 {
    let m = &region.metrics;
    (m.growth_rate * 10.0).min(1.0) * 0.3
        + m.infrastructure_score * 0.25
        + m.talent_availability * 0.25
        + (1.0 - m.cost_of_living) * 0.2
}

/// Blend of political stability, regulatory ease, and (inverted)
/// unemployment, which saturates at 10%.
fn risk_index(region: &RegionalProfile) -> f64 {
    let m = &region.metrics;
    m.political_stability * 0.4
        + m.regulatory_ease * 0.3
        + (1.0 - region.unemployment_rate * 10.0).clamp(0.0, 1.0) * 0.3
}

fn match_risk(match_score: f64, region: &RegionalProfile) -> MatchRiskAssessment {
    let band = |good: bool| if good { "Low" } else { "Medium" };
    MatchRiskAssessment {
        overall_risk: if match_score > 0.7 {
            "Low"
        } else if match_score > 0.5 {
            "Medium"
        } else {
            "High"
        }
        .to_string(),
        political_risk: band(region.metrics.political_stability > 0.8).to_string(),
        economic_risk: band(region.metrics.growth_rate > 0.05).to_string(),
        infrastructure_risk: band(region.metrics.infrastructure_score > 0.8).to_string(),
        mitigation_strategies: vec![
            "Establish local partnerships".to_string(),
            "Conduct thorough due diligence".to_string(),
            "Develop contingency plans".to_string(),
        ],
    }
}

fn match_roi(match_score: f64) -> MatchRoiProjection {
    let roi = (match_score * 25.0 * 10.0).round() / 10.0;
    MatchRoiProjection {
        projected_roi: roi,
        time_horizon: "3-5 years".to_string(),
        break_even_months: if roi > 0.0 {
            Some((2400.0 / roi) as u32)
        } else {
            None
        },
        confidence_level: if match_score > 0.7 { "High" } else { "Medium" }.to_string(),
    }
}
