use serde::{Deserialize, Serialize};

use crate::metrics::{CompanyProfile, InvestmentSize, RegionalMetrics, Timeline};
use crate::scoring::InvestmentTier;

const BASE_ROI: f64 = 12.0;
const CONFIDENCE_BAND: f64 = 3.0;

/// ROI projection for an investment. `break_even_time` is the sentinel
/// `"N/A"` whenever `projected_roi` is non-positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub projected_roi: f64,
    pub confidence_interval: String,
    pub break_even_time: String,
    pub roi_factors: RoiFactors,
}

/// Per-driver contributions reported alongside the headline ROI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiFactors {
    pub regional_growth: f64,
    pub market_access: f64,
    pub cost_efficiency: f64,
}

/// Project ROI from the composite score and the raw inputs.
///
/// base + score-bracket bonus + regional growth + investment-size
/// adjustment + timeline adjustment, with a ±3pp confidence band.
pub fn project_roi(
    composite_score: f64,
    region: &RegionalMetrics,
    company: &CompanyProfile,
) -> RoiProjection {
    let mut roi = BASE_ROI;

    // Score bracket bonus
    if composite_score > InvestmentTier::TIER_1_THRESHOLD {
        roi += 8.0;
    } else if composite_score > InvestmentTier::TIER_2_THRESHOLD {
        roi += 4.0;
    } else if composite_score < InvestmentTier::TIER_3_THRESHOLD {
        roi -= 6.0;
    }

    roi += region.growth_rate * 100.0;

    match company.investment_size {
        InvestmentSize::Large | InvestmentSize::Enterprise => roi += 2.0,
        InvestmentSize::Small => roi -= 1.0,
        InvestmentSize::Medium => {}
    }

    if company.timeline == Timeline::LongTerm {
        roi += 3.0;
    }

    let roi = round2(roi);
    RoiProjection {
        projected_roi: roi,
        confidence_interval: format!(
            "{}% - {}%",
            round1(roi - CONFIDENCE_BAND),
            round1(roi + CONFIDENCE_BAND)
        ),
        break_even_time: break_even_time(roi).to_string(),
        roi_factors: RoiFactors {
            regional_growth: round2(region.growth_rate * 100.0),
            market_access: round2(region.market_access * 10.0),
            cost_efficiency: round2((1.0 - region.cost_of_living) * 15.0),
        },
    }
}

/// Bucket the break-even horizon from ROI. Non-positive ROI never breaks
/// even, so the sentinel guards the division-free bucketing too.
fn break_even_time(roi: f64) -> &'static str {
    if roi <= 0.0 {
        "N/A"
    } else if roi > 20.0 {
        "2-3 years"
    } else if roi > 15.0 {
        "3-4 years"
    } else if roi > 10.0 {
        "4-5 years"
    } else {
        "5+ years"
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
