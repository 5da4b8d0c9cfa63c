use serde::{Deserialize, Serialize};

use crate::metrics::{CompanyProfile, RegionalMetrics};

// Category weights for the savings percentage: share of operational,
// tax, and labor cost that regional conditions can recover.
const OPERATIONAL_BASE: f64 = 40.0;
const TAX_BASE: f64 = 25.0;
const LABOR_BASE: f64 = 30.0;

/// Projected cost savings, annualized (in millions) with the category
/// breakdown as percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSavings {
    pub annual_savings: f64,
    pub savings_percentage: f64,
    pub breakdown: SavingsBreakdown,
    pub five_year_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    pub operational_savings: f64,
    pub tax_savings: f64,
    pub labor_savings: f64,
}

/// Project cost savings from regional conditions, scaled by the
/// investment-size bucket.
///
/// The tax term scales with `tax_rate` itself: high-tax regions have more
/// tax burden available to structure away, so the recoverable amount grows
/// with the rate.
pub fn project_cost_savings(region: &RegionalMetrics, company: &CompanyProfile) -> CostSavings {
    let operational = (1.0 - region.cost_of_living) * OPERATIONAL_BASE;
    let tax = region.tax_rate * TAX_BASE;
    let labor = (1.0 - region.talent_availability) * LABOR_BASE;

    let percentage = operational + tax + labor;
    let annual = percentage * company.investment_size.savings_multiplier();

    CostSavings {
        annual_savings: round1(annual),
        savings_percentage: round1(percentage),
        breakdown: SavingsBreakdown {
            operational_savings: round1(operational),
            tax_savings: round1(tax),
            labor_savings: round1(labor),
        },
        five_year_savings: round1(annual * 5.0),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
