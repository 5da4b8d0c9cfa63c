pub mod roi;
pub mod savings;

pub use roi::{project_roi, RoiFactors, RoiProjection};
pub use savings::{project_cost_savings, CostSavings, SavingsBreakdown};
