pub mod defaults;
pub mod input;
pub mod types;

pub use defaults::{clamp01, MetricDefaults};
pub use input::{AnalysisRequest, CompanyInput, RegionInput};
pub use types::{CompanyProfile, InvestmentSize, RegionalMetrics, RiskTolerance, Timeline};
