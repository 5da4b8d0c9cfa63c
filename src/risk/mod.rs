pub mod advice;
pub mod assessor;

pub use advice::{insurance_recommendations, mitigation_strategies};
pub use assessor::{assess_risk, RiskAssessment, RiskLevel};
