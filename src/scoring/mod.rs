pub mod components;
pub mod engine;
pub mod industry;
pub mod tier;
pub mod weights;

pub use components::{compute_component_scores, ComponentScores, COMPONENT_NAMES};
pub use engine::{score_investment, AlgorithmResult};
pub use industry::Industry;
pub use tier::InvestmentTier;
pub use weights::{aggregate, component_weight};
