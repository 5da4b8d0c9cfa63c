pub mod engine;
pub mod registry;
pub mod types;

pub use engine::{find_matches, find_matches_with_floor, score_match, MatchOutcome};
pub use registry::Registry;
pub use types::{
    DevelopmentTier, EntityProfile, EntityType, MatchResult, ProjectType, RegionalProfile,
};
