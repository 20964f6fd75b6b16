mod engine;
pub mod types;

pub use engine::{score, score_input};
pub use types::{
    Adjustment, AssessmentInput, ConstructionEra, Irregularities, ScoreResult, SoilClass,
    SoilHeightBucket, LEVEL2_RECOMMENDATION, PASS_THRESHOLD,
};
