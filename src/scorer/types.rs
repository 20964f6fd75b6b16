use crate::table::BuildingType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Strict pass threshold: a score of exactly 2.0 fails.
pub const PASS_THRESHOLD: f64 = 2.0;

/// Fixed advisory attached to every failing result.
pub const LEVEL2_RECOMMENDATION: &str =
    "Proceed to Level 2 Assessment and consult a licensed structural engineer for detailed evaluation.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Irregularities {
    pub severe_vertical: bool,
    pub moderate_vertical: bool,
    pub plan_irregularity: bool,
}

impl Irregularities {
    pub fn any(&self) -> bool {
        self.severe_vertical || self.moderate_vertical || self.plan_irregularity
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ConstructionEra {
    #[default]
    Unknown,
    #[strum(to_string = "Before 1972", serialize = "precode")]
    PreCode,
    #[strum(to_string = "1972 - 1992", serialize = "transition")]
    Transition,
    #[strum(to_string = "After 1992", serialize = "postbenchmark")]
    PostBenchmark,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SoilClass {
    #[strum(to_string = "Soil Type A", serialize = "A")]
    A,
    #[strum(to_string = "Soil Type B", serialize = "B")]
    B,
    #[strum(to_string = "Soil Type C", serialize = "C")]
    C,
    #[strum(to_string = "Soil Type D", serialize = "D")]
    D,
    #[strum(to_string = "Soil Type E", serialize = "E")]
    E,
    #[strum(to_string = "Soil Type F", serialize = "F")]
    F,
    #[default]
    Unknown,
}

/// Story-count bucket, only meaningful for [`SoilClass::E`]. `NotApplicable`
/// under class E contributes no soil adjustment at all.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SoilHeightBucket {
    #[strum(to_string = "1-3 stories", serialize = "low")]
    LowRise,
    #[strum(to_string = ">3 stories", serialize = "high")]
    HighRise,
    #[default]
    #[strum(to_string = "N/A", serialize = "na")]
    NotApplicable,
}

/// The user-supplied facts about one building. A blank draft has no building
/// type and all-unknown categoricals; the engine is only invoked once the
/// wizard layer has collected the required fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub building_type: Option<BuildingType>,
    pub irregularities: Irregularities,
    pub construction_era: ConstructionEra,
    pub soil_class: SoilClass,
    pub soil_height: SoilHeightBucket,
}

impl AssessmentInput {
    /// Soil label for reports, with the story-bucket suffix for class E.
    pub fn soil_label(&self) -> String {
        if self.soil_class == SoilClass::E {
            format!("{} ({})", self.soil_class, self.soil_height)
        } else {
            self.soil_class.to_string()
        }
    }
}

/// Category names recorded in the scoring rationale. `Ord` so the applied map
/// lists adjustments in a stable order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum Adjustment {
    BasicScore,
    SevereVertical,
    ModerateVertical,
    PlanIrregularity,
    PreCode,
    PostBenchmark,
    SoilAB,
    SoilELowRise,
    SoilEHighRise,
}

/// The outcome of one scoring run: the floored score, the itemized adjustments
/// that actually fired, and the pass verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub value: f64,
    pub applied: BTreeMap<Adjustment, f64>,
    pub passed: bool,
    pub recommendation: String,
}
