use super::types::{
    Adjustment, AssessmentInput, ConstructionEra, ScoreResult, SoilClass, SoilHeightBucket,
    LEVEL2_RECOMMENDATION, PASS_THRESHOLD,
};
use crate::error::{BcResult, BuildcheckError};
use crate::table::{ScoringTable, ScoringTableEntry};
use std::collections::BTreeMap;

/// Deterministic mapping from a rubric row plus building facts to a score.
///
/// Additive: basic score, then each triggered category whose delta the entry
/// defines. The minimum-score floor is applied once, after every adjustment.
/// No side effects, no hidden state.
pub fn score(entry: &ScoringTableEntry, input: &AssessmentInput) -> ScoreResult {
    let mut total = entry.basic_score;
    let mut applied = BTreeMap::new();
    applied.insert(Adjustment::BasicScore, entry.basic_score);

    let irr = &input.irregularities;
    if irr.severe_vertical {
        apply(
            &mut total,
            &mut applied,
            Adjustment::SevereVertical,
            entry.severe_vertical,
        );
    }
    if irr.moderate_vertical {
        apply(
            &mut total,
            &mut applied,
            Adjustment::ModerateVertical,
            entry.moderate_vertical,
        );
    }
    if irr.plan_irregularity {
        apply(
            &mut total,
            &mut applied,
            Adjustment::PlanIrregularity,
            entry.plan_irregularity,
        );
    }

    // At most one era adjustment ever fires.
    match input.construction_era {
        ConstructionEra::PreCode => {
            apply(&mut total, &mut applied, Adjustment::PreCode, entry.precode);
        }
        ConstructionEra::PostBenchmark => {
            apply(
                &mut total,
                &mut applied,
                Adjustment::PostBenchmark,
                entry.post_benchmark,
            );
        }
        ConstructionEra::Transition | ConstructionEra::Unknown => {}
    }

    // Soil is independent of era. Classes C, D, F, and Unknown carry no
    // modifier; class E without a story bucket contributes nothing.
    match input.soil_class {
        SoilClass::A | SoilClass::B => {
            apply(&mut total, &mut applied, Adjustment::SoilAB, entry.soil_ab);
        }
        SoilClass::E => match input.soil_height {
            SoilHeightBucket::LowRise => {
                apply(
                    &mut total,
                    &mut applied,
                    Adjustment::SoilELowRise,
                    entry.soil_e_low_rise,
                );
            }
            SoilHeightBucket::HighRise => {
                apply(
                    &mut total,
                    &mut applied,
                    Adjustment::SoilEHighRise,
                    entry.soil_e_high_rise,
                );
            }
            SoilHeightBucket::NotApplicable => {}
        },
        SoilClass::C | SoilClass::D | SoilClass::F | SoilClass::Unknown => {}
    }

    let value = total.max(entry.min_score);
    let passed = value > PASS_THRESHOLD;
    ScoreResult {
        value,
        applied,
        passed,
        recommendation: if passed {
            String::new()
        } else {
            LEVEL2_RECOMMENDATION.to_string()
        },
    }
}

/// Convenience entry point that resolves the rubric row from the input's own
/// building type. A missing type is a caller precondition violation; an
/// unrecognized one cannot occur through the closed enum but remains a typed
/// condition at the string seam (`ScoringTable::lookup`).
pub fn score_input(input: &AssessmentInput) -> BcResult<ScoreResult> {
    let building_type = input
        .building_type
        .ok_or_else(|| BuildcheckError::Validation("no building type selected".to_string()))?;
    Ok(score(ScoringTable::entry(building_type), input))
}

fn apply(
    total: &mut f64,
    applied: &mut BTreeMap<Adjustment, f64>,
    category: Adjustment,
    delta: Option<f64>,
) {
    if let Some(d) = delta {
        *total += d;
        applied.insert(category, d);
    }
}
