use buildcheck::scorer::{
    score, AssessmentInput, ConstructionEra, Irregularities, SoilClass, SoilHeightBucket,
    PASS_THRESHOLD,
};
use buildcheck::table::{BuildingType, ScoringTable};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

fn arb_building_type() -> impl Strategy<Value = BuildingType> {
    prop::sample::select(BuildingType::iter().collect::<Vec<_>>())
}

fn arb_era() -> impl Strategy<Value = ConstructionEra> {
    prop::sample::select(ConstructionEra::iter().collect::<Vec<_>>())
}

fn arb_soil() -> impl Strategy<Value = SoilClass> {
    prop::sample::select(SoilClass::iter().collect::<Vec<_>>())
}

fn arb_height() -> impl Strategy<Value = SoilHeightBucket> {
    prop::sample::select(SoilHeightBucket::iter().collect::<Vec<_>>())
}

prop_compose! {
    fn arb_input()(
        building_type in arb_building_type(),
        severe in any::<bool>(),
        moderate in any::<bool>(),
        plan in any::<bool>(),
        era in arb_era(),
        soil in arb_soil(),
        height in arb_height(),
    ) -> AssessmentInput {
        AssessmentInput {
            building_type: Some(building_type),
            irregularities: Irregularities {
                severe_vertical: severe,
                moderate_vertical: moderate,
                plan_irregularity: plan,
            },
            construction_era: era,
            soil_class: soil,
            soil_height: height,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn score_never_drops_below_the_floor(input in arb_input()) {
        let entry = ScoringTable::entry(input.building_type.unwrap());
        let result = score(entry, &input);
        prop_assert!(result.value >= entry.min_score,
            "score {} below floor {}", result.value, entry.min_score);
    }

    #[test]
    fn passed_is_exactly_the_threshold_predicate(input in arb_input()) {
        let entry = ScoringTable::entry(input.building_type.unwrap());
        let result = score(entry, &input);
        prop_assert_eq!(result.passed, result.value > PASS_THRESHOLD);
        prop_assert_eq!(result.passed, result.recommendation.is_empty());
    }

    #[test]
    fn neutral_eras_are_equivalent_to_no_era(mut input in arb_input()) {
        let entry = ScoringTable::entry(input.building_type.unwrap());

        input.construction_era = ConstructionEra::Unknown;
        let unknown = score(entry, &input);
        input.construction_era = ConstructionEra::Transition;
        let transition = score(entry, &input);

        prop_assert_eq!(unknown.value, transition.value);
        prop_assert_eq!(unknown.applied, transition.applied);
    }

    #[test]
    fn basic_score_is_always_part_of_the_rationale(input in arb_input()) {
        let entry = ScoringTable::entry(input.building_type.unwrap());
        let result = score(entry, &input);
        prop_assert_eq!(
            result.applied.get(&buildcheck::scorer::Adjustment::BasicScore).copied(),
            Some(entry.basic_score)
        );
    }

    #[test]
    fn scoring_is_deterministic(input in arb_input()) {
        let entry = ScoringTable::entry(input.building_type.unwrap());
        prop_assert_eq!(score(entry, &input), score(entry, &input));
    }
}
