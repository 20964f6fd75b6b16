use buildcheck::error::BuildcheckError;
use buildcheck::scorer::{score_input, AssessmentInput, ConstructionEra, SoilClass, SoilHeightBucket};
use buildcheck::store::{AssessmentStore, BuildingInfo, RecordPatch};
use buildcheck::table::BuildingType;
use chrono::Utc;

fn sample_info(name: &str) -> BuildingInfo {
    BuildingInfo {
        building_name: name.to_string(),
        address: "12 Fault Line Ave".to_string(),
        screener_name: "R. Okafor".to_string(),
        assessment_date: Utc::now(),
    }
}

fn sample_input() -> AssessmentInput {
    AssessmentInput {
        building_type: Some(BuildingType::W2),
        irregularities: Default::default(),
        construction_era: ConstructionEra::PostBenchmark,
        soil_class: SoilClass::D,
        soil_height: SoilHeightBucket::NotApplicable,
    }
}

#[test]
fn create_then_get_current_returns_the_new_record() {
    let mut store = AssessmentStore::in_memory();
    let id = store.create();

    let current = store.get_current().expect("current record");
    assert_eq!(current.id, id);
    assert!(!current.completed);
    assert!(current.result.is_none());
    assert!(current.building_info.building_name.is_empty());
}

#[test]
fn create_assigns_distinct_ids_and_preserves_insertion_order() {
    let mut store = AssessmentStore::in_memory();
    let a = store.create();
    let b = store.create();
    let c = store.create();

    assert_ne!(a, b);
    assert_ne!(b, c);
    let ids: Vec<_> = store.records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![a, b, c.clone()]);
    // The latest creation is current.
    assert_eq!(store.current_id(), Some(c.as_str()));
}

#[test]
fn update_merges_shallowly_and_leaves_other_records_alone() {
    let mut store = AssessmentStore::in_memory();
    let a = store.create();
    let b = store.create();

    store
        .update(
            &a,
            RecordPatch {
                building_info: Some(sample_info("Harbor Annex")),
                input: Some(sample_input()),
                ..RecordPatch::default()
            },
        )
        .unwrap();

    // Replacing only building_info must not touch the previously set input.
    store
        .update(
            &a,
            RecordPatch {
                building_info: Some(sample_info("Harbor Annex West")),
                ..RecordPatch::default()
            },
        )
        .unwrap();

    let record_a = store.get(&a).unwrap();
    assert_eq!(record_a.building_info.building_name, "Harbor Annex West");
    assert_eq!(record_a.input, sample_input());

    let record_b = store.get(&b).unwrap();
    assert!(record_b.building_info.building_name.is_empty());
    assert_eq!(record_b.input, AssessmentInput::default());
}

#[test]
fn update_unknown_id_reports_not_found() {
    let mut store = AssessmentStore::in_memory();
    store.create();
    let err = store
        .update("missing", RecordPatch::default())
        .unwrap_err();
    assert!(matches!(err, BuildcheckError::RecordNotFound(id) if id == "missing"));
}

#[test]
fn removing_the_only_record_clears_the_selection() {
    let mut store = AssessmentStore::in_memory();
    let id = store.create();

    store.remove(&id).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.current_id(), None);
    assert!(store.get_current().is_none());
}

#[test]
fn removing_the_current_record_selects_the_first_remaining() {
    let mut store = AssessmentStore::in_memory();
    let first = store.create();
    let second = store.create();
    store.select_current(Some(&second)).unwrap();

    store.remove(&second).unwrap();
    assert_eq!(store.current_id(), Some(first.as_str()));
}

#[test]
fn removing_a_non_current_record_keeps_the_selection() {
    let mut store = AssessmentStore::in_memory();
    let first = store.create();
    let second = store.create();
    store.select_current(Some(&second)).unwrap();

    store.remove(&first).unwrap();
    assert_eq!(store.current_id(), Some(second.as_str()));
}

#[test]
fn select_current_validates_eagerly() {
    let mut store = AssessmentStore::in_memory();
    let id = store.create();

    let err = store.select_current(Some("dangling")).unwrap_err();
    assert!(matches!(err, BuildcheckError::RecordNotFound(_)));
    // The failed call must not clobber the existing selection.
    assert_eq!(store.current_id(), Some(id.as_str()));

    store.select_current(None).unwrap();
    assert_eq!(store.current_id(), None);
}

#[test]
fn snapshot_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.json");

    let (id, expected) = {
        let mut store = AssessmentStore::open(&path);
        let id = store.create();
        let result = score_input(&sample_input()).unwrap();
        store
            .update(
                &id,
                RecordPatch {
                    building_info: Some(sample_info("Pier 9 Warehouse")),
                    input: Some(sample_input()),
                    result: Some(result),
                    completed: Some(true),
                },
            )
            .unwrap();
        (id, store.records().to_vec())
    };

    let reopened = AssessmentStore::open(&path);
    assert_eq!(reopened.records(), expected.as_slice());
    assert_eq!(reopened.current_id(), Some(id.as_str()));

    let record = reopened.get(&id).unwrap();
    assert_eq!(
        record.building_info.assessment_date,
        expected[0].building_info.assessment_date
    );
    assert!(record.completed);
    assert!(record.result.is_some());
}

#[test]
fn missing_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssessmentStore::open(dir.path().join("nothing-here.json"));
    assert!(store.is_empty());
    assert_eq!(store.current_id(), None);
}

#[test]
fn corrupt_snapshot_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.json");
    std::fs::write(&path, "{ not json ]").unwrap();

    let store = AssessmentStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn persisted_selection_pointing_nowhere_is_dropped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.json");
    std::fs::write(&path, r#"{"records": [], "currentId": "ghost"}"#).unwrap();

    let store = AssessmentStore::open(&path);
    assert_eq!(store.current_id(), None);
}
