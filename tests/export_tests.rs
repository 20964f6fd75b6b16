use buildcheck::error::BuildcheckError;
use buildcheck::export::report::{render_report, report_filename};
use buildcheck::export::workbook::{detail_sheet_name, export_filename, export_workbook};
use buildcheck::export::summary_text;
use buildcheck::scorer::{score_input, AssessmentInput, ConstructionEra, SoilClass, SoilHeightBucket};
use buildcheck::store::{AssessmentRecord, BuildingInfo};
use buildcheck::table::BuildingType;
use chrono::{TimeZone, Utc};
use std::collections::HashSet;

fn completed_record(name: &str, building_type: BuildingType) -> AssessmentRecord {
    let input = AssessmentInput {
        building_type: Some(building_type),
        irregularities: Default::default(),
        construction_era: ConstructionEra::PostBenchmark,
        soil_class: SoilClass::D,
        soil_height: SoilHeightBucket::NotApplicable,
    };
    AssessmentRecord {
        id: format!("test-{name}"),
        building_info: BuildingInfo {
            building_name: name.to_string(),
            address: "5 Ridge Road".to_string(),
            screener_name: "M. Aydin".to_string(),
            assessment_date: Utc.with_ymd_and_hms(2025, 4, 29, 9, 0, 0).unwrap(),
        },
        input,
        result: Some(score_input(&input).unwrap()),
        completed: true,
    }
}

#[test]
fn workbook_contains_rollup_and_detail_sheets() {
    let records = vec![
        completed_record("City Library", BuildingType::C2Sw),
        completed_record("Grain Mill", BuildingType::Urm),
    ];
    let bytes = export_workbook(&records).unwrap();
    // xlsx is a zip container.
    assert!(bytes.starts_with(b"PK"));
    assert!(bytes.len() > 1000);
}

#[test]
fn export_refuses_when_any_record_is_not_completed() {
    let mut records = vec![
        completed_record("City Library", BuildingType::C2Sw),
        completed_record("Grain Mill", BuildingType::Urm),
    ];
    records[1].completed = false;

    let err = export_workbook(&records).unwrap_err();
    match err {
        BuildcheckError::IncompleteRecords(ids) => {
            assert_eq!(ids, vec![records[1].id.clone()]);
        }
        other => panic!("expected IncompleteRecords, got {other}"),
    }
}

#[test]
fn export_refuses_when_identity_fields_are_blank() {
    let mut record = completed_record("City Library", BuildingType::C2Sw);
    record.building_info.screener_name = "   ".to_string();
    let err = export_workbook(std::slice::from_ref(&record)).unwrap_err();
    assert!(matches!(err, BuildcheckError::IncompleteRecords(_)));
}

#[test]
fn export_refuses_an_empty_collection() {
    let err = export_workbook(&[]).unwrap_err();
    assert!(matches!(err, BuildcheckError::Validation(_)));
}

#[test]
fn sheet_names_fall_back_truncate_and_deduplicate() {
    let mut used = HashSet::new();

    // Blank name falls back to a short id-derived label.
    assert_eq!(
        detail_sheet_name("", "abcd1234", &mut used),
        "Building abcd"
    );

    // Long names are capped at the 31-char xlsx limit.
    let long = "The Extraordinarily Long Municipal Records Building";
    let name = detail_sheet_name(long, "x", &mut used);
    assert!(name.chars().count() <= 31);
    assert!(long.starts_with(&name));

    // Forbidden sheet characters are replaced.
    let sanitized = detail_sheet_name("North [Annex]: A/B?", "y", &mut used);
    assert!(!sanitized.contains(['[', ']', ':', '*', '?', '/', '\\']));

    // Duplicates (case-insensitive) get a numeric suffix and stay in bounds.
    let first = detail_sheet_name("Grain Mill", "z1", &mut used);
    let second = detail_sheet_name("grain mill", "z2", &mut used);
    assert_eq!(first, "Grain Mill");
    assert_eq!(second, "grain mill (2)");
}

#[test]
fn filenames_embed_product_and_date() {
    let date = Utc.with_ymd_and_hms(2025, 4, 29, 12, 0, 0).unwrap();
    assert_eq!(export_filename(date), "BUILDCHECK_Assessment_20250429.xlsx");
    assert_eq!(
        report_filename("Pier 9 Warehouse", date),
        "BUILDCHECK_Pier_9_Warehouse_20250429.pdf"
    );
}

#[test]
fn report_renders_a_pdf_for_a_completed_record() {
    let record = completed_record("City Library", BuildingType::C2Sw);
    let bytes = render_report(&record).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn report_refuses_an_unscored_record() {
    let mut record = completed_record("City Library", BuildingType::C2Sw);
    record.result = None;
    let err = render_report(&record).unwrap_err();
    assert!(matches!(err, BuildcheckError::IncompleteRecords(_)));
}

#[test]
fn report_refuses_a_draft_record() {
    let mut record = completed_record("City Library", BuildingType::C2Sw);
    record.completed = false;
    let err = render_report(&record).unwrap_err();
    assert!(matches!(err, BuildcheckError::IncompleteRecords(_)));
}

#[test]
fn summary_text_carries_score_and_verdict() {
    let record = completed_record("City Library", BuildingType::C2Sw);
    let text = summary_text(&record);

    assert!(text.contains("Building Name: City Library"));
    assert!(text.contains("Building Type: C2_SW"));
    assert!(text.contains("Soil Type: Soil Type D"));
    // C2 post-benchmark on soil D: 2.0 + 2.1 = 4.1, a pass.
    assert!(text.contains("FINAL SCORE: 4.1"));
    assert!(text.ends_with("RESULT: LEVEL 1 PASSED"));
}

#[test]
fn summary_text_flags_failures() {
    let mut record = completed_record("Grain Mill", BuildingType::Urm);
    let input = AssessmentInput {
        construction_era: ConstructionEra::PreCode,
        ..record.input
    };
    record.input = input;
    record.result = Some(score_input(&input).unwrap());

    let text = summary_text(&record);
    assert!(text.ends_with("RESULT: LEVEL 1 FAILED"));
}
