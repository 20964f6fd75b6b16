//! Export surfaces: the multi-record workbook, the single-record PDF report,
//! and the plain-text summary block used for ad-hoc sharing.
//!
//! Both binary exporters enforce the same precondition up front: every record
//! involved must be completed, scored, and carry the identifying building
//! info. A refused export writes nothing.

pub mod report;
pub mod workbook;

use crate::error::{BcResult, BuildcheckError};
use crate::store::AssessmentRecord;
use chrono::{DateTime, Utc};

pub const PRODUCT_NAME: &str = "BUILDCHECK";

/// Refuse unless every record is exportable. The error lists the offending
/// record ids so the caller can point the user at them.
pub(crate) fn validate_complete(records: &[AssessmentRecord]) -> BcResult<()> {
    let incomplete: Vec<String> = records
        .iter()
        .filter(|r| !r.is_exportable())
        .map(|r| r.id.clone())
        .collect();
    if incomplete.is_empty() {
        Ok(())
    } else {
        Err(BuildcheckError::IncompleteRecords(incomplete))
    }
}

/// Human date format used across exports ("Apr 29, 2025").
pub(crate) fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Plain-text summary of one record, the shape the share/email flow uses.
pub fn summary_text(record: &AssessmentRecord) -> String {
    let info = &record.building_info;
    let input = &record.input;
    let score = record.result.as_ref().map(|r| r.value).unwrap_or(0.0);

    let mut summary = format!("Building Name: {}\n", info.building_name);
    summary.push_str(&format!("Address: {}\n", info.address));
    summary.push_str(&format!("Screener: {}\n", info.screener_name));
    summary.push_str(&format!(
        "Assessment Date: {}\n",
        format_date(info.assessment_date)
    ));
    summary.push_str(&format!(
        "Building Type: {}\n",
        input
            .building_type
            .map(|t| t.to_string())
            .unwrap_or_default()
    ));

    if input.irregularities.severe_vertical {
        summary.push_str("- Severe Vertical Irregularity\n");
    }
    if input.irregularities.moderate_vertical {
        summary.push_str("- Moderate Vertical Irregularity\n");
    }
    if input.irregularities.plan_irregularity {
        summary.push_str("- Plan Irregularity\n");
    }

    summary.push_str(&format!("Year Constructed: {}\n", input.construction_era));
    summary.push_str(&format!("Soil Type: {}\n", input.soil_label()));

    summary.push_str("\n------------------------\n");
    summary.push_str(&format!("FINAL SCORE: {score:.1}\n\n"));
    if score > crate::scorer::PASS_THRESHOLD {
        summary.push_str("RESULT: LEVEL 1 PASSED");
    } else {
        summary.push_str("RESULT: LEVEL 1 FAILED");
    }
    summary
}
