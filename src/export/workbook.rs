//! Workbook export: one roll-up sheet plus one detail sheet per record.

use super::{format_date, validate_complete, PRODUCT_NAME};
use crate::error::{BcResult, BuildcheckError};
use crate::store::AssessmentRecord;
use chrono::{Datelike, Utc};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const SUMMARY_SHEET: &str = "All Buildings Summary";
/// Hard limit of the xlsx format for sheet labels.
const SHEET_NAME_LIMIT: usize = 31;

const SUMMARY_HEADERS: [&str; 13] = [
    "Building Name",
    "Address",
    "Screener",
    "Assessment Date",
    "Building Type",
    "Year Constructed",
    "Soil Type",
    "Severe Vertical Irregularity",
    "Moderate Vertical Irregularity",
    "Plan Irregularity",
    "Final Score",
    "Result",
    "Recommendation",
];

/// Serialize the whole collection into an xlsx workbook. Refused outright,
/// with nothing written, when the collection is empty or any record is
/// incomplete.
pub fn export_workbook(records: &[AssessmentRecord]) -> BcResult<Vec<u8>> {
    if records.is_empty() {
        return Err(BuildcheckError::Validation(
            "no assessments to export".to_string(),
        ));
    }
    validate_complete(records)?;

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    write_summary_sheet(workbook.add_worksheet(), records, &header_format)?;

    let mut used_names = HashSet::new();
    used_names.insert(SUMMARY_SHEET.to_lowercase());
    for record in records {
        let name = detail_sheet_name(
            &record.building_info.building_name,
            &record.id,
            &mut used_names,
        );
        write_detail_sheet(workbook.add_worksheet(), record, &name, &header_format)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Export to `<dir>/BUILDCHECK_Assessment_<yyyymmdd>.xlsx`, returning the path.
pub fn export_workbook_to_file(records: &[AssessmentRecord], dir: &Path) -> BcResult<PathBuf> {
    let bytes = export_workbook(records)?;
    let path = dir.join(export_filename(Utc::now()));
    fs::write(&path, bytes)?;
    info!(path = %path.display(), records = records.len(), "workbook exported");
    Ok(path)
}

pub fn export_filename(now: chrono::DateTime<Utc>) -> String {
    format!("{}_Assessment_{}.xlsx", PRODUCT_NAME, now.format("%Y%m%d"))
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    records: &[AssessmentRecord],
    header_format: &Format,
) -> BcResult<()> {
    sheet.set_name(SUMMARY_SHEET)?;
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        let info = &record.building_info;
        let input = &record.input;
        let result = scored(record)?;

        sheet.write_string(row, 0, &info.building_name)?;
        sheet.write_string(row, 1, &info.address)?;
        sheet.write_string(row, 2, &info.screener_name)?;
        sheet.write_string(row, 3, &format_date(info.assessment_date))?;
        sheet.write_string(
            row,
            4,
            &input
                .building_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
        )?;
        sheet.write_string(row, 5, &input.construction_era.to_string())?;
        sheet.write_string(row, 6, &input.soil_label())?;
        sheet.write_string(row, 7, yes_no(input.irregularities.severe_vertical))?;
        sheet.write_string(row, 8, yes_no(input.irregularities.moderate_vertical))?;
        sheet.write_string(row, 9, yes_no(input.irregularities.plan_irregularity))?;
        sheet.write_string(row, 10, &format!("{:.1}", result.value))?;
        sheet.write_string(row, 11, verdict(result.passed))?;
        sheet.write_string(row, 12, &result.recommendation)?;
    }

    append_footer(sheet, records.len() as u32)?;
    Ok(())
}

fn write_detail_sheet(
    sheet: &mut Worksheet,
    record: &AssessmentRecord,
    name: &str,
    header_format: &Format,
) -> BcResult<()> {
    sheet.set_name(name)?;
    let info = &record.building_info;
    let input = &record.input;
    let result = scored(record)?;

    let rows: Vec<(&str, String, bool)> = vec![
        ("Building Information", String::new(), true),
        ("Building Name", info.building_name.clone(), false),
        ("Address", info.address.clone(), false),
        ("Screener", info.screener_name.clone(), false),
        ("Assessment Date", format_date(info.assessment_date), false),
        ("", String::new(), false),
        ("Building Details", String::new(), true),
        (
            "Building Type",
            input
                .building_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
            false,
        ),
        ("Year Constructed", input.construction_era.to_string(), false),
        ("Soil Type", input.soil_label(), false),
        ("", String::new(), false),
        ("Irregularities", String::new(), true),
        (
            "Severe Vertical",
            yes_no(input.irregularities.severe_vertical).to_string(),
            false,
        ),
        (
            "Moderate Vertical",
            yes_no(input.irregularities.moderate_vertical).to_string(),
            false,
        ),
        (
            "Plan Irregularity",
            yes_no(input.irregularities.plan_irregularity).to_string(),
            false,
        ),
        ("", String::new(), false),
        ("Assessment Result", String::new(), true),
        ("Final Score", format!("{:.1}", result.value), false),
        ("Result", verdict(result.passed).to_string(), false),
        ("Recommendation", result.recommendation.clone(), false),
    ];

    for (row, (label, value, is_section)) in rows.iter().enumerate() {
        let row = row as u32;
        if *is_section {
            sheet.write_string_with_format(row, 0, *label, header_format)?;
        } else {
            sheet.write_string(row, 0, *label)?;
        }
        sheet.write_string(row, 1, value)?;
    }

    append_footer(sheet, rows.len() as u32 - 1)?;
    Ok(())
}

/// Attribution line two rows below the last data row. Writing the cell also
/// extends the sheet's addressable range to include it.
fn append_footer(sheet: &mut Worksheet, last_data_row: u32) -> BcResult<()> {
    let now = Utc::now();
    let text = format!(
        "\u{a9} {} {} - Generated on {}",
        now.year(),
        PRODUCT_NAME,
        format_date(now)
    );
    sheet.write_string(last_data_row + 2, 0, &text)?;
    Ok(())
}

/// Sheet label for one record: the building name, falling back to a short
/// id-derived label, sanitized for xlsx, capped at 31 chars, and made unique
/// within the workbook.
pub fn detail_sheet_name(building_name: &str, id: &str, used: &mut HashSet<String>) -> String {
    let fallback = format!("Building {}", id.get(..4).unwrap_or(id));
    let base = if building_name.trim().is_empty() {
        fallback.clone()
    } else {
        let sanitized: String = building_name
            .chars()
            .map(|c| match c {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
                other => other,
            })
            .collect();
        let sanitized = sanitized.trim_matches('\'').trim().to_string();
        if sanitized.is_empty() {
            fallback.clone()
        } else {
            sanitized
        }
    };
    let base = truncate_chars(&base, SHEET_NAME_LIMIT);

    let mut candidate = base.clone();
    let mut n = 2;
    while !used.insert(candidate.to_lowercase()) {
        let suffix = format!(" ({n})");
        let head = truncate_chars(&base, SHEET_NAME_LIMIT - suffix.chars().count());
        candidate = format!("{head}{suffix}");
        n += 1;
    }
    candidate
}

fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect::<String>().trim().to_string()
}

fn scored(record: &AssessmentRecord) -> BcResult<&crate::scorer::ScoreResult> {
    record
        .result
        .as_ref()
        .ok_or_else(|| BuildcheckError::IncompleteRecords(vec![record.id.clone()]))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASSED"
    } else {
        "FAILED"
    }
}
