//! Single-record PDF report: one A4 portrait page laying out the summary
//! sections, with an attribution footer. Render failures surface as the
//! recoverable `Report` condition, never a panic.

use super::{format_date, validate_complete, PRODUCT_NAME};
use crate::error::{BcResult, BuildcheckError};
use crate::store::AssessmentRecord;
use chrono::{Datelike, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 25.0;
const LINE_STEP_MM: f32 = 6.5;

pub fn render_report(record: &AssessmentRecord) -> BcResult<Vec<u8>> {
    validate_complete(std::slice::from_ref(record))?;
    let result = record
        .result
        .as_ref()
        .ok_or_else(|| BuildcheckError::IncompleteRecords(vec![record.id.clone()]))?;

    let (doc, page, layer) = PdfDocument::new(
        format!("{PRODUCT_NAME} Assessment Report"),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| BuildcheckError::Report(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| BuildcheckError::Report(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut page = ReportPage {
        layer,
        regular,
        bold,
        y: PAGE_HEIGHT_MM - 30.0,
    };

    let info = &record.building_info;
    let input = &record.input;

    page.centered_title(&format!("{PRODUCT_NAME} Assessment Report"));
    page.gap();

    page.section("Building Information");
    page.pair("Building Name", &info.building_name);
    page.pair("Address", &info.address);
    page.pair("Screener", &info.screener_name);
    page.pair("Assessment Date", &format_date(info.assessment_date));
    page.gap();

    page.section("Building Details");
    page.pair(
        "Building Type",
        &input
            .building_type
            .map(|t| t.to_string())
            .unwrap_or_default(),
    );
    page.pair("Year Constructed", &input.construction_era.to_string());
    page.pair("Soil Type", &input.soil_label());
    page.gap();

    page.section("Irregularities");
    page.pair(
        "Severe Vertical",
        if input.irregularities.severe_vertical { "Yes" } else { "No" },
    );
    page.pair(
        "Moderate Vertical",
        if input.irregularities.moderate_vertical { "Yes" } else { "No" },
    );
    page.pair(
        "Plan Irregularity",
        if input.irregularities.plan_irregularity { "Yes" } else { "No" },
    );
    page.gap();

    page.section("Assessment Result");
    page.pair("Final Score", &format!("{:.1}", result.value));
    page.pair(
        "Result",
        if result.passed {
            "LEVEL 1 PASSED"
        } else {
            "LEVEL 1 FAILED"
        },
    );
    if !result.passed && !result.recommendation.is_empty() {
        page.pair("Recommendation", "");
        for line in wrap(&result.recommendation, 80) {
            page.indented(&line);
        }
    }

    page.footer(&format!(
        "(c) {} {}. KNDA/MJGF/SMBF - Generated on {}",
        Utc::now().year(),
        PRODUCT_NAME,
        format_date(Utc::now())
    ));

    doc.save_to_bytes()
        .map_err(|e| BuildcheckError::Report(e.to_string()))
}

/// Render to `<dir>/BUILDCHECK_<name>_<yyyymmdd>.pdf`, returning the path.
pub fn render_report_to_file(record: &AssessmentRecord, dir: &Path) -> BcResult<PathBuf> {
    let bytes = render_report(record)?;
    let path = dir.join(report_filename(
        &record.building_info.building_name,
        Utc::now(),
    ));
    fs::write(&path, bytes)?;
    info!(path = %path.display(), "report exported");
    Ok(path)
}

pub fn report_filename(building_name: &str, now: chrono::DateTime<Utc>) -> String {
    let name = building_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}_{}_{}.pdf", PRODUCT_NAME, name, now.format("%Y%m%d"))
}

struct ReportPage {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl ReportPage {
    fn centered_title(&mut self, text: &str) {
        // Builtin fonts expose no metrics; approximate centering from an
        // average glyph width at this size.
        let approx_width = text.chars().count() as f32 * 3.3;
        let x = ((PAGE_WIDTH_MM - approx_width) / 2.0).max(MARGIN_MM);
        self.layer
            .use_text(text, 16.0, Mm(x), Mm(self.y), &self.bold);
        self.y -= LINE_STEP_MM * 1.5;
    }

    fn section(&mut self, title: &str) {
        self.layer
            .use_text(title, 12.0, Mm(MARGIN_MM), Mm(self.y), &self.bold);
        self.y -= LINE_STEP_MM;
    }

    fn pair(&mut self, label: &str, value: &str) {
        self.layer.use_text(
            format!("{label}:"),
            10.0,
            Mm(MARGIN_MM + 4.0),
            Mm(self.y),
            &self.bold,
        );
        self.layer
            .use_text(value, 10.0, Mm(MARGIN_MM + 50.0), Mm(self.y), &self.regular);
        self.y -= LINE_STEP_MM;
    }

    fn indented(&mut self, text: &str) {
        self.layer
            .use_text(text, 10.0, Mm(MARGIN_MM + 8.0), Mm(self.y), &self.regular);
        self.y -= LINE_STEP_MM;
    }

    fn gap(&mut self) {
        self.y -= LINE_STEP_MM / 2.0;
    }

    fn footer(&mut self, text: &str) {
        let approx_width = text.chars().count() as f32 * 1.7;
        let x = ((PAGE_WIDTH_MM - approx_width) / 2.0).max(MARGIN_MM);
        self.layer.use_text(text, 8.0, Mm(x), Mm(10.0), &self.regular);
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + word.chars().count() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
