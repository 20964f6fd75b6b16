use buildcheck::scorer::ScoreResult;
use buildcheck::store::AssessmentRecord;
use buildcheck::table::BuildingType;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

pub fn print_assessment_table(records: &[AssessmentRecord], current_id: Option<&str>) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(""),
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Building").add_attribute(Attribute::Bold),
        Cell::new("Type"),
        Cell::new("Soil"),
        Cell::new("Score").set_alignment(CellAlignment::Right),
        Cell::new("Status"),
    ]);

    for record in records {
        let marker = if current_id == Some(record.id.as_str()) {
            "*"
        } else {
            ""
        };
        let name = if record.building_info.building_name.is_empty() {
            "(unnamed)".to_string()
        } else {
            record.building_info.building_name.clone()
        };
        let type_code = record
            .input
            .building_type
            .map(|t| t.to_string())
            .unwrap_or_default();

        let (score_cell, status_cell) = match &record.result {
            Some(result) => (
                Cell::new(format!("{:.1}", result.value)).set_alignment(CellAlignment::Right),
                if result.passed {
                    Cell::new("PASSED").fg(Color::Green)
                } else {
                    Cell::new("FAILED").fg(Color::Red)
                },
            ),
            None => (Cell::new("-").set_alignment(CellAlignment::Right), Cell::new("draft")),
        };

        table.add_row(vec![
            Cell::new(marker),
            Cell::new(&record.id),
            Cell::new(name),
            Cell::new(type_code),
            Cell::new(record.input.soil_label()),
            score_cell,
            status_cell,
        ]);
    }
    println!("{table}");
}

pub fn print_score_breakdown(record: &AssessmentRecord, result: &ScoreResult) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Adjustment").add_attribute(Attribute::Bold),
        Cell::new("Delta").add_attribute(Attribute::Bold),
    ]);

    let mut raw_total = 0.0;
    for (category, delta) in &result.applied {
        raw_total += delta;
        table.add_row(vec![
            Cell::new(category.to_string()),
            Cell::new(format!("{delta:+.1}")).set_alignment(CellAlignment::Right),
        ]);
    }
    if result.value > raw_total {
        table.add_row(vec![
            Cell::new("Minimum Score Floor"),
            Cell::new(format!("={:.1}", result.value)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Final Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", result.value))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(if result.passed { Color::Green } else { Color::Red }),
    ]);

    println!(
        "\nAssessment: {}",
        if record.building_info.building_name.is_empty() {
            record.id.as_str()
        } else {
            record.building_info.building_name.as_str()
        }
    );
    println!("{table}");
    if result.passed {
        println!("LEVEL 1 PASSED (passing score: > 2.0)");
    } else {
        println!("LEVEL 1 FAILED (passing score: > 2.0)");
        println!("Recommendation: {}", result.recommendation);
    }
}

pub fn print_building_types() {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Code").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);
    for building_type in BuildingType::iter() {
        table.add_row(vec![
            Cell::new(building_type.to_string()),
            Cell::new(building_type.description()),
        ]);
    }
    println!("{table}");
}
