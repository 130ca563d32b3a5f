use super::*;
use futures::executor::block_on;
use yew::LocalServerRenderer;

use super::logic::{
    final_cell, has_selection, inputs_from_fields, ratio_cell, reduction_label, rows_for,
};

fn sample_table() -> DungeonTable {
    serde_json::from_str(
        r#"{
            "Endless Corridors": {
                "Final Floor": "50%,150%",
                "Mid Floor": [75, 120.5]
            }
        }"#,
    )
    .expect("sample table parses")
}

#[test]
fn fields_default_to_zero_when_unparsable() {
    let inputs = inputs_from_fields("", "junk", "0.5", "-2");
    assert!((inputs.leader - 0.0).abs() < f64::EPSILON);
    assert!((inputs.friend - 0.0).abs() < f64::EPSILON);
    assert!((inputs.skill - 0.5).abs() < f64::EPSILON);
    assert_eq!(inputs.flat_sources, 0);

    let inputs = inputs_from_fields("0.25", "0.25", "0", "3");
    assert_eq!(inputs.flat_sources, 3);
}

#[test]
fn incomplete_selection_clears_the_table() {
    let table = sample_table();
    let inputs = inputs_from_fields("0", "0", "0", "0");
    assert!(rows_for(Some(&table), "", "", &inputs).is_empty());
    assert!(rows_for(Some(&table), "Endless Corridors", "", &inputs).is_empty());
    assert!(!has_selection("Endless Corridors", ""));
}

#[test]
fn unknown_selection_misses_without_error() {
    let table = sample_table();
    let inputs = inputs_from_fields("0", "0", "0", "0");
    assert!(rows_for(Some(&table), "Nowhere", "Final Floor", &inputs).is_empty());
    assert!(rows_for(None, "Endless Corridors", "Final Floor", &inputs).is_empty());
}

#[test]
fn selection_produces_reduced_rows() {
    let table = sample_table();
    // 50% + 50% leader/friend halve twice: factor 0.25... use skill 0.5 only.
    let inputs = inputs_from_fields("0", "0", "0.5", "0");
    let rows = rows_for(Some(&table), "Endless Corridors", "Final Floor", &inputs);
    assert_eq!(rows.len(), 2);
    assert!((rows[0].final_percent - 25.0).abs() < f64::EPSILON);
    assert!((rows[1].final_percent - 75.0).abs() < f64::EPSILON);
    assert!(rows.iter().all(|row| row.survivable));
}

#[test]
fn labels_format_to_two_decimals() {
    let inputs = inputs_from_fields("0.5", "0.5", "0", "0");
    assert_eq!(reduction_label(&inputs), "Total reduction: 75.00%");
    assert_eq!(final_cell(75.0), "75.00%");
    assert_eq!(ratio_cell(150.0), "150%");
    assert_eq!(ratio_cell(120.5), "120.5%");
}

#[test]
fn panel_renders_selects_and_inputs() {
    let props = Props {
        table: Some(sample_table()),
    };
    let html = block_on(LocalServerRenderer::<CalculatorPanel>::with_props(props).render());
    assert!(html.contains("dungeon-select"));
    assert!(html.contains("Endless Corridors"));
    assert!(html.contains("floor-select"));
    assert!(html.contains("input-leader"));
    assert!(html.contains("results-table"));
    // No selection yet: no verdict rows.
    assert!(!html.contains("can-withstand"));
}

#[test]
fn panel_without_data_disables_the_selects() {
    let props = Props { table: None };
    let html = block_on(LocalServerRenderer::<CalculatorPanel>::with_props(props).render());
    assert!(html.contains("disabled"));
}
