//! Pure view-model helpers behind the calculator panel.

use pazucal_core::{DamageRow, DungeonTable, ReductionInputs, parse_or_zero, survival_rows};

/// Build reduction inputs from the four raw field strings, defaulting each
/// to 0 when unparsable.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn inputs_from_fields(leader: &str, friend: &str, skill: &str, flat: &str) -> ReductionInputs {
    ReductionInputs {
        leader: parse_or_zero(leader),
        friend: parse_or_zero(friend),
        skill: parse_or_zero(skill),
        flat_sources: parse_or_zero(flat).max(0.0) as u32,
    }
}

/// Whether both selects have a value; without one the table stays cleared.
#[must_use]
pub fn has_selection(dungeon: &str, floor: &str) -> bool {
    !dungeon.is_empty() && !floor.is_empty()
}

/// The displayed total-reduction line.
#[must_use]
pub fn reduction_label(inputs: &ReductionInputs) -> String {
    format!("Total reduction: {:.2}%", inputs.reduction_percent())
}

/// Survivability rows for the current selection; empty when the selection
/// is incomplete or misses the table.
#[must_use]
pub fn rows_for(
    table: Option<&DungeonTable>,
    dungeon: &str,
    floor: &str,
    inputs: &ReductionInputs,
) -> Vec<DamageRow> {
    if !has_selection(dungeon, floor) {
        return Vec::new();
    }
    table
        .and_then(|table| table.get(dungeon, floor))
        .map(|spec| survival_rows(&spec.ratios(), inputs.total_reduce()))
        .unwrap_or_default()
}

/// Format one ratio cell; ratios are percentages of max HP.
#[must_use]
pub fn ratio_cell(ratio: f64) -> String {
    if (ratio.fract()).abs() < f64::EPSILON {
        format!("{ratio:.0}%")
    } else {
        format!("{ratio}%")
    }
}

/// Format the post-reduction cell to the displayed two decimals.
#[must_use]
pub fn final_cell(final_percent: f64) -> String {
    format!("{final_percent:.2}%")
}
