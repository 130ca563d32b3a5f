mod logic;
#[cfg(test)]
mod tests;

use pazucal_core::DungeonTable;
use yew::html::TargetCast;
use yew::prelude::*;

use logic::{final_cell, has_selection, inputs_from_fields, ratio_cell, reduction_label, rows_for};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `None` until the table loads; `None` also covers a failed load, in
    /// which case both selects stay disabled.
    #[prop_or_default]
    pub table: Option<DungeonTable>,
}

fn select_value(e: &Event) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlSelectElement>()
        .map(|sel| sel.value())
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}

#[function_component(CalculatorPanel)]
pub fn calculator_panel(p: &Props) -> Html {
    let dungeon = use_state(String::new);
    let floor = use_state(String::new);
    let leader = use_state(String::new);
    let friend = use_state(String::new);
    let skill = use_state(String::new);
    let flat = use_state(String::new);

    let on_dungeon_change = {
        let dungeon = dungeon.clone();
        let floor = floor.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                dungeon.set(value);
                // A new dungeon invalidates the old floor choice.
                floor.set(String::new());
            }
        })
    };
    let on_floor_change = {
        let floor = floor.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                floor.set(value);
            }
        })
    };
    let field_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                handle.set(value);
            }
        })
    };

    let inputs = inputs_from_fields(&leader, &friend, &skill, &flat);
    let rows = rows_for(p.table.as_ref(), &dungeon, &floor, &inputs);
    let total_line = if has_selection(&dungeon, &floor) {
        html! { <p id="total-reduction" class="total-line">{ reduction_label(&inputs) }</p> }
    } else {
        html! { <p id="total-reduction" class="total-line"></p> }
    };

    let dungeon_names: Vec<String> = p
        .table
        .as_ref()
        .map(|table| table.dungeon_names().into_iter().map(str::to_owned).collect())
        .unwrap_or_default();
    let floor_names: Vec<String> = p
        .table
        .as_ref()
        .map(|table| {
            table
                .floor_names(&dungeon)
                .into_iter()
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    html! {
        <section class="panel damage-panel" aria-label="Damage check">
            <div class="select-row">
                <label for="dungeon-select">{ "Dungeon" }</label>
                <select
                    id="dungeon-select"
                    disabled={dungeon_names.is_empty()}
                    onchange={on_dungeon_change}
                >
                    <option value="" selected={dungeon.is_empty()}>{ "Select a dungeon" }</option>
                    { for dungeon_names.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == *dungeon}>
                            { name.clone() }
                        </option>
                    })}
                </select>
                <label for="floor-select">{ "Floor" }</label>
                <select
                    id="floor-select"
                    disabled={floor_names.is_empty()}
                    onchange={on_floor_change}
                >
                    <option value="" selected={floor.is_empty()}>{ "Select a floor" }</option>
                    { for floor_names.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == *floor}>
                            { name.clone() }
                        </option>
                    })}
                </select>
            </div>
            <div class="input-grid">
                <label for="input-leader">{ "Leader reduction (0-1)" }</label>
                <input
                    id="input-leader"
                    type="number"
                    min="0"
                    max="1"
                    step="0.01"
                    value={(*leader).clone()}
                    oninput={field_input(&leader)}
                />
                <label for="input-friend">{ "Friend reduction (0-1)" }</label>
                <input
                    id="input-friend"
                    type="number"
                    min="0"
                    max="1"
                    step="0.01"
                    value={(*friend).clone()}
                    oninput={field_input(&friend)}
                />
                <label for="input-skill">{ "Skill reduction (0-1)" }</label>
                <input
                    id="input-skill"
                    type="number"
                    min="0"
                    max="1"
                    step="0.01"
                    value={(*skill).clone()}
                    oninput={field_input(&skill)}
                />
                <label for="input-flat">{ "Flat 5% sources" }</label>
                <input
                    id="input-flat"
                    type="number"
                    min="0"
                    step="1"
                    value={(*flat).clone()}
                    oninput={field_input(&flat)}
                />
            </div>
            { total_line }
            <table id="results-table">
                <thead>
                    <tr>
                        <th>{ "Attack" }</th>
                        <th>{ "After reduction" }</th>
                        <th>{ "Verdict" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| {
                        let verdict_class = if row.survivable {
                            "can-withstand"
                        } else {
                            "cannot-withstand"
                        };
                        let verdict = if row.survivable { "Survivable" } else { "Lethal" };
                        html! {
                            <tr>
                                <td>{ ratio_cell(row.ratio) }</td>
                                <td>{ final_cell(row.final_percent) }</td>
                                <td class={verdict_class}>{ verdict }</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </section>
    }
}
