//! Text and JSON output for the CLI.

use std::fmt::Write as _;

use cloudpick_core::{SelectOption, SelectionState};

const NEAREST_TAG: &str = " * Nearest";

/// Renders a picker's entries, skipping the placeholder sentinel.
pub(crate) fn options(options: &[SelectOption], json: bool) -> anyhow::Result<String> {
    let choices: Vec<&SelectOption> = options.iter().filter(|o| !o.is_sentinel()).collect();

    if json {
        return Ok(serde_json::to_string_pretty(&choices)?);
    }

    if choices.is_empty() {
        return Ok("no options available".to_owned());
    }

    let width = choices.iter().map(|o| o.value.len()).max().unwrap_or(0);
    let lines: Vec<String> = choices
        .iter()
        .map(|o| format!("{:<width$}  {}", o.value, o.display_name))
        .collect();
    Ok(lines.join("\n"))
}

/// Renders the filtered cities nearest first.
///
/// The first entry is tagged as nearest when there is more than one, and the
/// selected city (if any) is marked with `>`.
pub(crate) fn cities(state: &SelectionState, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&state.filtered)?);
    }

    if state.filtered.is_empty() {
        return Ok("no regions match the current selection".to_owned());
    }

    let tag_first = state.nearest().is_some();
    let mut out = String::from("Select city (listed from nearest to farthest)");
    for (index, record) in state.filtered.iter().enumerate() {
        let marker = if record.description == state.selected_city {
            '>'
        } else {
            ' '
        };
        write!(out, "\n{marker} {}", record.description)?;
        if let Some(km) = record.distance {
            write!(out, " ({km:.0} km)")?;
        }
        if tag_first && index == 0 {
            out.push_str(NEAREST_TAG);
        }
    }
    Ok(out)
}
