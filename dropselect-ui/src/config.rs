//! Widget text defaults and the option set used by the demo page.

use dropselect_core::SelectOption;

/// Placeholder for the demo dropdowns.
pub const DEFAULT_PLACEHOLDER: &str = "Select a color";
/// Search box placeholder.
pub const SEARCH_PLACEHOLDER: &str = "Search...";
/// Shown in the panel when the search matches nothing.
pub const EMPTY_RESULTS_LABEL: &str = "No options";

const DEMO_OPTIONS_JSON: &str = r#"[
    { "value": "red", "label": "Red" },
    { "value": "green", "label": "Green" },
    { "value": "blue", "label": "Blue" },
    { "value": "amber", "label": "Amber" },
    { "value": "crimson", "label": "Crimson" },
    { "value": "teal", "label": "Teal" },
    { "value": "violet", "label": "Violet" },
    { "value": "orange", "label": "Orange" }
]"#;

/// Parse an option list from JSON (`[{ "value": .., "label": .. }, ..]`).
pub fn parse_options(json: &str) -> Result<Vec<SelectOption>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Options shown on the demo page. Falls back to an empty list if the
/// embedded JSON does not parse.
pub fn demo_options() -> Vec<SelectOption> {
    match parse_options(DEMO_OPTIONS_JSON) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("Failed to parse demo options: {}", e);
            Vec::new()
        }
    }
}
