//! What happens to the committed selection when an option is picked.

use crate::SelectOption;

/// Policy applied when the user picks an option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Picking always selects. `on_change` receives the plain value.
    #[default]
    Replace,
    /// Picking the current selection clears it. `on_change` receives
    /// `"selected: <value>"` or `"deselected: <value>"`.
    Toggle,
}

/// New selection plus the payload to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub selection: Option<SelectOption>,
    pub payload: String,
}

pub fn apply_selection(
    policy: SelectionPolicy,
    current: Option<&SelectOption>,
    picked: &SelectOption,
) -> SelectionOutcome {
    match policy {
        SelectionPolicy::Replace => SelectionOutcome {
            selection: Some(picked.clone()),
            payload: picked.value.clone(),
        },
        SelectionPolicy::Toggle => {
            if current.is_some_and(|c| c.value == picked.value) {
                SelectionOutcome {
                    selection: None,
                    payload: format!("deselected: {}", picked.value),
                }
            } else {
                SelectionOutcome {
                    selection: Some(picked.clone()),
                    payload: format!("selected: {}", picked.value),
                }
            }
        }
    }
}
