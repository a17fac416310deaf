//! The value/label pair shown as one entry of a dropdown.

use serde::{Deserialize, Serialize};

/// A selectable entry. `value` identifies it, `label` is what the user sees.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Find the first option whose value matches exactly.
pub fn find_by_value<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options.iter().find(|opt| opt.value == value)
}
