//! Text filtering of option lists.

use crate::SelectOption;

/// Options whose label contains `query`, ignoring case, in their original order.
/// An empty query keeps every option.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    if query.is_empty() {
        return options.to_vec();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|opt| opt.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
