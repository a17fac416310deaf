pub mod filter;
pub mod highlight;
pub mod keys;
pub mod machine;
pub mod open_state;
pub mod option;
pub mod selection;

pub use filter::filter_options;
pub use highlight::{next_index, prev_index};
pub use keys::NavKey;
pub use machine::{DropdownState, Effect, Transition};
pub use open_state::{resolve_open, route_open_change, OpenChange};
pub use option::{find_by_value, SelectOption};
pub use selection::{apply_selection, SelectionOutcome, SelectionPolicy};
