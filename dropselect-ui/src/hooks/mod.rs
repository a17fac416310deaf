mod use_dropdown;

pub use use_dropdown::{use_dropdown, DropdownHandle, UseDropdownOptions};
