pub mod dropdown_icon;
pub mod dropdown_options;
pub mod dropdown_select;

pub use dropdown_icon::DropdownIcon;
pub use dropdown_options::DropdownOptions;
pub use dropdown_select::DropdownSelect;
