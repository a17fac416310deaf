//! Open/closed state that is either owned by the caller or kept locally.
//!
//! The caller selects controlled mode by supplying an external value at all;
//! `Some(false)` is just as controlled as `Some(true)`.

/// Where a requested open-state change has to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenChange {
    /// Controlled: tell the caller, leave local state alone.
    Notify(bool),
    /// Uncontrolled: write the local flag.
    SetLocal(bool),
}

/// The open state the widget should render.
pub fn resolve_open(external: Option<bool>, local: bool) -> bool {
    external.unwrap_or(local)
}

/// Route a requested change to exactly one owner.
pub fn route_open_change(external: Option<bool>, next: bool) -> OpenChange {
    if external.is_some() {
        OpenChange::Notify(next)
    } else {
        OpenChange::SetLocal(next)
    }
}
