//! Keys the dropdown reacts to, decoded from DOM `KeyboardEvent.key` names.

/// Navigation key pressed while the panel is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    /// Tab, with `shift` reversing direction
    Tab { shift: bool },
    Enter,
    Escape,
    /// Space bar (only meaningful on the trigger)
    Space,
    Other,
}

impl NavKey {
    /// Decode a DOM key name. Unknown keys map to [`NavKey::Other`].
    pub fn from_dom(key: &str, shift: bool) -> Self {
        match key {
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "Tab" => Self::Tab { shift },
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            " " | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }

    /// True for keys that move the highlight forward.
    pub fn is_forward(self) -> bool {
        matches!(self, Self::ArrowDown | Self::Tab { shift: false })
    }

    /// True for keys that move the highlight backward.
    pub fn is_backward(self) -> bool {
        matches!(self, Self::ArrowUp | Self::Tab { shift: true })
    }
}
