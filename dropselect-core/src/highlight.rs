//! Wrap-around arithmetic for the keyboard highlight.
//!
//! The highlight is `None` when nothing is highlighted, otherwise an index
//! into the filtered option list. An empty list never yields a highlight.

/// Move one entry down, wrapping past the end. Starts at the first entry.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) if i + 1 < len => Some(i + 1),
        _ => Some(0),
    }
}

/// Move one entry up, wrapping below zero. Starts at the last entry.
pub fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) if i > 0 && i < len => Some(i - 1),
        _ => Some(len - 1),
    }
}
