//! Interaction state machine behind the dropdown widget.
//!
//! Every operation mutates the local state and returns a [`Transition`]
//! listing the side effects the view layer must carry out (callbacks, focus).
//! The machine never touches the DOM, so the whole interaction can be driven
//! and checked without a browser.
//!
//! Open state may be owned by the caller. Operations that depend on it take
//! `external: Option<bool>`, the caller-supplied value if there is one.

use crate::highlight::{next_index, prev_index};
use crate::keys::NavKey;
use crate::open_state::{resolve_open, route_open_change, OpenChange};
use crate::option::find_by_value;
use crate::selection::{apply_selection, SelectionPolicy};
use crate::{filter_options, SelectOption};

/// Side effect requested by a state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Report a selection change to `on_change`.
    Changed(String),
    /// Controlled mode: ask the caller to apply a new open state.
    OpenChangeRequested(bool),
    /// Move focus back to the trigger button.
    FocusTrigger,
    /// Focus the search input once it has been rendered.
    FocusSearch,
    /// Focus the option list once it has been rendered (no search box).
    FocusList,
}

/// Result of one operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub effects: Vec<Effect>,
    /// Whether the triggering key event should have its default suppressed
    pub consumed: bool,
}

impl Transition {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            consumed: true,
        }
    }

    fn with(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            consumed: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DropdownState {
    selected: Option<SelectOption>,
    local_open: bool,
    query: String,
    highlighted: Option<usize>,
    searchable: bool,
    policy: SelectionPolicy,
    /// Last open state seen by `observe_open`
    last_open: bool,
}

impl DropdownState {
    /// Initial state. `value` preselects the matching option; an unknown
    /// value leaves nothing selected.
    pub fn new(
        options: &[SelectOption],
        value: Option<&str>,
        searchable: bool,
        policy: SelectionPolicy,
    ) -> Self {
        let selected = value.and_then(|v| find_by_value(options, v)).cloned();
        Self {
            selected,
            local_open: false,
            query: String::new(),
            highlighted: None,
            searchable,
            policy,
            last_open: false,
        }
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn is_open(&self, external: Option<bool>) -> bool {
        resolve_open(external, self.local_open)
    }

    /// Options visible in the panel. Search is bypassed when not searchable.
    pub fn filtered(&self, options: &[SelectOption]) -> Vec<SelectOption> {
        if self.searchable {
            filter_options(options, &self.query)
        } else {
            options.to_vec()
        }
    }

    /// The single setter for open state. Returns the effect to emit when the
    /// caller owns the state.
    fn request_open(&mut self, external: Option<bool>, next: bool) -> Option<Effect> {
        match route_open_change(external, next) {
            OpenChange::Notify(next) => {
                log::debug!("Requesting controlled open state: {}", next);
                Some(Effect::OpenChangeRequested(next))
            }
            OpenChange::SetLocal(next) => {
                self.local_open = next;
                None
            }
        }
    }

    fn close_and_refocus(&mut self, external: Option<bool>) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self.request_open(external, false).into_iter().collect();
        effects.push(Effect::FocusTrigger);
        effects
    }

    pub fn toggle_open(&mut self, external: Option<bool>) -> Transition {
        let next = !self.is_open(external);
        if next {
            Transition::with(self.request_open(external, true).into_iter().collect())
        } else {
            Transition::with(self.close_and_refocus(external))
        }
    }

    /// Close request coming from the panel (backdrop click).
    pub fn close(&mut self, external: Option<bool>) -> Transition {
        if !self.is_open(external) {
            return Transition::ignored();
        }
        Transition::with(self.request_open(external, false).into_iter().collect())
    }

    pub fn select_option(&mut self, option: &SelectOption, external: Option<bool>) -> Transition {
        let outcome = apply_selection(self.policy, self.selected.as_ref(), option);
        log::debug!("Selection changed: {}", outcome.payload);
        self.selected = outcome.selection;

        let mut effects = vec![Effect::Changed(outcome.payload)];
        effects.extend(self.close_and_refocus(external));
        Transition::with(effects)
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) -> Transition {
        self.query = text.into();
        self.highlighted = None;
        Transition::ignored()
    }

    /// The caller's option list changed, so any highlight may be stale.
    pub fn options_changed(&mut self) -> Transition {
        self.highlighted = None;
        Transition::ignored()
    }

    /// Keyboard handling while the panel is open. `filtered` is the list
    /// currently shown.
    pub fn handle_key(
        &mut self,
        key: NavKey,
        filtered: &[SelectOption],
        external: Option<bool>,
    ) -> Transition {
        if !self.is_open(external) {
            return Transition::ignored();
        }

        if key.is_forward() {
            self.highlighted = next_index(self.highlighted, filtered.len());
            return Transition::consumed(Vec::new());
        }
        if key.is_backward() {
            self.highlighted = prev_index(self.highlighted, filtered.len());
            return Transition::consumed(Vec::new());
        }

        match key {
            NavKey::Enter => match self.highlighted.and_then(|i| filtered.get(i)) {
                Some(option) => {
                    let option = option.clone();
                    Transition::consumed(self.select_option(&option, external).effects)
                }
                None => Transition::consumed(Vec::new()),
            },
            NavKey::Escape => Transition::consumed(self.close_and_refocus(external)),
            _ => Transition::ignored(),
        }
    }

    /// Enter or Space on the focused trigger opens a closed dropdown.
    pub fn handle_trigger_key(&mut self, key: NavKey, external: Option<bool>) -> Transition {
        if self.is_open(external) || !matches!(key, NavKey::Enter | NavKey::Space) {
            return Transition::ignored();
        }
        Transition::consumed(self.request_open(external, true).into_iter().collect())
    }

    /// Feed the resolved open state after every change. Opening resets the
    /// highlight and moves focus into the panel: the search input, or the
    /// list itself when there is no search box.
    pub fn observe_open(&mut self, now: bool) -> Transition {
        let was_open = std::mem::replace(&mut self.last_open, now);
        if !now || was_open {
            return Transition::ignored();
        }
        self.highlighted = None;
        if self.searchable {
            Transition::with(vec![Effect::FocusSearch])
        } else {
            Transition::with(vec![Effect::FocusList])
        }
    }
}
