//! Controller hook for the dropdown widget.
//! Keeps a `DropdownState` in a signal, derives what the view needs from it,
//! and carries out the effects each transition asks for (callbacks, focus).

use dropselect_core::{DropdownState, Effect, NavKey, SelectOption, SelectionPolicy, Transition};
use leptos::html::{Button, Div, Input, Ul};
use leptos::*;
use leptos_use::{use_event_listener, use_timeout_fn};

/// Inputs of [`use_dropdown`].
pub struct UseDropdownOptions {
    pub options: MaybeSignal<Vec<SelectOption>>,
    pub on_change: Callback<String>,
    pub is_searchable: bool,
    /// Preselected value, matched against `options` once at mount
    pub value: Option<String>,
    /// Caller-owned open state. Its presence alone switches to controlled mode.
    pub open: Option<MaybeSignal<bool>>,
    pub on_open_change: Option<Callback<bool>>,
    pub policy: SelectionPolicy,
}

/// Reactive state and handlers returned by [`use_dropdown`].
#[derive(Clone, Copy)]
pub struct DropdownHandle {
    pub selected: Memo<Option<SelectOption>>,
    pub is_open: Memo<bool>,
    pub search_query: Memo<String>,
    pub filtered_options: Memo<Vec<SelectOption>>,
    pub highlighted_index: Memo<Option<usize>>,
    pub is_searchable: bool,
    pub root_ref: NodeRef<Div>,
    pub trigger_ref: NodeRef<Button>,
    pub search_ref: NodeRef<Input>,
    /// Option list, focusable so keys keep reaching the widget without a search box
    pub list_ref: NodeRef<Ul>,
    pub toggle_open: Callback<()>,
    pub select_option: Callback<SelectOption>,
    pub set_search_query: Callback<String>,
    pub close: Callback<()>,
    pub on_trigger_key: Callback<ev::KeyboardEvent>,
}

/// Run one state machine operation and carry out its effects.
/// Returns whether the triggering key event was consumed.
fn dispatch(
    machine: RwSignal<DropdownState>,
    run_effects: Callback<Transition>,
    operation: impl FnOnce(&mut DropdownState) -> Transition,
) -> bool {
    let transition = machine.try_update(operation).unwrap_or_default();
    let consumed = transition.consumed;
    run_effects.call(transition);
    consumed
}

pub fn use_dropdown(props: UseDropdownOptions) -> DropdownHandle {
    let UseDropdownOptions {
        options,
        on_change,
        is_searchable,
        value,
        open,
        on_open_change,
        policy,
    } = props;

    let options = Signal::derive(move || options.get());
    let external_open = open.map(|open| Signal::derive(move || open.get()));
    // Caller-owned open state for event handlers (never tracked)
    let external_now = move || external_open.map(|open| open.get_untracked());

    let machine = create_rw_signal(DropdownState::new(
        &options.get_untracked(),
        value.as_deref(),
        is_searchable,
        policy,
    ));

    let root_ref = create_node_ref::<Div>();
    let trigger_ref = create_node_ref::<Button>();
    let search_ref = create_node_ref::<Input>();
    let list_ref = create_node_ref::<Ul>();

    // ========== Derived state ==========
    let selected = create_memo(move |_| machine.with(|m| m.selected().cloned()));
    let search_query = create_memo(move |_| machine.with(|m| m.query().to_string()));
    let highlighted_index = create_memo(move |_| machine.with(|m| m.highlighted()));
    let is_open = create_memo(move |_| {
        let external = external_open.map(|open| open.get());
        machine.with(|m| m.is_open(external))
    });
    let filtered_options = create_memo(move |_| {
        let all = options.get();
        search_query.track();
        machine.with_untracked(|m| m.filtered(&all))
    });

    // ========== Deferred panel focus ==========
    // The panel only exists once it has rendered, so focus after a zero delay.
    let focus_panel = use_timeout_fn(
        move |_: ()| {
            let result = match (search_ref.get_untracked(), list_ref.get_untracked()) {
                (Some(input), _) => input.focus(),
                (None, Some(list)) => list.focus(),
                (None, None) => return,
            };
            if let Err(e) = result {
                log::warn!("Failed to focus dropdown panel: {:?}", e);
            }
        },
        0.0,
    );
    let start_focus_panel = focus_panel.start.clone();
    let stop_focus_panel = focus_panel.stop.clone();

    // ========== Effect execution ==========
    let run_effects = Callback::new(move |transition: Transition| {
        for effect in transition.effects {
            match effect {
                Effect::Changed(payload) => on_change.call(payload),
                Effect::OpenChangeRequested(next) => match on_open_change {
                    Some(cb) => cb.call(next),
                    None => log::warn!(
                        "Controlled dropdown has no on_open_change handler, dropping open={}",
                        next
                    ),
                },
                Effect::FocusTrigger => {
                    if let Some(button) = trigger_ref.get_untracked() {
                        if let Err(e) = button.focus() {
                            log::warn!("Failed to focus dropdown trigger: {:?}", e);
                        }
                    }
                }
                Effect::FocusSearch | Effect::FocusList => start_focus_panel(()),
            }
        }
    });

    // ========== Open state observation and key listener ==========
    create_effect(move |_| {
        let open = is_open.get();
        let transition = machine
            .try_update(|m| m.observe_open(open))
            .unwrap_or_default();

        if open {
            // Registered on the widget root, so only keys from inside this instance count.
            // Dropped together with this effect run when the panel closes.
            let _ = use_event_listener(root_ref, ev::keydown, move |ev| {
                let key = NavKey::from_dom(&ev.key(), ev.shift_key());
                let filtered = filtered_options.get_untracked();
                let external = external_now();
                if dispatch(machine, run_effects, |m| m.handle_key(key, &filtered, external)) {
                    ev.prevent_default();
                }
            });
        } else {
            stop_focus_panel();
        }

        run_effects.call(transition);
    });

    // ========== Caller replaced the option list ==========
    create_effect(move |prev: Option<()>| {
        options.track();
        if prev.is_some() {
            dispatch(machine, run_effects, |m| m.options_changed());
        }
    });

    // ========== Handlers ==========
    let toggle_open = Callback::new(move |_: ()| {
        let external = external_now();
        dispatch(machine, run_effects, |m| m.toggle_open(external));
    });

    let close = Callback::new(move |_: ()| {
        let external = external_now();
        dispatch(machine, run_effects, |m| m.close(external));
    });

    let select_option = Callback::new(move |option: SelectOption| {
        let external = external_now();
        dispatch(machine, run_effects, |m| m.select_option(&option, external));
    });

    let set_search_query = Callback::new(move |text: String| {
        dispatch(machine, run_effects, |m| m.set_search_query(text));
    });

    let on_trigger_key = Callback::new(move |ev: ev::KeyboardEvent| {
        // Already handled by the open panel's listener on the way up
        if ev.default_prevented() {
            return;
        }
        let key = NavKey::from_dom(&ev.key(), ev.shift_key());
        let external = external_now();
        // Suppresses the click the browser would synthesize for Enter/Space
        if dispatch(machine, run_effects, |m| m.handle_trigger_key(key, external)) {
            ev.prevent_default();
        }
    });

    DropdownHandle {
        selected,
        is_open,
        search_query,
        filtered_options,
        highlighted_index,
        is_searchable,
        root_ref,
        trigger_ref,
        search_ref,
        list_ref,
        toggle_open,
        select_option,
        set_search_query,
        close,
        on_trigger_key,
    }
}
