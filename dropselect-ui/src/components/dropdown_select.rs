//! The public dropdown select widget.

use crate::components::{DropdownIcon, DropdownOptions};
use crate::hooks::{use_dropdown, UseDropdownOptions};
use dropselect_core::{SelectOption, SelectionPolicy};
use leptos::*;

/// Searchable single-select dropdown.
///
/// Open state is self-managed unless `open` is given, in which case the
/// widget only reports requested changes through `on_open_change`.
#[component]
pub fn DropdownSelect(
    /// Placeholder shown while nothing is selected
    #[prop(into)]
    label: String,
    /// Available options, in display order
    #[prop(into)]
    options: MaybeSignal<Vec<SelectOption>>,
    /// Receives the payload of every selection (see [`SelectionPolicy`])
    on_change: Callback<String>,
    /// Show a search box that filters options by label
    #[prop(optional)]
    is_searchable: bool,
    /// Initially selected value
    #[prop(optional, into)]
    value: Option<String>,
    /// Caller-controlled open state
    #[prop(optional, into)]
    open: Option<MaybeSignal<bool>>,
    /// Requested open state changes, used with `open`
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    #[prop(optional)]
    policy: SelectionPolicy,
) -> impl IntoView {
    let dropdown = use_dropdown(UseDropdownOptions {
        options,
        on_change,
        is_searchable,
        value,
        open,
        on_open_change,
        policy,
    });
    let root_ref = dropdown.root_ref;
    let trigger_ref = dropdown.trigger_ref;

    view! {
        <div node_ref=root_ref class="relative w-[300px]">
            <button
                node_ref=trigger_ref
                type="button"
                data-testid="dropdown-trigger"
                aria-haspopup="listbox"
                aria-expanded=move || dropdown.is_open.get().to_string()
                class="relative z-20 w-full px-4 py-2 text-left bg-white border border-gray-300 rounded-md flex items-center justify-between"
                on:click=move |_| dropdown.toggle_open.call(())
                on:keydown=move |ev| dropdown.on_trigger_key.call(ev)
            >
                <span class="text-gray-700">
                    {move || trigger_text(dropdown.selected.get().as_ref(), &label)}
                </span>
                <DropdownIcon is_open=dropdown.is_open />
            </button>
            <DropdownOptions
                is_open=dropdown.is_open
                is_searchable=dropdown.is_searchable
                search_query=dropdown.search_query
                set_search_query=dropdown.set_search_query
                filtered_options=dropdown.filtered_options
                selected_option=dropdown.selected
                highlighted_index=dropdown.highlighted_index
                on_option_select=dropdown.select_option
                on_close=dropdown.close
                search_ref=dropdown.search_ref
                list_ref=dropdown.list_ref
            />
        </div>
    }
}

/// Label of the selection, or the placeholder.
fn trigger_text(selected: Option<&SelectOption>, placeholder: &str) -> String {
    selected
        .map(|option| option.label.clone())
        .unwrap_or_else(|| placeholder.to_string())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn colors() -> Vec<SelectOption> {
        vec![
            SelectOption::new("red", "Red"),
            SelectOption::new("blue", "Blue"),
            SelectOption::new("green", "Green"),
        ]
    }

    /// Fresh container appended to the document body.
    fn container() -> web_sys::HtmlElement {
        let document = document();
        let el = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el.unchecked_into()
    }

    fn trigger(root: &web_sys::HtmlElement) -> web_sys::HtmlElement {
        root.query_selector("[data-testid=dropdown-trigger]")
            .unwrap()
            .unwrap()
            .unchecked_into()
    }

    fn option_count(root: &web_sys::HtmlElement) -> u32 {
        root.query_selector_all("[role=option]").unwrap().length()
    }

    fn is_panel_open(root: &web_sys::HtmlElement) -> bool {
        root.query_selector("[role=listbox]").unwrap().is_some()
    }

    fn press(target: &web_sys::HtmlElement, key: &str) {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event =
            web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn type_into(root: &web_sys::HtmlElement, text: &str) {
        let input: web_sys::HtmlInputElement = root
            .query_selector("input")
            .unwrap()
            .unwrap()
            .unchecked_into();
        input.set_value(text);
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }

    fn active_element() -> web_sys::HtmlElement {
        document().active_element().unwrap().unchecked_into()
    }

    fn click_option(root: &web_sys::HtmlElement, label: &str) {
        let items = root.query_selector_all("[role=option]").unwrap();
        for i in 0..items.length() {
            let item: web_sys::HtmlElement = items.item(i).unwrap().unchecked_into();
            if item.text_content().as_deref() == Some(label) {
                item.click();
                return;
            }
        }
        panic!("option {label} is not rendered");
    }

    async fn settle() {
        TimeoutFuture::new(10).await;
    }

    fn mount_searchable(root: &web_sys::HtmlElement, changes: Rc<RefCell<Vec<String>>>) {
        mount_to(root.clone(), move || {
            view! {
                <DropdownSelect
                    label="Select color"
                    options=colors()
                    is_searchable=true
                    on_change=Callback::new(move |v: String| changes.borrow_mut().push(v))
                />
            }
        });
    }

    #[wasm_bindgen_test]
    async fn shows_placeholder_then_options_on_click() {
        let root = container();
        mount_searchable(&root, Rc::default());
        settle().await;

        assert_eq!(trigger(&root).text_content().unwrap(), "Select color");
        assert!(!is_panel_open(&root));

        trigger(&root).click();
        settle().await;
        assert_eq!(option_count(&root), 3);

        trigger(&root).click();
        settle().await;
        assert!(!is_panel_open(&root));
    }

    #[wasm_bindgen_test]
    async fn keyboard_selects_highlighted_option() {
        let root = container();
        let changes = Rc::new(RefCell::new(Vec::new()));
        mount_searchable(&root, Rc::clone(&changes));
        settle().await;

        trigger(&root).click();
        settle().await;
        let t = trigger(&root);
        press(&t, "ArrowDown");
        press(&t, "ArrowDown");
        press(&t, "Enter");
        settle().await;

        assert_eq!(*changes.borrow(), vec!["blue".to_string()]);
        assert_eq!(trigger(&root).text_content().unwrap(), "Blue");
        assert!(!is_panel_open(&root));
    }

    #[wasm_bindgen_test]
    async fn single_enter_fires_once() {
        let root = container();
        let changes = Rc::new(RefCell::new(Vec::new()));
        mount_searchable(&root, Rc::clone(&changes));
        settle().await;

        trigger(&root).click();
        settle().await;
        let t = trigger(&root);
        press(&t, "ArrowDown");
        press(&t, "Enter");
        settle().await;

        assert_eq!(*changes.borrow(), vec!["red".to_string()]);
        assert!(!is_panel_open(&root));
    }

    #[wasm_bindgen_test]
    async fn search_filters_options() {
        let root = container();
        mount_searchable(&root, Rc::default());
        settle().await;

        trigger(&root).click();
        settle().await;

        type_into(&root, "blue");
        settle().await;
        assert_eq!(option_count(&root), 1);

        type_into(&root, "re");
        settle().await;
        assert_eq!(option_count(&root), 2);
    }

    #[wasm_bindgen_test]
    async fn preset_value_shows_label() {
        let root = container();
        mount_to(root.clone(), move || {
            view! {
                <DropdownSelect
                    label="Select color"
                    options=colors()
                    value="blue"
                    open=false
                    on_change=Callback::new(|_: String| {})
                />
            }
        });
        settle().await;

        assert_eq!(trigger(&root).text_content().unwrap(), "Blue");
        assert!(!is_panel_open(&root));
    }

    #[wasm_bindgen_test]
    async fn controlled_open_is_left_to_caller() {
        let root = container();
        let requests = Rc::new(RefCell::new(Vec::new()));
        let requests_clone = Rc::clone(&requests);
        mount_to(root.clone(), move || {
            view! {
                <DropdownSelect
                    label="Select color"
                    options=colors()
                    open=false
                    on_open_change=Callback::new(move |next: bool| requests_clone.borrow_mut().push(next))
                    on_change=Callback::new(|_: String| {})
                />
            }
        });
        settle().await;

        trigger(&root).click();
        settle().await;

        assert_eq!(*requests.borrow(), vec![true]);
        assert!(!is_panel_open(&root));
    }

    #[wasm_bindgen_test]
    async fn keyboard_reaches_list_without_search_box() {
        let root = container();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let changes_clone = Rc::clone(&changes);
        mount_to(root.clone(), move || {
            view! {
                <DropdownSelect
                    label="Select color"
                    options=colors()
                    open=true
                    on_change=Callback::new(move |v: String| changes_clone.borrow_mut().push(v))
                />
            }
        });
        settle().await;

        // Focus moved into the panel on open, nothing was clicked
        let focused = active_element();
        assert_eq!(focused.get_attribute("role").as_deref(), Some("listbox"));

        press(&focused, "ArrowDown");
        press(&focused, "Enter");
        settle().await;

        assert_eq!(*changes.borrow(), vec!["red".to_string()]);
        assert_eq!(trigger(&root).text_content().unwrap(), "Red");
    }

    #[wasm_bindgen_test]
    async fn escape_closes_and_refocuses_trigger() {
        let root = container();
        let changes = Rc::new(RefCell::new(Vec::new()));
        mount_searchable(&root, Rc::clone(&changes));
        settle().await;

        trigger(&root).click();
        settle().await;
        // Focus is in the search box by now
        press(&active_element(), "Escape");
        settle().await;

        assert!(!is_panel_open(&root));
        assert!(changes.borrow().is_empty());
        assert_eq!(
            active_element().get_attribute("data-testid").as_deref(),
            Some("dropdown-trigger")
        );
    }

    #[wasm_bindgen_test]
    async fn enter_on_trigger_opens_panel() {
        let root = container();
        let changes = Rc::new(RefCell::new(Vec::new()));
        mount_searchable(&root, Rc::clone(&changes));
        settle().await;

        let t = trigger(&root);
        t.focus().unwrap();
        press(&t, "Enter");
        settle().await;
        assert!(is_panel_open(&root));
        assert_eq!(option_count(&root), 3);

        // The same Enter must not have been treated as a selection
        assert!(changes.borrow().is_empty());

        press(&active_element(), "ArrowDown");
        press(&active_element(), "Enter");
        settle().await;
        assert_eq!(*changes.borrow(), vec!["red".to_string()]);
        assert!(!is_panel_open(&root));
    }

    #[wasm_bindgen_test]
    async fn space_on_trigger_opens_panel() {
        let root = container();
        mount_searchable(&root, Rc::default());
        settle().await;

        press(&trigger(&root), " ");
        settle().await;
        assert!(is_panel_open(&root));
    }

    #[wasm_bindgen_test]
    async fn toggle_policy_reselect_clears_selection() {
        let root = container();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let changes_clone = Rc::clone(&changes);
        mount_to(root.clone(), move || {
            view! {
                <DropdownSelect
                    label="Select color"
                    options=colors()
                    policy=SelectionPolicy::Toggle
                    on_change=Callback::new(move |v: String| changes_clone.borrow_mut().push(v))
                />
            }
        });
        settle().await;

        trigger(&root).click();
        settle().await;
        click_option(&root, "Blue");
        settle().await;
        assert_eq!(trigger(&root).text_content().unwrap(), "Blue");

        trigger(&root).click();
        settle().await;
        click_option(&root, "Blue");
        settle().await;

        assert_eq!(
            *changes.borrow(),
            vec!["selected: blue".to_string(), "deselected: blue".to_string()]
        );
        assert_eq!(trigger(&root).text_content().unwrap(), "Select color");
    }
}
