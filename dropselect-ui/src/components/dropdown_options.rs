//! Options panel: search box and the filtered option list.

use crate::config::{EMPTY_RESULTS_LABEL, SEARCH_PLACEHOLDER};
use dropselect_core::SelectOption;
use leptos::html::{Input, Ul};
use leptos::*;

/// Renders nothing while closed. Owns no state; everything comes from the
/// dropdown controller and user actions are reported back through callbacks.
#[component]
pub fn DropdownOptions(
    #[prop(into)]
    is_open: Signal<bool>,
    is_searchable: bool,
    #[prop(into)]
    search_query: Signal<String>,
    set_search_query: Callback<String>,
    #[prop(into)]
    filtered_options: Signal<Vec<SelectOption>>,
    #[prop(into)]
    selected_option: Signal<Option<SelectOption>>,
    /// Keyboard highlight, independent of the selection
    #[prop(into)]
    highlighted_index: Signal<Option<usize>>,
    on_option_select: Callback<SelectOption>,
    /// Called when the user clicks outside the panel
    on_close: Callback<()>,
    search_ref: NodeRef<Input>,
    list_ref: NodeRef<Ul>,
) -> impl IntoView {
    // Keep the highlighted entry visible
    create_effect(move |_| {
        let Some(index) = highlighted_index.get() else {
            return;
        };
        let Some(list) = list_ref.get() else {
            return;
        };
        if let Some(item) = list.children().item(index as u32) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Nearest);
            item.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    view! {
        <Show when=move || is_open.get()>
            // Backdrop
            <div class="fixed inset-0 z-10" on:click=move |_| on_close.call(()) />
            <div class="absolute z-30 w-full mt-1 bg-white border border-gray-300 rounded-md shadow-lg">
                {is_searchable.then(|| view! {
                    <div class="p-2 border-b border-gray-300">
                        <input
                            type="text"
                            node_ref=search_ref
                            placeholder=SEARCH_PLACEHOLDER
                            aria-label="Search options"
                            class="w-full px-3 py-1 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            prop:value=move || search_query.get()
                            on:input=move |ev| set_search_query.call(event_target_value(&ev))
                        />
                    </div>
                })}
                <ul
                    node_ref=list_ref
                    role="listbox"
                    tabindex="-1"
                    class="max-h-60 overflow-auto focus:outline-none"
                >
                    <For
                        each=move || {
                            filtered_options
                                .get()
                                .into_iter()
                                .enumerate()
                                .collect::<Vec<_>>()
                        }
                        key=|(index, option)| (*index, option.value.clone())
                        children=move |(index, option)| {
                            let value = option.value.clone();
                            let is_selected = Signal::derive(move || {
                                selected_option.with(|sel| sel.as_ref().is_some_and(|s| s.value == value))
                            });
                            let is_highlighted = Signal::derive(move || highlighted_index.get() == Some(index));
                            let label = option.label.clone();
                            view! {
                                <li
                                    role="option"
                                    aria-selected=move || is_selected.get().to_string()
                                    class=move || option_class(is_selected.get(), is_highlighted.get())
                                    on:click=move |_| on_option_select.call(option.clone())
                                >
                                    {label}
                                </li>
                            }
                        }
                    />
                    <Show when=move || filtered_options.with(|options| options.is_empty())>
                        <li class="px-4 py-2 text-gray-400 cursor-default">{EMPTY_RESULTS_LABEL}</li>
                    </Show>
                </ul>
            </div>
        </Show>
    }
}

fn option_class(selected: bool, highlighted: bool) -> String {
    let mut class = String::from("px-4 py-2 cursor-pointer hover:bg-[#9fc3f870]");
    if selected {
        class.push_str(" bg-[#0d6efd] text-white hover:text-gray-800");
    }
    if highlighted {
        class.push_str(" ring-2 ring-inset ring-blue-400");
    }
    class
}
