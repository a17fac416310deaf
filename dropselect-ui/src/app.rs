use crate::components::DropdownSelect;
use crate::config::{demo_options, DEFAULT_PLACEHOLDER};
use dropselect_core::SelectionPolicy;
use leptos::*;

/// Demo page with one dropdown per supported mode.
#[component]
pub fn App() -> impl IntoView {
    let options = demo_options();
    let (last_change, set_last_change) = create_signal(String::new());
    let (controlled_open, set_controlled_open) = create_signal(false);

    let report = Callback::new(move |payload: String| {
        log::info!("Dropdown changed: {}", payload);
        set_last_change.set(payload);
    });

    view! {
        <main class="min-h-screen p-8 sm:p-20 flex flex-col items-center gap-10 bg-gray-50">
            <h1 class="text-2xl font-semibold">"Dropdown select"</h1>

            <section class="flex flex-col gap-2">
                <h2 class="text-sm text-gray-500">"Searchable"</h2>
                <DropdownSelect
                    label=DEFAULT_PLACEHOLDER
                    options=options.clone()
                    is_searchable=true
                    on_change=report
                />
            </section>

            <section class="flex flex-col gap-2">
                <h2 class="text-sm text-gray-500">"Preselected, no search"</h2>
                <DropdownSelect
                    label=DEFAULT_PLACEHOLDER
                    options=options.clone()
                    value="green"
                    on_change=report
                />
            </section>

            <section class="flex flex-col gap-2">
                <h2 class="text-sm text-gray-500">"Controlled open, toggle selection"</h2>
                <DropdownSelect
                    label=DEFAULT_PLACEHOLDER
                    options=options
                    is_searchable=true
                    open=controlled_open
                    on_open_change=Callback::new(move |next: bool| set_controlled_open.set(next))
                    policy=SelectionPolicy::Toggle
                    on_change=report
                />
                <button
                    class="text-sm text-blue-600 hover:underline self-start"
                    on:click=move |_| set_controlled_open.update(|v| *v = !*v)
                >
                    "Toggle from outside"
                </button>
            </section>

            <p class="text-sm text-gray-600">
                "Last change: "
                <span class="font-mono">{move || last_change.get()}</span>
            </p>
        </main>
    }
}
