use leptos::*;

/// Chevron that points up while the dropdown is open.
#[component]
pub fn DropdownIcon(
    #[prop(into)]
    is_open: Signal<bool>,
) -> impl IntoView {
    view! {
        <svg
            class=move || {
                if is_open.get() {
                    "w-4 h-4 transition-transform rotate-180"
                } else {
                    "w-4 h-4 transition-transform"
                }
            }
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M19 9l-7 7-7-7"
            />
        </svg>
    }
}
