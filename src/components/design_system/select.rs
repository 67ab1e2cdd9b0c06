use leptos::ev;
use leptos::prelude::*;

/// A styled select dropdown bound to a string signal
#[component]
pub fn Select(
    /// Current selected value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Select options
    children: Children,
) -> impl IntoView {
    let base_class = "w-full p-2 rounded-md bg-white text-gray-900 border border-gray-300 focus:border-blue-500 focus:ring-1 focus:ring-blue-500 outline-none transition-colors";
    let full_class = format!("{base_class} {class}");

    let handle_change = move |evt: ev::Event| {
        let target = event_target::<web_sys::HtmlSelectElement>(&evt);
        value.set(target.value());
    };

    view! {
        <select class=full_class prop:value=move || value.get() on:change=handle_change>
            {children()}
        </select>
    }
}
