use leptos::prelude::*;

/// Colored chip for a job status, tinted with the configured catalog color.
#[component]
pub fn StatusBadge(
    /// Status title to display
    #[prop(into)]
    title: Signal<String>,
    /// Configured color code (e.g. "#2a9d8f"); empty falls back to neutral
    #[prop(into)]
    color: Signal<String>,
) -> impl IntoView {
    let style = move || {
        let c = color.get();
        if c.trim().is_empty() {
            String::new()
        } else {
            format!("background-color: {};", c)
        }
    };

    view! {
        <span class="badge badge--status" style=style>
            {move || title.get()}
        </span>
    }
}
