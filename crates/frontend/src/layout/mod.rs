pub mod global_context;
pub mod sidebar;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button
                    class="top-header__toggle"
                    on:click=move |_| ctx.left_open.update(|v| *v = !*v)
                    title="Toggle sidebar"
                >
                    {"☰"}
                </button>
                <span class="top-header__title">"FieldOps Console"</span>
            </header>

            <div class="app-body">
                <Show when=move || ctx.left_open.get()>
                    <sidebar::Sidebar />
                </Show>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
