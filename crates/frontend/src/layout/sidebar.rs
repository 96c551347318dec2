use super::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <div class="sidebar__section">"Operations"</div>
            <button
                class="sidebar__item"
                class:sidebar__item--active=move || {
                    matches!(ctx.page.get(), Page::JobList | Page::JobDetails { .. })
                }
                on:click=move |_| ctx.navigate(Page::JobList)
            >
                "Jobs"
            </button>
            <button
                class="sidebar__item"
                class:sidebar__item--active=move || {
                    matches!(ctx.page.get(), Page::ClientList | Page::ClientDetails { .. })
                }
                on:click=move |_| ctx.navigate(Page::ClientList)
            >
                "Clients"
            </button>

            <div class="sidebar__section">"Settings"</div>
            <button
                class="sidebar__item"
                class:sidebar__item--active=move || {
                    matches!(
                        ctx.page.get(),
                        Page::JobStatusList | Page::JobStatusDetails { .. }
                    )
                }
                on:click=move |_| ctx.navigate(Page::JobStatusList)
            >
                "Job Statuses"
            </button>
        </nav>
    }
}
