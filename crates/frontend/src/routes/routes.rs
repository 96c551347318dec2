use crate::domain::a001_job_status::ui::{JobStatusDetails, JobStatusList};
use crate::domain::a002_job::ui::{JobDetails, JobList};
use crate::domain::a003_client::ui::{ClientDetails, ClientList};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Sync the active page with the URL. Runs once when the component is
    // created.
    ctx.init_url_integration();

    view! {
        <Shell center=move || {
            match ctx.page.get() {
                Page::JobList => view! { <JobList /> }.into_any(),
                Page::JobDetails { id } => {
                    let back: Arc<dyn Fn(()) + Send + Sync> = Arc::new(move |_| ctx.navigate(Page::JobList));
                    view! { <JobDetails id=id on_saved=back.clone() on_cancel=back /> }
                        .into_any()
                }
                Page::JobStatusList => view! { <JobStatusList /> }.into_any(),
                Page::JobStatusDetails { id } => {
                    let back: Arc<dyn Fn(()) + Send + Sync> =
                        Arc::new(move |_| ctx.navigate(Page::JobStatusList));
                    view! { <JobStatusDetails id=id on_saved=back.clone() on_cancel=back /> }
                        .into_any()
                }
                Page::ClientList => view! { <ClientList /> }.into_any(),
                Page::ClientDetails { id } => {
                    let back: Arc<dyn Fn(()) + Send + Sync> = Arc::new(move |_| ctx.navigate(Page::ClientList));
                    view! { <ClientDetails id=id on_saved=back.clone() on_cancel=back /> }
                        .into_any()
                }
            }
        } />
    }
}
