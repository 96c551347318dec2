mod state;

use crate::domain::a001_job_status::api as status_api;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::api_utils::api_url;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_optional_datetime;
use contracts::domain::a001_job_status::JobStatus;
use contracts::domain::a002_job::Job;
use leptos::prelude::*;
use serde::Deserialize;
use state::{create_state, JobListState};
use std::collections::HashMap;
use thaw::{Button, ButtonAppearance};

#[derive(Clone, Debug)]
pub struct JobRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub status_title: String,
    pub status_color: String,
    pub scheduled_at: String,
    pub address: String,
}

impl JobRow {
    fn from_job(job: Job, catalog: &HashMap<String, JobStatus>) -> Self {
        let by_id = catalog.get(&job.job_status_id);
        // The list endpoint caches the title on the job itself; the catalog
        // fills in the color and covers rows where the cache is empty.
        let status_title = if job.job_status_title.trim().is_empty() {
            by_id.map(|s| s.title.clone()).unwrap_or_default()
        } else {
            job.job_status_title.clone()
        };
        let status_color = by_id.map(|s| s.color_code.clone()).unwrap_or_default();
        Self {
            id: job.to_string_id(),
            code: job.base.code,
            description: job.base.description,
            status_title,
            status_color,
            scheduled_at: format_optional_datetime(&job.scheduled_at),
            address: job.address,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JobListResponse {
    items: Vec<Job>,
    #[serde(rename = "totalCount")]
    total_count: usize,
}

#[component]
#[allow(non_snake_case)]
pub fn JobList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let state = create_state();
    let (rows, set_rows) = signal::<Vec<JobRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (catalog, set_catalog) = signal::<HashMap<String, JobStatus>>(HashMap::new());

    let fetch = move || {
        let JobListState {
            page,
            page_size,
            search_query,
            status_filter,
            ..
        } = state.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            if catalog.get_untracked().is_empty() {
                match status_api::fetch_all().await {
                    Ok(statuses) => set_catalog.set(
                        statuses
                            .into_iter()
                            .map(|s| (s.to_string_id(), s))
                            .collect(),
                    ),
                    Err(e) => log::warn!("status catalog load failed: {}", e),
                }
            }

            match fetch_jobs(page, page_size, &search_query, &status_filter).await {
                Ok(response) => {
                    let map = catalog.get_untracked();
                    let list: Vec<JobRow> = response
                        .items
                        .into_iter()
                        .map(|j| JobRow::from_job(j, &map))
                        .collect();
                    set_rows.set(list);
                    set_error.set(None);
                    state.update(|s| {
                        s.total_count = response.total_count;
                        s.total_pages = if s.page_size == 0 {
                            0
                        } else {
                            (response.total_count + s.page_size - 1) / s.page_size
                        };
                        s.is_loaded = true;
                    });
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_open = move |id: String| {
        ctx.navigate(Page::JobDetails { id: Some(id) });
    };

    let handle_create_new = move || {
        ctx.navigate(Page::JobDetails { id: None });
    };

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
        fetch();
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        fetch();
    });

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Jobs"}</h1>
                </div>
                <div class="header__actions">
                    <input
                        type="text"
                        class="form__input header__search"
                        placeholder="Search by code, description or address"
                        prop:value=move || state.get().search_query
                        on:input=move |ev| {
                            state.update(|s| {
                                s.search_query = event_target_value(&ev);
                                s.page = 0;
                            });
                            fetch();
                        }
                    />
                    <select
                        class="form__select header__filter"
                        prop:value=move || state.get().status_filter
                        on:change=move |ev| {
                            state.update(|s| {
                                s.status_filter = event_target_value(&ev);
                                s.page = 0;
                            });
                            fetch();
                        }
                    >
                        <option value="">{"All statuses"}</option>
                        {move || {
                            let current = state.get().status_filter;
                            let mut entries: Vec<_> = catalog.get().into_values().collect();
                            entries.sort_by(|a, b| a.title.cmp(&b.title));
                            entries.into_iter().map(|s| {
                                let id = s.to_string_id();
                                let selected = id == current;
                                view! {
                                    <option value=id selected=selected>{s.title}</option>
                                }
                            }).collect_view()
                        }}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {"New Job"}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                    >
                        {"Refresh"}
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Code"}</th>
                            <th class="table__header-cell">{"Description"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Scheduled"}</th>
                            <th class="table__header-cell">{"Address"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| handle_open(id_for_click.clone())
                                >
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">
                                        <StatusBadge
                                            title=row.status_title.clone()
                                            color=row.status_color.clone()
                                        />
                                    </td>
                                    <td class="table__cell">{row.scheduled_at}</td>
                                    <td class="table__cell">{row.address}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.get().page)
                total_pages=Signal::derive(move || state.get().total_pages)
                total_count=Signal::derive(move || state.get().total_count)
                page_size=Signal::derive(move || state.get().page_size)
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        </div>
    }
}

async fn fetch_jobs(
    page: usize,
    page_size: usize,
    search: &str,
    status_id: &str,
) -> Result<JobListResponse, String> {
    let mut url = format!("/api/jobs?page={}&pageSize={}", page, page_size);
    if !search.trim().is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }
    if !status_id.is_empty() {
        url.push_str(&format!("&statusId={}", urlencoding::encode(status_id)));
    }
    let response = gloo_net::http::Request::get(&api_url(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<JobListResponse>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
