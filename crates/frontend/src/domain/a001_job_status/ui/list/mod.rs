use crate::domain::a001_job_status::api;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::api_utils::api_url;
use crate::shared::date_utils::format_datetime;
use contracts::domain::a001_job_status::{canonicalize, JobStatus};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::{Button, ButtonAppearance};

#[derive(Clone, Debug)]
pub struct JobStatusRow {
    pub id: String,
    pub title: String,
    pub color_code: String,
    pub lifecycle: String,
    pub updated_at: String,
}

impl From<JobStatus> for JobStatusRow {
    fn from(s: JobStatus) -> Self {
        Self {
            id: s.to_string_id(),
            lifecycle: canonicalize(&s.title).label(),
            updated_at: format_datetime(&s.metadata.updated_at),
            title: s.title,
            color_code: s.color_code,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn JobStatusList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (items, set_items) = signal::<Vec<JobStatusRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => {
                    let rows: Vec<JobStatusRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_create_new = move || {
        ctx.navigate(Page::JobStatusDetails { id: None });
    };

    let handle_edit = move |id: String| {
        ctx.navigate(Page::JobStatusDetails { id: Some(id) });
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete selected statuses? Count: {}", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                if let Err(e) = delete_job_status(&id).await {
                    log::warn!("delete failed for {}: {}", id, e);
                }
            }
            match api::fetch_all().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_selected.set(HashSet::new());
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Job Statuses"}</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {"New Status"}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                    >
                        {"Refresh"}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| delete_selected()
                        disabled=Signal::derive(move || selected.get().is_empty())
                    >
                        {move || format!("Delete ({})", selected.get().len())}
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
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">{"Color"}</th>
                            <th class="table__header-cell">{"Title"}</th>
                            <th class="table__header-cell">{"Lifecycle"}</th>
                            <th class="table__header-cell">{"Updated"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let is_selected = selected.get().contains(&row.id);
                            let swatch_style = if row.color_code.trim().is_empty() {
                                String::new()
                            } else {
                                format!("background-color: {};", row.color_code)
                            };
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=is_selected
                                    on:click=move |_| handle_edit(id_for_click.clone())
                                >
                                    <td class="table__cell" on:click=move |ev| ev.stop_propagation()>
                                        <input
                                            type="checkbox"
                                            class="table__checkbox"
                                            prop:checked=move || selected.get().contains(&id_for_checkbox)
                                            on:change=move |ev| {
                                                toggle_select(id_for_toggle.clone(), event_target_checked(&ev))
                                            }
                                        />
                                    </td>
                                    <td class="table__cell">
                                        <span class="color-swatch" style=swatch_style></span>
                                    </td>
                                    <td class="table__cell">{row.title}</td>
                                    <td class="table__cell">{row.lifecycle}</td>
                                    <td class="table__cell">{row.updated_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn delete_job_status(id: &str) -> Result<(), String> {
    let response = gloo_net::http::Request::delete(&api_url(&format!("/api/job-statuses/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
