use crate::domain::a003_client::api;
use crate::layout::global_context::{AppGlobalContext, Page};
use contracts::domain::a003_client::Client;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[derive(Clone, Debug)]
pub struct ClientRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub place: String,
}

impl From<Client> for ClientRow {
    fn from(c: Client) -> Self {
        // Most compact location the record carries: district, else state.
        let place = c
            .geo
            .district
            .name
            .clone()
            .or_else(|| c.geo.state.name.clone())
            .unwrap_or_default();
        Self {
            id: c.to_string_id(),
            code: c.base.code,
            name: c.base.description,
            contact_name: c.contact_name,
            phone: c.phone,
            place,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (items, set_items) = signal::<Vec<ClientRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter_text, set_filter_text) = signal(String::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let filtered = move || {
        let filter = filter_text.get().trim().to_lowercase();
        let all = items.get();
        if filter.is_empty() {
            return all;
        }
        all.into_iter()
            .filter(|row| {
                row.name.to_lowercase().contains(&filter)
                    || row.contact_name.to_lowercase().contains(&filter)
                    || row.phone.to_lowercase().contains(&filter)
                    || row.place.to_lowercase().contains(&filter)
            })
            .collect()
    };

    let handle_open = move |id: String| {
        ctx.navigate(Page::ClientDetails { id: Some(id) });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Clients"}</h1>
                </div>
                <div class="header__actions">
                    <input
                        type="text"
                        class="form__input header__search"
                        placeholder="Search"
                        prop:value=move || filter_text.get()
                        on:input=move |ev| set_filter_text.set(event_target_value(&ev))
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.navigate(Page::ClientDetails { id: None })
                    >
                        {"New Client"}
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
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Contact"}</th>
                            <th class="table__header-cell">{"Phone"}</th>
                            <th class="table__header-cell">{"Location"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| handle_open(id_for_click.clone())
                                >
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.contact_name}</td>
                                    <td class="table__cell">{row.phone}</td>
                                    <td class="table__cell">{row.place}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
