use super::status_selector::StatusSelector;
use super::view_model::JobDetailsViewModel;
use crate::shared::components::ui::{Input, Select, Textarea};
use chrono::NaiveDateTime;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn JobDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = JobDetailsViewModel::new();
    let is_existing = id.is_some();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container job-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit Job" } else { "New Job" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            // The status strip only makes sense for a persisted job; a new
            // job gets its initial status on the backend.
            {is_existing.then(|| {
                let vm = vm_clone.clone();
                view! { <StatusSelector vm=vm /> }
            })}

            <div class="details-form">
                <Input
                    label="Code"
                    id="code"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().code.unwrap_or_default()
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| {
                            vm.form.update(|f| {
                                f.code = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    })
                    placeholder="Auto-assigned when left empty"
                />

                <Input
                    label="Description"
                    id="description"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().description
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| vm.form.update(|f| f.description = value)
                    })
                    placeholder="What needs to be done"
                />

                <Input
                    label="Address"
                    id="address"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().address.unwrap_or_default()
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| {
                            vm.form.update(|f| {
                                f.address = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    })
                    placeholder="Service address"
                />

                <Select
                    label="Client"
                    id="client_id"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().client_id.unwrap_or_default()
                    })
                    on_change=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| {
                            vm.form.update(|f| {
                                f.client_id = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    })
                    options=Signal::derive({
                        let vm = vm_clone.clone();
                        move || {
                            vm.clients
                                .get()
                                .iter()
                                .map(|c| (c.to_string_id(), c.base.description.clone()))
                                .collect::<Vec<_>>()
                        }
                    })
                    placeholder="No client"
                />

                <div class="form__group">
                    <label class="form__label" for="scheduled_at">{"Scheduled"}</label>
                    <input
                        id="scheduled_at"
                        class="form__input"
                        type="datetime-local"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || {
                                vm.form
                                    .get()
                                    .scheduled_at
                                    .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
                                    .unwrap_or_default()
                            }
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let raw = event_target_value(&ev);
                                let parsed = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M")
                                    .ok()
                                    .map(|naive| naive.and_utc());
                                vm.form.update(|f| f.scheduled_at = parsed);
                            }
                        }
                    />
                </div>

                <Textarea
                    label="Comment"
                    id="comment"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().comment.unwrap_or_default()
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| {
                            vm.form.update(|f| {
                                f.comment = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    })
                />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled=Signal::derive({
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()()
                    })
                >
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Save" } else { "Create" }
                    }
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| (on_cancel)(())
                >
                    {"Cancel"}
                </Button>
            </div>
        </div>
    }
}
