use super::view_model::JobStatusDetailsViewModel;
use crate::shared::components::ui::Input;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn JobStatusDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = JobStatusDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container job-status-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit Job Status" } else { "New Job Status" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <Input
                    label="Title"
                    id="title"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().title
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| vm.form.update(|f| f.title = value)
                    })
                    placeholder="e.g. On Site, On Hold, Completed"
                />

                <div class="form__group">
                    <label class="form__label" for="color_code">{"Color"}</label>
                    <input
                        id="color_code"
                        class="form__input form__input--color"
                        type="color"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || {
                                let c = vm.form.get().color_code.unwrap_or_default();
                                if c.trim().is_empty() { "#808080".to_string() } else { c }
                            }
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.color_code = Some(event_target_value(&ev)));
                            }
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">{"Lifecycle phase"}</label>
                    <span class="form__hint">
                        {
                            let vm = vm_clone.clone();
                            move || {
                                let hint = vm.lifecycle_hint()();
                                if hint.is_empty() {
                                    "Type a title to see the derived phase".to_string()
                                } else {
                                    hint
                                }
                            }
                        }
                    </span>
                </div>
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
