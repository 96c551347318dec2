use super::view_model::ClientDetailsViewModel;
use crate::shared::components::ui::{Input, Select, Textarea};
use contracts::shared::geo::GeoRef;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{Button, ButtonAppearance};

fn to_options(refs: &[GeoRef]) -> Vec<(String, String)> {
    refs.iter().map(|r| (r.id.clone(), r.name.clone())).collect()
}

#[component]
pub fn ClientDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = ClientDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container client-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit Client" } else { "New Client" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <Input
                    label="Name"
                    id="description"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().description
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| vm.form.update(|f| f.description = value)
                    })
                    placeholder="Client name"
                />

                <Input
                    label="Contact person"
                    id="contact_name"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().contact_name.unwrap_or_default()
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| {
                            vm.form.update(|f| {
                                f.contact_name = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    })
                />

                <Input
                    label="Phone"
                    id="phone"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().phone.unwrap_or_default()
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| {
                            vm.form.update(|f| {
                                f.phone = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    })
                />

                <Input
                    label="Email"
                    id="email"
                    value=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.form.get().email.unwrap_or_default()
                    })
                    on_input=Callback::new({
                        let vm = vm_clone.clone();
                        move |value: String| {
                            vm.form.update(|f| {
                                f.email = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    })
                />

                <fieldset class="form__fieldset">
                    <legend class="form__legend">{"Location"}</legend>

                    <Select
                        label="Country"
                        id="geo_country"
                        value=Signal::derive({
                            let vm = vm_clone.clone();
                            move || vm.form.get().geo.country.id.unwrap_or_default()
                        })
                        on_change=Callback::new({
                            let vm = vm_clone.clone();
                            move |value: String| vm.select_country(value)
                        })
                        options=Signal::derive({
                            let vm = vm_clone.clone();
                            move || to_options(&vm.countries.get())
                        })
                        placeholder="Select country"
                    />

                    <Select
                        label="State"
                        id="geo_state"
                        value=Signal::derive({
                            let vm = vm_clone.clone();
                            move || vm.form.get().geo.state.id.unwrap_or_default()
                        })
                        on_change=Callback::new({
                            let vm = vm_clone.clone();
                            move |value: String| vm.select_state(value)
                        })
                        options=Signal::derive({
                            let vm = vm_clone.clone();
                            move || to_options(&vm.states.get())
                        })
                        placeholder="Select state"
                    />

                    <Select
                        label="District"
                        id="geo_district"
                        value=Signal::derive({
                            let vm = vm_clone.clone();
                            move || vm.form.get().geo.district.id.unwrap_or_default()
                        })
                        on_change=Callback::new({
                            let vm = vm_clone.clone();
                            move |value: String| vm.select_district(value)
                        })
                        options=Signal::derive({
                            let vm = vm_clone.clone();
                            move || to_options(&vm.districts.get())
                        })
                        placeholder="Select district"
                    />

                    <Select
                        label="Pincode"
                        id="geo_pincode"
                        value=Signal::derive({
                            let vm = vm_clone.clone();
                            move || vm.form.get().geo.pincode.id.unwrap_or_default()
                        })
                        on_change=Callback::new({
                            let vm = vm_clone.clone();
                            move |value: String| vm.select_pincode(value)
                        })
                        options=Signal::derive({
                            let vm = vm_clone.clone();
                            move || to_options(&vm.pincodes.get())
                        })
                        placeholder="Select pincode"
                    />
                </fieldset>

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
