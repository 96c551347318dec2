use super::view_model::JobDetailsViewModel;
use crate::shared::components::ui::StatusBadge;
use crate::shared::toast::ToastService;
use contracts::domain::a001_job_status::canonicalize;
use contracts::domain::a001_job_status::CanonicalStatusKey;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Current status plus one chip per offered transition.
///
/// Lifecycle phases the job has already passed render muted. Terminal
/// statuses render a notice instead of chips.
#[component]
pub fn StatusSelector(vm: JobDetailsViewModel) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService context not found");

    let vm_for_badge = vm.clone();
    let vm_for_terminal = vm.clone();
    let vm_for_chips = vm.clone();

    view! {
        <div class="status-selector">
            <div class="status-selector__current">
                <span class="form__label">{"Status"}</span>
                <StatusBadge
                    title=Signal::derive({
                        let vm = vm_for_badge.clone();
                        move || vm.flow.get().current_title().to_string()
                    })
                    color=Signal::derive({
                        let vm = vm_for_badge.clone();
                        move || {
                            let id = vm.flow.get().current_id().to_string();
                            vm.catalog
                                .get()
                                .iter()
                                .find(|s| s.to_string_id() == id)
                                .map(|s| s.color_code.clone())
                                .unwrap_or_default()
                        }
                    })
                />
            </div>

            <Show
                when={
                    let vm = vm_for_terminal.clone();
                    move || !vm.flow.get().current_key().is_terminal()
                }
                fallback={
                    let vm = vm_for_terminal.clone();
                    move || {
                        let label = vm.flow.get().current_key().label();
                        view! {
                            <MessageBar intent=MessageBarIntent::Info>
                                <span>
                                    {format!("This job is {} and can no longer change status.", label)}
                                </span>
                            </MessageBar>
                        }
                    }
                }
            >
                <div class="status-selector__chips">
                    {
                        let vm = vm_for_chips.clone();
                        move || {
                            let in_flight = vm.flow.get().is_in_flight();
                            vm.transition_options().into_iter().map(|option| {
                                let vm = vm.clone();
                                let chip_style = if option.color.trim().is_empty() {
                                    String::new()
                                } else {
                                    format!("border-color: {};", option.color)
                                };
                                let label = option.label.clone();
                                let passed = option.is_completed_for_display;
                                let is_reject = canonicalize(&option.label)
                                    == CanonicalStatusKey::Rejected;
                                // Display-only entries (waiting for approval)
                                // render as inert badges, never as buttons.
                                if !option.is_actionable {
                                    return view! {
                                        <span class="chip chip--static" style=chip_style>
                                            {label}
                                        </span>
                                    }
                                    .into_any();
                                }
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--passed=passed
                                        style=chip_style
                                        disabled=in_flight
                                        on:click=move |_| {
                                            let remarks = if is_reject {
                                                // Cancelling the prompt cancels the
                                                // transition as well.
                                                match prompt_rejection_reason() {
                                                    Some(reason) => Some(reason),
                                                    None => return,
                                                }
                                            } else {
                                                None
                                            };
                                            vm.update_status_command(&option, remarks, None, toasts);
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                                .into_any()
                            }).collect_view()
                        }
                    }
                </div>
            </Show>
        </div>
    }
}

fn prompt_rejection_reason() -> Option<String> {
    let window = web_sys::window()?;
    let input = window
        .prompt_with_message("Rejection reason:")
        .ok()
        .flatten()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
