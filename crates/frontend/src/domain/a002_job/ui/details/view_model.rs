use super::model;
use crate::domain::a001_job_status::api as status_api;
use crate::domain::a003_client::api as client_api;
use crate::shared::toast::ToastService;
use contracts::domain::a001_job_status::{build_transition_set, JobStatus, TransitionOption};
use contracts::domain::a002_job::{JobDto, StatusFlow, UpdateJobStatusRequest};
use contracts::domain::a003_client::Client;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the job details form.
///
/// Owns the optimistic status flow: the status shown on screen always comes
/// from `flow`, which switches immediately on a transition click and is
/// restored byte-for-byte when the persistence call fails.
#[derive(Clone)]
pub struct JobDetailsViewModel {
    pub form: RwSignal<JobDto>,
    pub catalog: RwSignal<Vec<JobStatus>>,
    pub clients: RwSignal<Vec<Client>>,
    pub available_actions: RwSignal<Option<Vec<JobStatus>>>,
    pub flow: RwSignal<StatusFlow>,
    pub error: RwSignal<Option<String>>,
}

impl JobDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(JobDto::default()),
            catalog: RwSignal::new(Vec::new()),
            clients: RwSignal::new(Vec::new()),
            available_actions: RwSignal::new(None),
            flow: RwSignal::new(StatusFlow::new(String::new(), String::new())),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.form.get().description.trim().is_empty()
    }

    /// Transition chips for the current status. Recomputed from already
    /// loaded data on every status change; no extra fetch is involved.
    pub fn transition_options(&self) -> Vec<TransitionOption> {
        let key = self.flow.get().current_key();
        let catalog = self.catalog.get();
        let available = self.available_actions.get();
        build_transition_set(&key, &catalog, available.as_deref())
    }

    /// Load form data, the status catalog and the client list from server
    pub fn load_if_needed(&self, id: Option<String>) {
        let catalog = self.catalog;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match status_api::fetch_all().await {
                Ok(statuses) => catalog.set(statuses),
                Err(e) => error.set(Some(format!("Catalog load error: {}", e))),
            }
        });

        let clients = self.clients;
        wasm_bindgen_futures::spawn_local(async move {
            match client_api::fetch_all().await {
                Ok(list) => clients.set(list),
                Err(e) => log::warn!("client list load failed: {}", e),
            }
        });

        if let Some(existing_id) = id {
            let form = self.form;
            let flow = self.flow;
            let available_actions = self.available_actions;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(job) => {
                        // The cached title may lag behind the catalog; fill
                        // it from the loaded catalog when empty.
                        let mut status_title = job.job_status_title.clone();
                        if status_title.trim().is_empty() {
                            status_title = catalog
                                .get_untracked()
                                .iter()
                                .find(|s| s.to_string_id() == job.job_status_id)
                                .map(|s| s.title.clone())
                                .unwrap_or_default();
                        }

                        flow.set(StatusFlow::new(job.job_status_id.clone(), status_title.clone()));
                        available_actions.set(job.available_actions.clone());

                        let dto = JobDto {
                            id: Some(job.to_string_id()),
                            code: Some(job.base.code.clone()),
                            description: job.base.description.clone(),
                            comment: job.base.comment.clone(),
                            job_status_id: job.job_status_id.clone(),
                            job_status_title: status_title,
                            client_id: job.client_id.clone(),
                            scheduled_at: job.scheduled_at,
                            address: Some(job.address.clone()),
                            updated_at: Some(job.base.metadata.updated_at),
                        };
                        form.set(dto);
                    }
                    Err(e) => error.set(Some(format!("Load error: {}", e))),
                }
            });
        }
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Arc<dyn Fn(()) + Send + Sync>) {
        let current = self.form.get();

        if current.description.trim().is_empty() {
            self.error.set(Some("Description is required".to_string()));
            return;
        }

        let on_saved_cb = on_saved.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(_id) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Run one status transition: optimistic switch, persistence call,
    /// commit or rollback. Attempts that the flow refuses (already in
    /// flight, same status, terminal state) are ignored silently, as are
    /// display-only entries whose id may match no catalog record.
    pub fn update_status_command(
        &self,
        option: &TransitionOption,
        remarks: Option<String>,
        success_message: Option<String>,
        toasts: ToastService,
    ) {
        if !option.is_actionable {
            return;
        }

        // The chip label can be a relabel ("Approve"); show the real
        // configured title for the target status.
        let target_title = self
            .catalog
            .get_untracked()
            .iter()
            .find(|s| s.to_string_id() == option.id)
            .map(|s| s.title.clone())
            .unwrap_or_else(|| option.label.clone());

        let pending = self
            .flow
            .try_update(|f| f.begin(&option.id, &target_title))
            .unwrap_or(None);
        let Some(pending) = pending else {
            return;
        };
        self.mirror_flow_into_form();

        let job_id = self.form.get_untracked().id.unwrap_or_default();
        let flow = self.flow;
        let available_actions = self.available_actions;
        let mirror = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let payload = UpdateJobStatusRequest {
                job_status_id: pending.target_id.clone(),
                remarks,
            };
            match model::update_status(&job_id, &payload).await {
                Ok(updated) => {
                    flow.update(|f| f.commit());
                    available_actions.set(updated.available_actions);
                    toasts.success(transition_success_text(success_message));
                }
                Err(e) => {
                    log::warn!("status update failed for job {}: {}", job_id, e);
                    flow.update(|f| f.roll_back());
                    mirror.mirror_flow_into_form();
                    toasts.error(e);
                }
            }
        });
    }

    /// Keep the form's cached status pair in sync with the flow so that a
    /// later save does not write back a stale status.
    fn mirror_flow_into_form(&self) {
        let flow = self.flow.get_untracked();
        self.form.update(|f| {
            f.job_status_id = flow.current_id().to_string();
            f.job_status_title = flow.current_title().to_string();
        });
    }
}

fn transition_success_text(custom: Option<String>) -> String {
    custom.unwrap_or_else(|| "Status updated".to_string())
}

#[cfg(test)]
mod tests {
    use super::transition_success_text;

    #[test]
    fn test_success_text_prefers_custom_message() {
        assert_eq!(
            transition_success_text(Some("Job approved".into())),
            "Job approved"
        );
        assert_eq!(transition_success_text(None), "Status updated");
    }
}
