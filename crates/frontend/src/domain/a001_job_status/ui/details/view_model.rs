use super::model;
use contracts::domain::a001_job_status::{canonicalize, JobStatusDto};
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the job-status details form
#[derive(Clone)]
pub struct JobStatusDetailsViewModel {
    pub form: RwSignal<JobStatusDto>,
    pub error: RwSignal<Option<String>>,
}

impl JobStatusDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(JobStatusDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.form.get().title.trim().is_empty()
    }

    /// Label of the lifecycle phase the configured title resolves to.
    /// Advisory only; the admin is free to type anything.
    pub fn lifecycle_hint(&self) -> impl Fn() -> String + '_ {
        move || canonicalize(&self.form.get().title).label().to_string()
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => {
                        let dto = JobStatusDto {
                            id: Some(aggregate.to_string_id()),
                            title: aggregate.title,
                            color_code: Some(aggregate.color_code),
                            updated_at: Some(aggregate.metadata.updated_at),
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

        if current.title.trim().is_empty() {
            self.error.set(Some("Title is required".to_string()));
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
}
