use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// The page currently shown in the content area.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    JobList,
    JobDetails { id: Option<String> },
    JobStatusList,
    JobStatusDetails { id: Option<String> },
    ClientList,
    ClientDetails { id: Option<String> },
}

impl Page {
    fn key(&self) -> &'static str {
        match self {
            Page::JobList => "a002_job_list",
            Page::JobDetails { .. } => "a002_job_detail",
            Page::JobStatusList => "a001_job_status_list",
            Page::JobStatusDetails { .. } => "a001_job_status_detail",
            Page::ClientList => "a003_client_list",
            Page::ClientDetails { .. } => "a003_client_detail",
        }
    }

    fn id(&self) -> Option<String> {
        match self {
            Page::JobDetails { id }
            | Page::JobStatusDetails { id }
            | Page::ClientDetails { id } => id.clone(),
            _ => None,
        }
    }

    fn from_parts(key: &str, id: Option<String>) -> Option<Page> {
        match key {
            "a002_job_list" => Some(Page::JobList),
            "a002_job_detail" => Some(Page::JobDetails { id }),
            "a001_job_status_list" => Some(Page::JobStatusList),
            "a001_job_status_detail" => Some(Page::JobStatusDetails { id }),
            "a003_client_list" => Some(Page::ClientList),
            "a003_client_detail" => Some(Page::ClientDetails { id }),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::JobList),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }

    /// Sync the active page with the URL query string (?page=...&id=...),
    /// so reloads and shared links land on the same view. Runs once when
    /// the routes component is created.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("page") {
            if let Some(page) = Page::from_parts(key, params.get("id").cloned()) {
                self.page.set(page);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let mut params =
                HashMap::from([("page".to_string(), page.key().to_string())]);
            if let Some(id) = page.id() {
                params.insert("id".to_string(), id);
            }
            let query_string = serde_qs::to_string(&params).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}
