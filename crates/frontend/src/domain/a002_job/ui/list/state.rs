use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct JobListState {
    pub search_query: String,
    /// Status id to filter by; empty shows every status.
    pub status_filter: String,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for JobListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            status_filter: String::new(),
            is_loaded: false,
            page: 0,
            page_size: 100,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<JobListState> {
    RwSignal::new(JobListState::default())
}
