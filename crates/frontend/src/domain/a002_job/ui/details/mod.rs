//! Job Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, save, status update)
//! - view_model.rs: ViewModel with commands and the optimistic status flow
//! - status_selector.rs: transition chips / progress strip
//! - view.rs: Leptos component (pure UI)

mod model;
mod status_selector;
mod view;
mod view_model;

pub use view::JobDetails;
pub use view_model::JobDetailsViewModel;
