//! Client Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: ViewModel with the geographic cascade
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::ClientDetails;
pub use view_model::ClientDetailsViewModel;
