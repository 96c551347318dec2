pub mod details;
pub mod list;

pub use details::JobStatusDetails;
pub use list::JobStatusList;
