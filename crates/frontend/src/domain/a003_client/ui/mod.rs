pub mod details;
pub mod list;

pub use details::ClientDetails;
pub use list::ClientList;
