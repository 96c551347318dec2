pub mod input;
pub mod select;
pub mod status_badge;
pub mod textarea;

pub use input::Input;
pub use select::Select;
pub use status_badge::StatusBadge;
pub use textarea::Textarea;
