//! Job aggregate and the optimistic status-update flow.

pub mod aggregate;
pub mod status_flow;

pub use aggregate::{Job, JobDto, JobId, UpdateJobStatusRequest};
pub use status_flow::{PendingUpdate, StatusFlow};
