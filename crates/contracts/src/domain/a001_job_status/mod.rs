//! Job status catalog aggregate and the status lifecycle engine.
//!
//! Status titles are configured by administrators as free text, so the
//! lifecycle policy is built on top of a canonicalization layer:
//! - canonical.rs: free-text title -> fixed canonical lifecycle key
//! - transitions.rs: canonical key + catalog -> presentable next actions

pub mod aggregate;
pub mod canonical;
pub mod transitions;

pub use aggregate::{JobStatus, JobStatusDto, JobStatusId};
pub use canonical::{canonicalize, CanonicalStatusKey};
pub use transitions::{build_transition_set, TransitionOption};
