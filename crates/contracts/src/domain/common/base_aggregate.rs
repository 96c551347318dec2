use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Base aggregate with the fields every aggregate carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Business code of the record (e.g. "JOB-2026-0001", "CLT-12345")
    pub code: String,
    /// Display name / description
    pub description: String,
    /// Free-form comment
    pub comment: Option<String>,
    /// Lifecycle metadata
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Create a new aggregate
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
