use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobStatusId(pub Uuid);

impl JobStatusId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for JobStatusId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(JobStatusId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Catalog record
// ============================================================================

/// One configurable job-status record.
///
/// The title is administrator-controlled free text ("On Hold", "Paused",
/// "Waiting For Approval", ...). The backend enforces no enum over it, so
/// everything lifecycle-related goes through `canonical::canonicalize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatus {
    pub id: JobStatusId,

    pub title: String,

    #[serde(rename = "colorCode", default)]
    pub color_code: String,

    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl JobStatus {
    pub fn new_for_insert(title: String, color_code: String) -> Self {
        Self {
            id: JobStatusId::new_v4(),
            title,
            color_code,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &JobStatusDto) {
        self.title = dto.title.clone();
        self.color_code = dto.color_code.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobStatusDto {
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "colorCode")]
    pub color_code: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_from_dto_and_validate() {
        let mut status = JobStatus::new_for_insert("On Hold".into(), "#aa8800".into());
        let dto = JobStatusDto {
            id: Some(status.to_string_id()),
            title: "Paused".into(),
            color_code: None,
            updated_at: None,
        };
        status.update(&dto);
        assert_eq!(status.title, "Paused");
        assert_eq!(status.color_code, "");
        assert!(status.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let status = JobStatus::new_for_insert("   ".into(), String::new());
        assert!(status.validate().is_err());
    }

    #[test]
    fn test_before_write_touches_metadata() {
        let mut status = JobStatus::new_for_insert("Completed".into(), String::new());
        let created = status.metadata.updated_at;
        status.before_write();
        assert!(status.metadata.updated_at >= created);
    }
}
