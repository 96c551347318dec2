use crate::domain::a001_job_status::JobStatus;
use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub Uuid);

impl JobId {
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

impl AggregateId for JobId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(JobId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A field-service job.
///
/// A job references exactly one status id at a time. The status title is
/// cached alongside the id so the transition-set builder can recompute
/// without re-fetching the catalog entry. `available_actions`, when the
/// backend sends it, is an authoritative allow-list for next transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    #[serde(flatten)]
    pub base: BaseAggregate<JobId>,

    #[serde(rename = "jobStatusId")]
    pub job_status_id: String,

    #[serde(rename = "jobStatusTitle", default)]
    pub job_status_title: String,

    #[serde(rename = "clientId")]
    pub client_id: Option<String>,

    #[serde(rename = "scheduledAt")]
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(default)]
    pub address: String,

    #[serde(rename = "availableActions", default)]
    pub available_actions: Option<Vec<JobStatus>>,
}

impl Job {
    pub fn new_for_insert(code: String, description: String, job_status_id: String) -> Self {
        Self {
            base: BaseAggregate::new(JobId::new_v4(), code, description),
            job_status_id,
            job_status_title: String::new(),
            client_id: None,
            scheduled_at: None,
            address: String::new(),
            available_actions: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &JobDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.client_id = dto.client_id.clone();
        self.scheduled_at = dto.scheduled_at;
        self.address = dto.address.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Description must not be empty".into());
        }
        if self.job_status_id.trim().is_empty() {
            return Err("Job must reference a status".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

// ============================================================================
// DTOs
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "jobStatusId", default)]
    pub job_status_id: String,
    #[serde(rename = "jobStatusTitle", default)]
    pub job_status_title: String,
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    pub address: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body of the status-update call. `remarks` carries the rejection reason
/// when the chosen transition is a reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJobStatusRequest {
    #[serde(rename = "jobStatusId")]
    pub job_status_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_id() -> String {
        Uuid::new_v4().to_string()
    }

    #[test]
    fn test_update_from_dto_preserves_status_reference() {
        let mut job = Job::new_for_insert("J-001".into(), "Install meter".into(), status_id());
        let original_status = job.job_status_id.clone();
        let dto = JobDto {
            code: Some("J-002".into()),
            description: "Replace meter".into(),
            address: Some("12 High St".into()),
            ..Default::default()
        };
        job.update(&dto);
        assert_eq!(job.base.code, "J-002");
        assert_eq!(job.base.description, "Replace meter");
        assert_eq!(job.address, "12 High St");
        assert_eq!(job.job_status_id, original_status);
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_description_and_status() {
        let job = Job::new_for_insert("J-001".into(), "  ".into(), status_id());
        assert!(job.validate().is_err());

        let job = Job::new_for_insert("J-001".into(), "Install meter".into(), String::new());
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_before_write_touches_metadata() {
        let mut job = Job::new_for_insert("J-001".into(), "Install meter".into(), status_id());
        let created = job.base.metadata.updated_at;
        job.before_write();
        assert!(job.base.metadata.updated_at >= created);
    }

    #[test]
    fn test_update_request_omits_absent_remarks() {
        let body = UpdateJobStatusRequest {
            job_status_id: "abc".into(),
            remarks: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"jobStatusId":"abc"}"#);
    }
}
