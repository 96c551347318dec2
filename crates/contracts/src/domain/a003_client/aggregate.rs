use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::geo::GeoSelection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
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

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A client (service recipient) with its geographic hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate<ClientId>,

    #[serde(rename = "contactName", default)]
    pub contact_name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub geo: GeoSelection,
}

impl Client {
    pub fn new_for_insert(code: String, description: String) -> Self {
        Self {
            base: BaseAggregate::new(ClientId::new_v4(), code, description),
            contact_name: String::new(),
            phone: String::new(),
            email: String::new(),
            geo: GeoSelection::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ClientDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.contact_name = dto.contact_name.clone().unwrap_or_default();
        self.phone = dto.phone.clone().unwrap_or_default();
        self.email = dto.email.clone().unwrap_or_default();
        self.geo = dto.geo.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "contactName")]
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub geo: GeoSelection,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::geo::GeoField;

    #[test]
    fn test_update_from_dto_carries_geo() {
        let mut client = Client::new_for_insert("C-001".into(), "Acme Utilities".into());
        let dto = ClientDto {
            description: "Acme Utilities Ltd".into(),
            contact_name: Some("R. Shaw".into()),
            geo: GeoSelection {
                country: GeoField {
                    id: Some("in".into()),
                    name: Some("India".into()),
                },
                ..Default::default()
            },
            ..Default::default()
        };
        client.update(&dto);
        assert_eq!(client.base.description, "Acme Utilities Ltd");
        assert_eq!(client.contact_name, "R. Shaw");
        assert_eq!(client.geo.country.id.as_deref(), Some("in"));
        assert!(client.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let client = Client::new_for_insert("C-001".into(), " ".into());
        assert!(client.validate().is_err());
    }

    #[test]
    fn test_before_write_touches_metadata() {
        let mut client = Client::new_for_insert("C-001".into(), "Acme".into());
        let created = client.base.metadata.updated_at;
        client.before_write();
        assert!(client.base.metadata.updated_at >= created);
    }
}
