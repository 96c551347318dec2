//! Geographic hierarchy (country -> state -> district -> pincode) shared by
//! the entity forms.
//!
//! Backend records store each level loosely: sometimes an id, sometimes only
//! a display name (legacy imports). `GeoField::resolve` reconciles a stored
//! field against a fetched reference list; `GeoSelection` owns the cascade
//! rule that changing a parent clears every dependent level.

use serde::{Deserialize, Serialize};

/// One entry of a fetched reference list (countries, states, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRef {
    pub id: String,
    pub name: String,
}

/// One geographic level as stored on an entity: id, name, either or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeoField {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl GeoField {
    pub fn from_ref(r: &GeoRef) -> Self {
        Self {
            id: Some(r.id.clone()),
            name: Some(r.name.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Reconcile this field against a reference list: match by id first,
    /// then by case-insensitive trimmed name.
    pub fn resolve<'a>(&self, options: &'a [GeoRef]) -> Option<&'a GeoRef> {
        if let Some(id) = &self.id {
            if let Some(found) = options.iter().find(|o| &o.id == id) {
                return Some(found);
            }
        }
        if let Some(name) = &self.name {
            let wanted = name.trim().to_lowercase();
            if !wanted.is_empty() {
                return options
                    .iter()
                    .find(|o| o.name.trim().to_lowercase() == wanted);
            }
        }
        None
    }
}

/// The four-level hierarchy carried by clients, companies, users and vendors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeoSelection {
    #[serde(default)]
    pub country: GeoField,
    #[serde(default)]
    pub state: GeoField,
    #[serde(default)]
    pub district: GeoField,
    #[serde(default)]
    pub pincode: GeoField,
}

impl GeoSelection {
    /// Selecting a country invalidates everything below it.
    pub fn set_country(&mut self, r: &GeoRef) {
        self.country = GeoField::from_ref(r);
        self.state = GeoField::default();
        self.district = GeoField::default();
        self.pincode = GeoField::default();
    }

    pub fn set_state(&mut self, r: &GeoRef) {
        self.state = GeoField::from_ref(r);
        self.district = GeoField::default();
        self.pincode = GeoField::default();
    }

    pub fn set_district(&mut self, r: &GeoRef) {
        self.district = GeoField::from_ref(r);
        self.pincode = GeoField::default();
    }

    pub fn set_pincode(&mut self, r: &GeoRef) {
        self.pincode = GeoField::from_ref(r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs() -> Vec<GeoRef> {
        vec![
            GeoRef {
                id: "ka".to_string(),
                name: "Karnataka".to_string(),
            },
            GeoRef {
                id: "mh".to_string(),
                name: "Maharashtra".to_string(),
            },
        ]
    }

    #[test]
    fn test_resolve_by_id_wins_over_name() {
        let options = refs();
        let field = GeoField {
            id: Some("mh".to_string()),
            name: Some("Karnataka".to_string()),
        };
        let resolved = field.resolve(&options).unwrap();
        assert_eq!(resolved.id, "mh");
    }

    #[test]
    fn test_resolve_by_name_case_insensitive() {
        let options = refs();
        let field = GeoField {
            id: None,
            name: Some("  kArNaTaKa ".to_string()),
        };
        let resolved = field.resolve(&options).unwrap();
        assert_eq!(resolved.id, "ka");
    }

    #[test]
    fn test_resolve_stale_id_falls_back_to_name() {
        let options = refs();
        let field = GeoField {
            id: Some("gone".to_string()),
            name: Some("Maharashtra".to_string()),
        };
        let resolved = field.resolve(&options).unwrap();
        assert_eq!(resolved.id, "mh");
    }

    #[test]
    fn test_resolve_none_when_unknown() {
        let field = GeoField {
            id: Some("xx".to_string()),
            name: Some("Atlantis".to_string()),
        };
        assert!(field.resolve(&refs()).is_none());
        assert!(GeoField::default().resolve(&refs()).is_none());
    }

    #[test]
    fn test_parent_change_clears_dependents() {
        let mut geo = GeoSelection::default();
        geo.set_country(&GeoRef {
            id: "in".to_string(),
            name: "India".to_string(),
        });
        geo.set_state(&refs()[0]);
        geo.set_district(&GeoRef {
            id: "blr".to_string(),
            name: "Bengaluru Urban".to_string(),
        });
        geo.set_pincode(&GeoRef {
            id: "560001".to_string(),
            name: "560001".to_string(),
        });

        geo.set_state(&refs()[1]);
        assert_eq!(geo.state.id.as_deref(), Some("mh"));
        assert!(geo.district.is_empty());
        assert!(geo.pincode.is_empty());
        // Country stays put
        assert_eq!(geo.country.id.as_deref(), Some("in"));
    }
}
