//! Reference-list fetches for the geographic cascade.
//!
//! Shared by every entity form carrying a `GeoSelection` (clients today,
//! companies/users/vendors as they are ported).

use crate::shared::api_utils::api_url;
use contracts::shared::geo::GeoRef;

pub async fn fetch_countries() -> Result<Vec<GeoRef>, String> {
    get_refs("/api/geo/countries".to_string()).await
}

pub async fn fetch_states(country_id: &str) -> Result<Vec<GeoRef>, String> {
    get_refs(format!(
        "/api/geo/states?country_id={}",
        urlencoding::encode(country_id)
    ))
    .await
}

pub async fn fetch_districts(state_id: &str) -> Result<Vec<GeoRef>, String> {
    get_refs(format!(
        "/api/geo/districts?state_id={}",
        urlencoding::encode(state_id)
    ))
    .await
}

pub async fn fetch_pincodes(district_id: &str) -> Result<Vec<GeoRef>, String> {
    get_refs(format!(
        "/api/geo/pincodes?district_id={}",
        urlencoding::encode(district_id)
    ))
    .await
}

async fn get_refs(path: String) -> Result<Vec<GeoRef>, String> {
    let response = gloo_net::http::Request::get(&api_url(&path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<GeoRef>>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
