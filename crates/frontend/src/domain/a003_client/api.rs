use crate::shared::api_utils::api_url;
use contracts::domain::a003_client::Client;

pub async fn fetch_all() -> Result<Vec<Client>, String> {
    let response = gloo_net::http::Request::get(&api_url("/api/clients"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Client>>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
