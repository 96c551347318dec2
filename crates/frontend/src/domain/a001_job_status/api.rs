//! Status-catalog fetches shared across modules (the job details page needs
//! the catalog too).

use crate::shared::api_utils::api_url;
use contracts::domain::a001_job_status::JobStatus;

pub async fn fetch_all() -> Result<Vec<JobStatus>, String> {
    let response = gloo_net::http::Request::get(&api_url("/api/job-statuses"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<JobStatus>>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
