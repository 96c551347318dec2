use serde::Deserialize;

/// Flat error body the backend returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}

/// Pull a human-readable message out of an error response body, falling
/// back to the HTTP status when the body carries nothing useful.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.error {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }
    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_body() {
        assert_eq!(
            extract_error_message(422, r#"{"error":"Title must not be empty"}"#),
            "Title must not be empty"
        );
    }

    #[test]
    fn test_plain_body_kept() {
        assert_eq!(
            extract_error_message(500, "boom"),
            "HTTP 500: boom"
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(extract_error_message(404, ""), "HTTP 404");
        assert_eq!(extract_error_message(400, r#"{"error":""}"#), "HTTP 400: {\"error\":\"\"}");
    }
}
