use serde_json::Value;
use thiserror::Error;

use super::pagination::PageShapeError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Shape(#[from] PageShapeError),
    #[error("response did not match schema: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pulls a human-readable message out of a backend error body. The backend
/// is inconsistent about where it puts the message, so this walks a fallback
/// chain and the first hit wins:
/// `non_field_errors[0]` -> `detail` -> bare string body -> `error` ->
/// first value of the object.
pub fn extract_error_message(body: &str) -> Option<String> {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            let trimmed = body.trim();
            return (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    };

    if let Some(obj) = parsed.as_object() {
        if let Some(message) = obj
            .get("non_field_errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(value_as_message)
        {
            return Some(message);
        }
        if let Some(message) = obj.get("detail").and_then(value_as_message) {
            return Some(message);
        }
    }

    if let Some(message) = parsed.as_str() {
        let trimmed = message.trim();
        return (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    if let Some(obj) = parsed.as_object() {
        if let Some(message) = obj.get("error").and_then(value_as_message) {
            return Some(message);
        }
        if let Some(message) = obj.values().next().and_then(value_as_message) {
            return Some(message);
        }
    }

    None
}

fn value_as_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => items.first().and_then(value_as_message),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_field_errors_win_over_everything() {
        let body = r#"{"detail": "later", "non_field_errors": ["Overlapping booking"]}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Overlapping booking")
        );
    }

    #[test]
    fn detail_beats_field_errors() {
        let body = r#"{"name": ["This field is required."], "detail": "Invalid input."}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Invalid input."));
    }

    #[test]
    fn bare_string_bodies_pass_through() {
        assert_eq!(
            extract_error_message(r#""Something broke""#).as_deref(),
            Some("Something broke")
        );
        assert_eq!(
            extract_error_message("plain text failure").as_deref(),
            Some("plain text failure")
        );
    }

    #[test]
    fn error_key_then_first_field_value() {
        assert_eq!(
            extract_error_message(r#"{"error": "QR code expired"}"#).as_deref(),
            Some("QR code expired")
        );
        assert_eq!(
            extract_error_message(r#"{"email": ["Enter a valid email address."]}"#).as_deref(),
            Some("Enter a valid email address.")
        );
    }

    #[test]
    fn empty_bodies_yield_nothing() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("{}"), None);
        assert_eq!(extract_error_message("   "), None);
    }
}
