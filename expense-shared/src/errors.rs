//! # API Error Types
//!
//! Every failure of a call to the expense service is normalized into
//! [`ApiError`]. Views never show the variant itself; they reduce it to a
//! single string with [`ApiError::message_or`] or [`ApiError::payload_message`].

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name to messages, as returned by the service for invalid bodies.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure taxonomy of the API client adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {message}")]
    Transport { message: String },

    /// 401: missing or expired credentials
    #[error("Unauthorized{}", suffix(.detail))]
    Unauthorized { detail: Option<String> },

    /// 403: authenticated but not allowed, e.g. non-staff on admin data
    #[error("Forbidden{}", suffix(.detail))]
    Forbidden { detail: Option<String> },

    /// 404: unknown resource such as a missing expense id
    #[error("Not found{}", suffix(.detail))]
    NotFound { detail: Option<String> },

    /// 400/422 with per-field messages
    #[error("Validation failed: {}", flatten_fields(.fields))]
    Validation {
        fields: FieldErrors,
        detail: Option<String>,
    },

    /// Any other non-success status
    #[error("Server error {status}{}", suffix(.detail))]
    Server { status: u16, detail: Option<String> },

    /// The body did not match the expected shape
    #[error("Unexpected response: {message}")]
    Decode { message: String },

    /// Client configuration could not be used
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl ApiError {
    /// Create a transport error
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode<T: Into<String>>(message: T) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<T: Into<String>>(message: T) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Classify a non-success response from its status code and raw body.
    ///
    /// The body may be `{"detail": "..."}`, a field map such as
    /// `{"amount": ["Amount must be greater than zero."]}`, or not JSON at all.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let detail = parsed
            .as_ref()
            .and_then(|value| value.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string);

        match status {
            400 | 422 => Self::Validation {
                fields: parsed.as_ref().map(collect_fields).unwrap_or_default(),
                detail,
            },
            401 => Self::Unauthorized { detail },
            403 => Self::Forbidden { detail },
            404 => Self::NotFound { detail },
            _ => Self::Server { status, detail },
        }
    }

    /// Server-provided `detail` message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail }
            | Self::Forbidden { detail }
            | Self::NotFound { detail }
            | Self::Validation { detail, .. }
            | Self::Server { detail, .. } => detail.as_deref(),
            Self::Transport { .. } | Self::Decode { .. } | Self::Config { .. } => None,
        }
    }

    /// HTTP status behind the error, when there was a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(400),
            Self::Server { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } | Self::Config { .. } => None,
        }
    }

    /// Field errors of a validation failure; empty otherwise.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// The server's `detail`, else `fallback`.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    /// Like [`ApiError::message_or`] but also surfaces field errors, one
    /// `field: message` line each.
    #[must_use]
    pub fn payload_message(&self, fallback: &str) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_string();
        }
        match self.field_errors() {
            Some(fields) if !fields.is_empty() => flatten_fields(fields),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::decode(error.to_string())
        } else if error.is_builder() {
            Self::config(error.to_string())
        } else {
            Self::transport(error.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(error: url::ParseError) -> Self {
        Self::config(error.to_string())
    }
}

/// Join field errors as `field: message` lines, sorted by field name.
#[must_use]
pub fn flatten_fields(fields: &FieldErrors) -> String {
    fields
        .iter()
        .flat_map(|(field, messages)| {
            messages
                .iter()
                .map(move |message| format!("{field}: {message}"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|text| format!(": {text}"))
        .unwrap_or_default()
}

fn collect_fields(value: &Value) -> FieldErrors {
    let Some(object) = value.as_object() else {
        return FieldErrors::new();
    };
    object
        .iter()
        .filter(|(key, _)| key.as_str() != "detail")
        .filter_map(|(key, value)| {
            let messages: Vec<String> = match value {
                Value::String(text) => vec![text.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            };
            (!messages.is_empty()).then(|| (key.clone(), messages))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(401, "Unauthorized" ; "unauthorized")]
    #[test_case(403, "Forbidden" ; "forbidden")]
    #[test_case(404, "Not found" ; "not found")]
    #[test_case(500, "Server error 500" ; "server")]
    fn status_codes_map_to_variants(status: u16, prefix: &str) {
        let error = ApiError::from_response(status, "");
        assert_eq!(error.status(), Some(status));
        assert!(error.to_string().starts_with(prefix), "{error}");
    }

    #[test]
    fn detail_is_preferred_over_fallback() {
        let error = ApiError::from_response(
            401,
            r#"{"detail":"No active account found with the given credentials"}"#,
        );
        assert_eq!(
            error.message_or("Login failed"),
            "No active account found with the given credentials"
        );
        assert_eq!(
            error.to_string(),
            "Unauthorized: No active account found with the given credentials"
        );
    }

    #[test]
    fn fallback_used_without_detail() {
        let error = ApiError::transport("connection refused");
        assert_eq!(error.message_or("Failed to fetch expenses"), "Failed to fetch expenses");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn validation_body_collects_field_errors() {
        let body = r#"{"username":["This username already exists."],"confirm_password":["Password do not match."]}"#;
        let error = ApiError::from_response(400, body);
        let fields = error.field_errors().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(
            error.payload_message("Registration failed"),
            "confirm_password: Password do not match.\nusername: This username already exists."
        );
        assert_eq!(error.message_or("Registration failed"), "Registration failed");
    }

    #[test]
    fn non_json_body_keeps_status() {
        let error = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(error, ApiError::Server { status: 502, detail: None });
        assert_eq!(error.payload_message("Request failed"), "Request failed");
    }

    #[test]
    fn string_field_values_are_accepted() {
        let error = ApiError::from_response(400, r#"{"amount":"Amount must be greater than zero."}"#);
        assert_eq!(
            error.payload_message("Failed"),
            "amount: Amount must be greater than zero."
        );
    }
}
