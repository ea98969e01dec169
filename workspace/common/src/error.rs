use thiserror::Error;

use crate::prediction::FormField;

/// Failures of a call to the prediction service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("Request failed: {0}")]
    Network(String),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// The service answered with a non-success status
    #[error("HTTP error: {status}{}", status_detail(.message))]
    Status { status: u16, message: Option<String> },

    /// The service answered but the body is not a prediction
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn status_detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default()
}

/// Failures building a typed request out of raw form values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Please select a value for {}", .0.label())]
    MissingChoice(FormField),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let bare = ApiError::Status { status: 500, message: None };
        assert_eq!(bare.to_string(), "HTTP error: 500");

        let detailed = ApiError::Status {
            status: 400,
            message: Some("No input data provided".to_string()),
        };
        assert_eq!(detailed.to_string(), "HTTP error: 400 (No input data provided)");
    }

    #[test]
    fn test_form_error_names_the_field() {
        let err = FormError::MissingChoice(FormField::PaymentMethod);
        assert_eq!(err.to_string(), "Please select a value for Payment Method");
    }
}
