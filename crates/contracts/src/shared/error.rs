//! Error types for remote calls and dialog-side validation

use thiserror::Error;

/// Toast text used when the server gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure of a list, stats or mutation request.
///
/// Transport errors and `success: false` bodies end up here alike, so the UI
/// has exactly one failure path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Http { status: u16, message: Option<String> },
    #[error("{0}")]
    Application(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Http { status, .. } => format!("Request failed with status {}", status),
            ApiError::Application(message) if !message.trim().is_empty() => message.clone(),
            ApiError::Application(_) | ApiError::Network(_) | ApiError::Decode(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// First non-blank value among the `error`, `message` and `details` fields.
pub fn pick_server_message(
    error: Option<&str>,
    message: Option<&str>,
    details: Option<&str>,
) -> Option<String> {
    [error, message, details]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Reason a dialog refuses to submit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
    #[error("{field} cannot exceed {max:.2}")]
    Exceeds { field: &'static str, max: f64 },
    #[error("the new value is the same as the current one")]
    Unchanged,
}

/// Returns the trimmed value or `Required` when it is blank.
pub fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed)
    }
}

/// Parses a strictly positive money amount typed by the user.
pub fn parse_positive_amount(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    let raw = require(value, field)?.replace(',', ".");
    let amount: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(field))?;
    if !amount.is_finite() {
        return Err(ValidationError::InvalidNumber(field));
    }
    if amount <= 0.0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(amount)
}

/// Parses a non-negative amount (balances may legitimately be zero).
pub fn parse_non_negative_amount(
    value: &str,
    field: &'static str,
) -> Result<f64, ValidationError> {
    let raw = require(value, field)?.replace(',', ".");
    let amount: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(field))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidNumber(field));
    }
    Ok(amount)
}

/// Parses a percentage within `0..=100`.
pub fn parse_percent(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    let raw = require(value, field)?.replace(',', ".");
    let percent: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(field))?;
    if !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field,
            min: 0,
            max: 100,
        });
    }
    Ok(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Http {
            status: 422,
            message: Some("Insufficient balance".into()),
        };
        assert_eq!(err.user_message(), "Insufficient balance");

        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Request failed with status 500");

        assert_eq!(
            ApiError::Application("  ".into()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_pick_server_message_order() {
        assert_eq!(
            pick_server_message(None, Some("Not found"), Some("id=4")),
            Some("Not found".to_string())
        );
        assert_eq!(
            pick_server_message(Some(""), None, Some("Provider offline")),
            Some("Provider offline".to_string())
        );
        assert_eq!(pick_server_message(None, Some("   "), None), None);
    }

    #[test]
    fn test_amount_parsing() {
        assert_eq!(parse_positive_amount("12,50", "Amount"), Ok(12.5));
        assert_eq!(
            parse_positive_amount("", "Amount"),
            Err(ValidationError::Required("Amount"))
        );
        assert_eq!(
            parse_positive_amount("0", "Amount"),
            Err(ValidationError::NotPositive("Amount"))
        );
        assert_eq!(
            parse_positive_amount("abc", "Amount"),
            Err(ValidationError::InvalidNumber("Amount"))
        );
        assert_eq!(parse_non_negative_amount("0", "Balance"), Ok(0.0));
    }

    #[test]
    fn test_percent_range() {
        assert_eq!(parse_percent("15", "Discount"), Ok(15.0));
        assert!(matches!(
            parse_percent("101", "Discount"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
