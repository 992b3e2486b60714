//! Response bodies of the admin REST API.
//!
//! Every endpoint answers `{ success, ... }`; `success: false` in a 2xx body is
//! turned into [`ApiError::Application`] here so callers see one failure path.

use super::error::{pick_server_message, ApiError};
use super::pagination::{Page, PaginationMeta};
use serde::Deserialize;

/// `GET /api/admin/<collection>` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T, S> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
    #[serde(default)]
    pub stats: Option<S>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl<T, S> ListEnvelope<T, S> {
    /// `requested_limit` stands in when the server omits `pagination` or
    /// its `limit`.
    pub fn into_page(self, requested_limit: u32) -> Result<(Page<T>, Option<S>), ApiError> {
        if self.success == Some(false) {
            return Err(application_error(
                self.error.as_deref(),
                self.message.as_deref(),
                self.details.as_deref(),
            ));
        }
        let mut meta = self.pagination.unwrap_or_else(|| PaginationMeta {
            page: 1,
            limit: requested_limit,
            total: self.data.len() as u64,
            total_pages: u32::from(!self.data.is_empty()),
            has_next: false,
            has_prev: false,
        });
        if meta.limit == 0 {
            meta.limit = requested_limit;
        }
        Ok((Page::from_parts(self.data, meta), self.stats))
    }
}

/// `{ success, data }` body of the stats and lookup endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<D> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<D>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl<D> DataEnvelope<D> {
    pub fn into_data(self) -> Result<D, ApiError> {
        if self.success == Some(false) {
            return Err(application_error(
                self.error.as_deref(),
                self.message.as_deref(),
                self.details.as_deref(),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response carries no data".to_string()))
    }
}

/// Body of every mutation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MutationEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl MutationEnvelope {
    /// Server text for the success toast, if any.
    pub fn into_result(self) -> Result<Option<String>, ApiError> {
        if self.success == Some(false) {
            return Err(application_error(
                self.error.as_deref(),
                self.message.as_deref(),
                self.details.as_deref(),
            ));
        }
        Ok(self
            .message
            .filter(|m| !m.trim().is_empty()))
    }

    /// Message to attach to an HTTP error status.
    pub fn server_message(&self) -> Option<String> {
        pick_server_message(
            self.error.as_deref(),
            self.message.as_deref(),
            self.details.as_deref(),
        )
    }
}

fn application_error(
    error: Option<&str>,
    message: Option<&str>,
    details: Option<&str>,
) -> ApiError {
    ApiError::Application(pick_server_message(error, message, details).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::GENERIC_ERROR_MESSAGE;
    use serde_json::json;

    #[test]
    fn test_list_envelope_into_page() {
        let body = json!({
            "success": true,
            "data": [1, 2],
            "pagination": {
                "page": 2, "limit": 2, "total": 6, "totalPages": 3,
                "hasNext": false, "hasPrev": false
            },
            "stats": { "pending": 4 }
        });
        let env: ListEnvelope<u32, serde_json::Value> = serde_json::from_value(body).unwrap();
        let (page, stats) = env.into_page(25).unwrap();
        assert_eq!(page.items(), &[1, 2]);
        assert!(page.has_next());
        assert!(page.has_prev());
        assert_eq!(stats.unwrap()["pending"], 4);
    }

    #[test]
    fn test_list_envelope_without_pagination() {
        let env: ListEnvelope<u32, ()> =
            serde_json::from_value(json!({ "success": true, "data": [5, 6, 7] })).unwrap();
        let (page, _) = env.into_page(25).unwrap();
        assert_eq!(page.total(), 3);
        assert_eq!(page.total_pages(), 1);
        assert!(!page.has_next());
    }

    #[test]
    fn test_list_envelope_pagination_without_limit() {
        let body = json!({
            "success": true,
            "data": [1, 2, 3],
            "pagination": { "page": 1, "total": 3, "totalPages": 1 }
        });
        let env: ListEnvelope<u32, ()> = serde_json::from_value(body).unwrap();
        let (page, _) = env.into_page(25).unwrap();
        assert_eq!(page.items(), &[1, 2, 3]);
        assert_eq!(page.limit(), 25);
        assert!(!page.has_next());
    }

    #[test]
    fn test_success_false_is_an_error() {
        let env: ListEnvelope<u32, ()> = serde_json::from_value(
            json!({ "success": false, "error": "Database unavailable" }),
        )
        .unwrap();
        assert_eq!(
            env.into_page(25).unwrap_err(),
            ApiError::Application("Database unavailable".to_string())
        );

        let env: MutationEnvelope =
            serde_json::from_value(json!({ "success": false })).unwrap();
        let err = env.into_result().unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_mutation_message_fallbacks() {
        let env: MutationEnvelope = serde_json::from_value(
            json!({ "success": false, "details": "transaction id already used" }),
        )
        .unwrap();
        assert_eq!(
            env.into_result().unwrap_err().user_message(),
            "transaction id already used"
        );

        let env: MutationEnvelope =
            serde_json::from_value(json!({ "success": true, "message": "Payout sent" })).unwrap();
        assert_eq!(env.into_result().unwrap(), Some("Payout sent".to_string()));
    }

    #[test]
    fn test_data_envelope() {
        let env: DataEnvelope<u32> =
            serde_json::from_value(json!({ "success": true, "data": 12 })).unwrap();
        assert_eq!(env.into_data().unwrap(), 12);

        let env: DataEnvelope<u32> =
            serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(matches!(env.into_data(), Err(ApiError::Decode(_))));
    }
}
