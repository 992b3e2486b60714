//! API utilities for frontend-backend communication
//!
//! Every admin endpoint answers with a `{ success, ... }` envelope. The helpers
//! here turn transport failures, non-2xx statuses and `success: false` bodies
//! into one [`ApiError`] so pages have a single failure path.

use contracts::domain::common::AdminResource;
use contracts::shared::config::ApiConfig;
use contracts::shared::envelope::{DataEnvelope, ListEnvelope, MutationEnvelope};
use contracts::shared::error::ApiError;
use contracts::shared::mutation::{HttpMethod, MutationRequest};
use contracts::shared::pagination::Page;
use contracts::shared::query::{ListParams, StatsFilter};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise the current window location
/// with the configured API port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    if let Some(base) = config.base_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    format!("{}{}", api_base(config), path)
}

/// Appends `params` as a query string; nothing is appended when they are empty.
pub fn with_query<P: Serialize>(url: String, params: &P) -> String {
    match serde_qs::to_string(params) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", url, qs),
        Ok(_) => url,
        Err(e) => {
            log::warn!("Failed to encode query for {}: {}", url, e);
            url
        }
    }
}

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

/// Rejects non-2xx responses, keeping the server's message when it sent one.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<MutationEnvelope>()
        .await
        .ok()
        .and_then(|body| body.server_message());
    Err(ApiError::Http { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET returning a decoded body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = with_credentials(Request::get(url))
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check_status(response).await?).await
}

/// POST of a JSON body returning a decoded body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("POST {}", url);
    let request = with_credentials(Request::post(url))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check_status(response).await?).await
}

/// `GET /api/admin/<collection>?page=&limit=&status=&search=`
pub async fn fetch_list<R: AdminResource>(
    config: &ApiConfig,
    params: &ListParams,
) -> Result<Page<R>, ApiError> {
    let url = with_query(api_url(config, &format!("/api/admin/{}", R::COLLECTION)), params);
    // Stats come from the stats endpoint, which honours the stats filter.
    let envelope: ListEnvelope<R, R::Stats> = get_json(&url).await?;
    envelope.into_page(params.limit).map(|(page, _)| page)
}

/// `GET /api/admin/<collection>/stats[?period=&role=]`
pub async fn fetch_stats<R: AdminResource>(
    config: &ApiConfig,
    filter: &StatsFilter,
) -> Result<R::Stats, ApiError> {
    let url = with_query(
        api_url(config, &format!("/api/admin/{}/stats", R::COLLECTION)),
        filter,
    );
    let envelope: DataEnvelope<R::Stats> = get_json(&url).await?;
    envelope.into_data()
}

/// Sends one mutation and returns the server's success message, if any.
pub async fn send_mutation(
    config: &ApiConfig,
    request: &MutationRequest,
) -> Result<Option<String>, ApiError> {
    let path = request.path_with(|id| urlencoding::encode(id).into_owned());
    let url = api_url(config, &path);
    log::info!("{} {}", request.method().as_str(), url);

    let builder = match request.method() {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Patch => Request::patch(&url),
        HttpMethod::Delete => Request::delete(&url),
    };
    let builder = with_credentials(builder);
    let response = match &request.payload {
        Some(payload) => builder
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = check_status(response).await?;
    // DELETE may answer 204 without a body.
    if response.status() == 204 {
        return Ok(None);
    }
    let envelope: MutationEnvelope = decode(response).await?;
    envelope.into_result()
}
