use crate::shared::api_utils::{api_url, get_json, post_json};
use contracts::shared::config::ApiConfig;
use contracts::shared::envelope::DataEnvelope;
use contracts::shared::error::ApiError;
use contracts::usecases::u501_service_import::{
    ImportRequest, ImportResult, ProviderInfo, ProviderService,
};

/// `GET /api/admin/providers`
pub async fn fetch_providers(config: &ApiConfig) -> Result<Vec<ProviderInfo>, ApiError> {
    let url = api_url(config, "/api/admin/providers");
    let envelope: DataEnvelope<Vec<ProviderInfo>> = get_json(&url).await?;
    envelope.into_data()
}

/// `GET /api/admin/providers/<id>/services`
pub async fn fetch_provider_services(
    config: &ApiConfig,
    provider_id: &str,
) -> Result<Vec<ProviderService>, ApiError> {
    let url = api_url(
        config,
        &format!(
            "/api/admin/providers/{}/services",
            urlencoding::encode(provider_id)
        ),
    );
    let envelope: DataEnvelope<Vec<ProviderService>> = get_json(&url).await?;
    envelope.into_data()
}

/// `POST /api/admin/services/import`
pub async fn import_services(
    config: &ApiConfig,
    request: &ImportRequest,
) -> Result<ImportResult, ApiError> {
    let url = api_url(config, "/api/admin/services/import");
    let envelope: DataEnvelope<ImportResult> = post_json(&url, request).await?;
    envelope.into_data()
}
