//! Stats endpoint.

use super::api_get;
use secure_files_types::{ApiError, StatsSnapshot, UiConfig};

/// One read of `GET {api_base}{stats_path}`.
pub async fn fetch_stats(config: &UiConfig) -> Result<StatsSnapshot, ApiError> {
    api_get(&config.api_base, &config.stats_path).await
}
