//! `/api/weather/all`: current conditions, forecast and advisories in one call.

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::WeatherReport;

impl ApiClient {
    pub async fn weather_all(&self, location: &str) -> ApiResult<WeatherReport> {
        self.get_query("/weather/all", &[("location", location.trim())])
            .await
    }
}
