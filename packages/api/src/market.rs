//! `/api/market/*` and `/api/advisory/`.

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{CropAdvisory, MarketPriceEntry, OneOrMany, PricePoint, Trend};

impl ApiClient {
    pub async fn market_prices(&self) -> ApiResult<Vec<MarketPriceEntry>> {
        self.get("/market/prices").await
    }

    /// Backend crop search. A blank query returns every price; no match is an empty list.
    pub async fn search_market(&self, query: &str) -> ApiResult<Vec<MarketPriceEntry>> {
        let query = query.trim();
        if query.is_empty() {
            return self.market_prices().await;
        }
        match self
            .get_query::<OneOrMany<MarketPriceEntry>, _>("/market/search", &[("q", query)])
            .await
        {
            Ok(found) => Ok(found.into_vec()),
            Err(ApiError::Status { status: 404, .. }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Ranked gainers from the backend. When the endpoint is unavailable or
    /// answers with nothing, the first rising entries of `fallback` are used.
    pub async fn top_gainers(
        &self,
        limit: usize,
        fallback: &[MarketPriceEntry],
    ) -> Vec<MarketPriceEntry> {
        match self
            .get_query::<Vec<MarketPriceEntry>, _>("/market/top-gainers", &[("limit", limit)])
            .await
        {
            Ok(mut ranked) if !ranked.is_empty() => {
                ranked.truncate(limit);
                ranked
            }
            Ok(_) => {
                tracing::debug!("no top gainers from the backend, using the price list");
                first_rising(fallback, limit)
            }
            Err(e) => {
                tracing::debug!("top gainers unavailable, using the price list: {e}");
                first_rising(fallback, limit)
            }
        }
    }

    pub async fn price_history(&self, crop: &str) -> ApiResult<Vec<PricePoint>> {
        self.get(&format!("/market/history/{}", crop.trim().to_lowercase()))
            .await
    }

    pub async fn crop_advisory(&self, crop: &str) -> ApiResult<CropAdvisory> {
        self.get_query("/advisory/", &[("crop", crop.trim())]).await
    }
}

/// The first `limit` rising entries, in list order.
pub fn first_rising(prices: &[MarketPriceEntry], limit: usize) -> Vec<MarketPriceEntry> {
    prices
        .iter()
        .filter(|p| p.trend == Trend::Up)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceChange;

    fn entry(crop: &str, change: f64, trend: Trend) -> MarketPriceEntry {
        MarketPriceEntry {
            crop: crop.to_string(),
            price: 1000.0,
            change: PriceChange(change),
            trend,
            ..Default::default()
        }
    }

    #[test]
    fn fallback_keeps_list_order() {
        let prices = vec![
            entry("Wheat", 5.0, Trend::Up),
            entry("Rice", -2.0, Trend::Down),
            entry("Cotton", 8.0, Trend::Up),
            entry("Sugarcane", 3.0, Trend::Up),
            entry("Maize", 1.0, Trend::Up),
        ];
        let top: Vec<String> = first_rising(&prices, 3).into_iter().map(|p| p.crop).collect();
        assert_eq!(top, vec!["Wheat", "Cotton", "Sugarcane"]);
        assert!(first_rising(&[], 3).is_empty());
    }
}
