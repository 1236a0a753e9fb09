//! `/api/dashboard/*` and the farmer dashboard's batched load.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    DashboardAlert, DashboardStats, MarketPriceEntry, PredictedYield, PredictionRecord, YieldTrend,
};

/// Everything the farmer dashboard shows, fetched in one go.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub alerts: Vec<DashboardAlert>,
    pub predicted_yields: Vec<PredictedYield>,
    pub yield_trends: Vec<YieldTrend>,
    pub prices: Vec<MarketPriceEntry>,
    pub history: Vec<PredictionRecord>,
}

impl DashboardOverview {
    /// The first market entry, shown as the headline price.
    pub fn headline_price(&self) -> Option<&MarketPriceEntry> {
        self.prices.first()
    }
}

/// `/api/predict/history` is an array; a legacy build answered with two lists.
#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryPayload {
    Flat(Vec<PredictionRecord>),
    Split {
        #[serde(default)]
        session_history: Vec<PredictionRecord>,
        #[serde(default)]
        db_history: Vec<PredictionRecord>,
    },
}

impl HistoryPayload {
    fn into_records(self) -> Vec<PredictionRecord> {
        match self {
            HistoryPayload::Flat(records) => records,
            HistoryPayload::Split {
                mut session_history,
                db_history,
            } => {
                session_history.extend(db_history);
                session_history
            }
        }
    }
}

impl ApiClient {
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get("/dashboard/stats").await
    }

    pub async fn dashboard_alerts(&self) -> ApiResult<Vec<DashboardAlert>> {
        self.get("/dashboard/alerts").await
    }

    pub async fn predicted_yields(&self) -> ApiResult<Vec<PredictedYield>> {
        self.get("/dashboard/predicted-yields").await
    }

    pub async fn yield_trends(&self) -> ApiResult<Vec<YieldTrend>> {
        self.get("/dashboard/yield-trends").await
    }

    /// `/api/predict/history`, optionally narrowed to one prediction type.
    pub async fn prediction_history(&self, kind: Option<&str>) -> ApiResult<Vec<PredictionRecord>> {
        let payload: HistoryPayload = match kind {
            Some(kind) => self.get_query("/predict/history", &[("type", kind)]).await?,
            None => self.get("/predict/history").await?,
        };
        Ok(payload.into_records())
    }

    /// Fetch the six dashboard sources concurrently.
    ///
    /// A 401 from the stats or alerts call fails the whole load with
    /// [`ApiError::Unauthorized`] so the caller can sign out. A transport
    /// failure on any call fails the whole load as well. An HTTP error status
    /// only empties its own section.
    pub async fn dashboard_overview(&self) -> ApiResult<DashboardOverview> {
        let (stats, alerts, yields, trends, prices, history) = futures::join!(
            self.dashboard_stats(),
            self.dashboard_alerts(),
            self.predicted_yields(),
            self.yield_trends(),
            self.market_prices(),
            self.prediction_history(None),
        );

        if let Err(e @ ApiError::Unauthorized(_)) = stats {
            return Err(e);
        }
        if let Err(e @ ApiError::Unauthorized(_)) = alerts {
            return Err(e);
        }
        let stats = fail_offline(stats)?;
        let alerts = fail_offline(alerts)?;
        let yields = fail_offline(yields)?;
        let trends = fail_offline(trends)?;
        let prices = fail_offline(prices)?;
        let history = fail_offline(history)?;

        Ok(DashboardOverview {
            stats: or_default("dashboard stats", stats),
            alerts: or_default("dashboard alerts", alerts),
            predicted_yields: or_default("predicted yields", yields),
            yield_trends: or_default("yield trends", trends),
            prices: or_default("market prices", prices),
            history: or_default("prediction history", history),
        })
    }
}

/// Lift a transport failure out so it aborts the batch; keep everything else.
fn fail_offline<T>(result: ApiResult<T>) -> ApiResult<ApiResult<T>> {
    match result {
        Err(e @ ApiError::Network(_)) => {
            tracing::error!("dashboard load aborted: {e}");
            Err(e)
        }
        other => Ok(other),
    }
}

fn or_default<T: Default>(what: &str, result: ApiResult<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("{what} unavailable: {e}");
        T::default()
    })
}

/// Count predictions by type for the history chart.
///
/// Names are capitalised and keep the order in which each type first appears.
pub fn history_counts(records: &[PredictionRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let name = capitalize(record.kind());
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    counts
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: Option<&str>) -> PredictionRecord {
        PredictionRecord {
            prediction_type: kind.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn counts_by_type_in_first_seen_order() {
        let records = vec![
            record(Some("yield")),
            record(Some("pest")),
            record(Some("yield")),
            record(None),
            record(Some("price")),
        ];
        assert_eq!(
            history_counts(&records),
            vec![
                ("Yield".to_string(), 2),
                ("Pest".to_string(), 1),
                ("Other".to_string(), 1),
                ("Price".to_string(), 1),
            ]
        );
        assert!(history_counts(&[]).is_empty());
    }

    #[test]
    fn legacy_split_history_is_merged() {
        let payload: HistoryPayload = serde_json::from_str(
            r#"{"session_history": [{"type": "yield"}], "db_history": [{"prediction_type": "pest"}]}"#,
        )
        .unwrap();
        let records = payload.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].kind(), "pest");
    }
}
