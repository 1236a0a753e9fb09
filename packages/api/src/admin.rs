//! `/api/admin/*`: the admin console's analytics plus the network report
//! every signed-in client sends.

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{ConnectivityStat, HealthMetric, IspStat, LogPage, NetworkReport, UndoOutcome};

impl ApiClient {
    /// Revert the last admin action recorded by the backend.
    pub async fn undo(&self) -> ApiResult<UndoOutcome> {
        self.post("/admin/undo", &serde_json::json!({})).await
    }

    pub async fn connectivity_stats(&self) -> ApiResult<Vec<ConnectivityStat>> {
        self.get("/admin/connectivity-stats").await
    }

    pub async fn isp_performance(&self) -> ApiResult<Vec<IspStat>> {
        self.get("/admin/isp-performance").await
    }

    pub async fn system_health(&self) -> ApiResult<Vec<HealthMetric>> {
        self.get("/admin/system/health").await
    }

    /// Server log lines, filtered on the backend when `query` is non-blank.
    pub async fn system_logs(&self, query: &str) -> ApiResult<Vec<String>> {
        let query = query.trim();
        let page: LogPage = if query.is_empty() {
            self.get("/admin/logs").await?
        } else {
            self.get_query("/admin/logs", &[("q", query)]).await?
        };
        Ok(page.logs)
    }

    pub async fn report_network(&self, report: &NetworkReport) -> ApiResult<()> {
        let _: serde_json::Value = self.post("/admin/network/report", report).await?;
        Ok(())
    }
}
