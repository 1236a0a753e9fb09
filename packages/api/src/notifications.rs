use crate::client::{Ack, ApiClient};
use crate::error::ApiResult;
use crate::models::Notification;

impl ApiClient {
    pub async fn notifications(&self) -> ApiResult<Vec<Notification>> {
        self.get("/notifications/").await
    }

    pub async fn mark_notification_read(&self, id: &str) -> ApiResult<Ack> {
        self.put(&format!("/notifications/{id}/read"), &serde_json::json!({}))
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> ApiResult<Ack> {
        self.put("/notifications/mark-all-read", &serde_json::json!({}))
            .await
    }
}
