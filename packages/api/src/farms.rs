//! `/api/farms/*`: the signed-in user's farms.

use crate::client::{Ack, ApiClient};
use crate::error::{ApiError, ApiResult};
use crate::models::{Farm, FarmDraft};

impl ApiClient {
    pub async fn list_farms(&self) -> ApiResult<Vec<Farm>> {
        self.get("/farms/").await
    }

    pub async fn create_farm(&self, draft: &FarmDraft) -> ApiResult<Farm> {
        draft.validate().map_err(ApiError::Invalid)?;
        self.post("/farms/", &draft.to_payload()).await
    }

    pub async fn update_farm(&self, id: &str, draft: &FarmDraft) -> ApiResult<Farm> {
        draft.validate().map_err(ApiError::Invalid)?;
        self.put(&format!("/farms/{id}"), &draft.to_payload()).await
    }

    pub async fn delete_farm(&self, id: &str) -> ApiResult<Ack> {
        self.delete(&format!("/farms/{id}")).await
    }
}
