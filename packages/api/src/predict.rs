//! Model inference endpoints: yield, crop recommendation and pest detection.

use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    CropRecommendation, CropRecommendationRequest, PestDetection, YieldPrediction, YieldRequest,
};

impl ApiClient {
    pub async fn predict_yield(&self, request: &YieldRequest) -> ApiResult<YieldPrediction> {
        request.validate().map_err(ApiError::Invalid)?;
        self.post("/predict/yield", &request.to_payload()).await
    }

    pub async fn recommend_crop(
        &self,
        request: &CropRecommendationRequest,
    ) -> ApiResult<CropRecommendation> {
        self.post("/crop/recommendation", request).await
    }

    /// Upload a leaf photo as the multipart field `image`.
    pub async fn detect_pest(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<PestDetection> {
        if bytes.is_empty() {
            return Err(ApiError::Invalid("No image file provided".to_string()));
        }
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("image", part);
        self.post_multipart("/detect/pest", form).await
    }
}
