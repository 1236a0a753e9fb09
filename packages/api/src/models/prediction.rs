use serde::{Deserialize, Serialize};

use super::lenient_f64;

/// The yield prediction form. Persisted as the draft between the form page
/// and the results page, so field names follow what the backend model expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldRequest {
    #[serde(rename = "District", default)]
    pub district: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Crop", default)]
    pub crop: String,
    #[serde(default)]
    pub soil_quality: String,
    #[serde(default)]
    pub avg_rainfall: String,
    #[serde(default)]
    pub avg_temperature: String,
    /// Acres; the results page multiplies the per-acre yield by this.
    #[serde(default = "default_land_size")]
    pub land_size: String,
}

fn default_land_size() -> String {
    "1".to_string()
}

impl Default for YieldRequest {
    fn default() -> Self {
        Self {
            district: String::new(),
            year: String::new(),
            crop: String::new(),
            soil_quality: String::new(),
            avg_rainfall: String::new(),
            avg_temperature: String::new(),
            land_size: default_land_size(),
        }
    }
}

impl YieldRequest {
    pub fn validate(&self) -> Result<(), String> {
        for (value, label) in [
            (&self.district, "District"),
            (&self.year, "Year"),
            (&self.crop, "Crop"),
            (&self.soil_quality, "Soil quality"),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{label} is required"));
            }
        }
        for (value, label) in [
            (&self.year, "Year"),
            (&self.avg_rainfall, "Average rainfall"),
            (&self.avg_temperature, "Average temperature"),
            (&self.land_size, "Land size"),
        ] {
            if value.trim().parse::<f64>().is_err() {
                return Err(format!("{label} must be a number"));
            }
        }
        Ok(())
    }

    /// Land size in acres; anything unparsable or non-positive counts as one acre.
    pub fn acres(&self) -> f64 {
        match self.land_size.trim().parse::<f64>() {
            Ok(acres) if acres > 0.0 => acres,
            _ => 1.0,
        }
    }

    pub(crate) fn to_payload(&self) -> serde_json::Value {
        let num = |s: &str| s.trim().parse::<f64>().ok();
        serde_json::json!({
            "District": self.district,
            "Year": num(&self.year),
            "Crop": self.crop,
            "crop_name": self.crop,
            "soil_quality": self.soil_quality,
            "avg_rainfall": num(&self.avg_rainfall),
            "avg_temperature": num(&self.avg_temperature),
            "land_size": self.acres(),
        })
    }
}

/// `/api/predict/yield` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YieldPrediction {
    #[serde(deserialize_with = "lenient_f64")]
    pub predicted_yield: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub confidence: f64,
}

fn default_unit() -> String {
    "kg/acre".to_string()
}

/// A stored prediction from `/api/predict/history`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default, deserialize_with = "store::models::string_or_number")]
    pub id: String,
    #[serde(default, alias = "type")]
    pub prediction_type: Option<String>,
    #[serde(default)]
    pub input_data: Option<String>,
    #[serde(default)]
    pub result_data: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PredictionRecord {
    pub fn kind(&self) -> &str {
        self.prediction_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Other")
    }
}

/// Soil and climate readings for the crop recommender. `district` is the
/// backend's district code, not the display name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CropRecommendationRequest {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub district: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub recommended_crop: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub confidence: f64,
}

/// `/api/detect/pest` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PestDetection {
    #[serde(default)]
    pub detected: bool,
    #[serde(default, alias = "pestName")]
    pub pest_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub confidence: f64,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, rename = "preventiveMeasures", alias = "preventive_measures")]
    pub preventive_measures: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat() -> YieldRequest {
        YieldRequest {
            district: "Multan".into(),
            year: "2025".into(),
            crop: "Wheat".into(),
            soil_quality: "Good".into(),
            avg_rainfall: "450".into(),
            avg_temperature: "24.5".into(),
            land_size: "10".into(),
        }
    }

    #[test]
    fn draft_keys_match_stored_form() {
        let json = serde_json::to_value(wheat()).unwrap();
        assert_eq!(json["District"], "Multan");
        assert_eq!(json["Crop"], "Wheat");
        assert_eq!(json["avg_rainfall"], "450");

        // Drafts saved before land size existed still load.
        let old: YieldRequest = serde_json::from_str(
            r#"{"District": "Okara", "Year": "2024", "Crop": "Rice", "soil_quality": "Poor",
                "avg_rainfall": "600", "avg_temperature": "30"}"#,
        )
        .unwrap();
        assert_eq!(old.acres(), 1.0);
        assert!(old.validate().is_ok());
    }

    #[test]
    fn validation_messages() {
        let mut req = wheat();
        assert!(req.validate().is_ok());
        req.crop.clear();
        assert_eq!(req.validate().unwrap_err(), "Crop is required");
        req = wheat();
        req.avg_temperature = "warm".into();
        assert_eq!(req.validate().unwrap_err(), "Average temperature must be a number");
    }

    #[test]
    fn payload_is_numeric() {
        let payload = wheat().to_payload();
        assert_eq!(payload["Year"], 2025.0);
        assert_eq!(payload["avg_temperature"], 24.5);
        assert_eq!(payload["land_size"], 10.0);
        assert_eq!(payload["crop_name"], "Wheat");
    }

    #[test]
    fn history_kind_fallback() {
        let records: Vec<PredictionRecord> = serde_json::from_str(
            r#"[{"id": 1, "user_id": 2, "prediction_type": "yield", "input_data": "{}",
                 "result_data": "{}", "image_path": null, "created_at": "2025-01-01T00:00:00"},
                {"id": 2, "prediction_type": null}]"#,
        )
        .unwrap();
        assert_eq!(records[0].kind(), "yield");
        assert_eq!(records[1].kind(), "Other");
    }

    #[test]
    fn crop_request_uses_short_nutrient_keys() {
        let json = serde_json::to_value(CropRecommendationRequest {
            nitrogen: 90.0,
            district: "ryk".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["N"], 90.0);
        assert_eq!(json["district"], "ryk");
    }

    #[test]
    fn pest_result_from_model() {
        let result: PestDetection = serde_json::from_str(
            r#"{"detected": true, "pest_name": "Aphids", "confidence": 87.2, "severity": "Medium",
                "recommendations": ["Neem oil"], "preventiveMeasures": ["Sticky traps"]}"#,
        )
        .unwrap();
        assert_eq!(result.pest_name, "Aphids");
        assert_eq!(result.preventive_measures, vec!["Sticky traps"]);
    }
}
