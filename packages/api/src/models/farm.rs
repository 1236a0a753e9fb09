use serde::{Deserialize, Serialize};

use super::lenient_f64;

/// A farm owned by the current user, as returned by `/api/farms/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    #[serde(deserialize_with = "store::models::string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "size", deserialize_with = "lenient_f64")]
    pub size_acres: f64,
    #[serde(default, alias = "crop")]
    pub current_crop: Option<String>,
    #[serde(default, alias = "soilType")]
    pub soil_type: Option<String>,
    #[serde(default, alias = "irrigationType")]
    pub irrigation_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Farm {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Active")
    }

    pub fn size_label(&self) -> String {
        format!("{} acres", trim_float(self.size_acres))
    }
}

/// Form state for creating or editing a farm. Numeric fields stay as text
/// until [`FarmDraft::validate`] so the form can show what the user typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FarmDraft {
    pub name: String,
    pub location: String,
    #[serde(rename = "size_acres")]
    pub size: String,
    #[serde(rename = "current_crop")]
    pub crop: String,
    pub soil_type: String,
    pub irrigation_type: String,
    pub status: String,
}

impl FarmDraft {
    pub fn from_farm(farm: &Farm) -> Self {
        Self {
            name: farm.name.clone(),
            location: farm.location.clone().unwrap_or_default(),
            size: trim_float(farm.size_acres),
            crop: farm.current_crop.clone().unwrap_or_default(),
            soil_type: farm.soil_type.clone().unwrap_or_default(),
            irrigation_type: farm.irrigation_type.clone().unwrap_or_default(),
            status: farm.status_label().to_string(),
        }
    }

    /// Check required fields: name, location and a positive size.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Farm name is required".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Location is required".to_string());
        }
        match self.size.trim().parse::<f64>() {
            Ok(size) if size > 0.0 => Ok(()),
            _ => Err("Size must be a positive number of acres".to_string()),
        }
    }

    pub(crate) fn to_payload(&self) -> serde_json::Value {
        let size: f64 = self.size.trim().parse().unwrap_or(0.0);
        let status = if self.status.trim().is_empty() {
            "Active"
        } else {
            self.status.trim()
        };
        serde_json::json!({
            "name": self.name.trim(),
            "location": self.location.trim(),
            "size_acres": size,
            "current_crop": non_empty(&self.crop),
            "soil_type": non_empty(&self.soil_type),
            "irrigation_type": non_empty(&self.irrigation_type),
            "status": status,
        })
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farm_from_backend() {
        let farm: Farm = serde_json::from_str(
            r#"{"id": 3, "user_id": 1, "name": "North Field", "location": "Multan",
                "size_acres": 12.5, "soil_type": "Loamy", "irrigation_type": "Drip",
                "current_crop": "Wheat", "status": null,
                "created_at": "2025-01-01T00:00:00", "updated_at": "2025-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(farm.id, "3");
        assert_eq!(farm.current_crop.as_deref(), Some("Wheat"));
        assert_eq!(farm.status_label(), "Active");
        assert_eq!(farm.size_label(), "12.5 acres");
    }

    #[test]
    fn farm_accepts_legacy_camel_case() {
        let farm: Farm = serde_json::from_str(
            r#"{"id": "f1", "name": "Plot", "size": "20", "crop": "Rice",
                "soilType": "Clay", "irrigationType": "Flood", "status": "Active"}"#,
        )
        .unwrap();
        assert_eq!(farm.size_acres, 20.0);
        assert_eq!(farm.size_label(), "20 acres");
        assert_eq!(farm.soil_type.as_deref(), Some("Clay"));
    }

    #[test]
    fn draft_validation() {
        let mut draft = FarmDraft::default();
        assert_eq!(draft.validate().unwrap_err(), "Farm name is required");
        draft.name = "East".into();
        assert_eq!(draft.validate().unwrap_err(), "Location is required");
        draft.location = "Okara".into();
        draft.size = "abc".into();
        assert!(draft.validate().is_err());
        draft.size = "0".into();
        assert!(draft.validate().is_err());
        draft.size = "7.5".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn draft_payload_drops_empty_optionals() {
        let draft = FarmDraft {
            name: " East ".into(),
            location: "Okara".into(),
            size: "7.5".into(),
            crop: "".into(),
            soil_type: "Sandy".into(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload["name"], "East");
        assert_eq!(payload["size_acres"], 7.5);
        assert!(payload["current_crop"].is_null());
        assert_eq!(payload["soil_type"], "Sandy");
        assert_eq!(payload["status"], "Active");
    }

    #[test]
    fn draft_from_farm_roundtrips_fields() {
        let farm = Farm {
            id: "1".into(),
            name: "A".into(),
            location: Some("L".into()),
            size_acres: 3.0,
            current_crop: Some("Maize".into()),
            ..Default::default()
        };
        let draft = FarmDraft::from_farm(&farm);
        assert_eq!(draft.size, "3");
        assert_eq!(draft.crop, "Maize");
        assert_eq!(draft.status, "Active");
        assert!(draft.validate().is_ok());
    }
}
