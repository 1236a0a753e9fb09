use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::lenient_f64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    #[serde(other)]
    Flat,
}

/// Week-on-week price change in percent.
///
/// The live endpoint sends a float (`-2.31`), older mock feeds a string
/// (`"+5%"`). Both deserialize to the same value; `label` renders the
/// signed-percent form either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PriceChange(pub f64);

impl PriceChange {
    pub fn percent(&self) -> f64 {
        self.0
    }

    pub fn label(&self) -> String {
        let rounded = (self.0 * 100.0).round() / 100.0;
        if rounded > 0.0 {
            format!("+{rounded}%")
        } else {
            format!("{rounded}%")
        }
    }
}

impl fmt::Display for PriceChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for PriceChange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f64),
            Str(String),
            Null(()),
        }

        Ok(PriceChange(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => n,
            Raw::Str(s) => s
                .trim()
                .trim_end_matches('%')
                .trim_start_matches('+')
                .trim()
                .parse()
                .unwrap_or(0.0),
            Raw::Null(()) => 0.0,
        }))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketPriceEntry {
    pub crop: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub change: PriceChange,
    #[serde(default)]
    pub trend: Trend,
}

impl MarketPriceEntry {
    pub fn is_rising(&self) -> bool {
        self.trend == Trend::Up
    }

    /// Price with thousands separators, e.g. `Rs 2,150`.
    pub fn price_label(&self) -> String {
        format!("Rs {}", group_thousands(self.price.round() as i64))
    }

    pub fn unit_label(&self) -> &str {
        self.unit.as_deref().unwrap_or("Per Quintal")
    }
}

/// One point of a crop's price history (`/api/market/history/<crop>`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(alias = "month")]
    pub date: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
}

/// Growth-stage advice from `/api/advisory/?crop=`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropAdvisory {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub fertilizer: String,
    #[serde(default)]
    pub pest_management: String,
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}
