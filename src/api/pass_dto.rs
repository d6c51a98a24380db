use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PassCatalogDto {
    pub passes: Vec<PredictedPassDto>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PredictedPassDto {
    pub satellite: String,
    pub aos: DateTime<Utc>,
    pub los: DateTime<Utc>,
    pub max_elevation: f64,
    /// Missing means the pass peaks at its midpoint.
    #[serde(default)]
    pub max_elevation_at: Option<DateTime<Utc>>,
}
