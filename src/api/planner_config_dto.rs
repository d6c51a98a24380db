use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfigDto {
    pub strategy: Option<String>,
    pub min_duration_seconds: Option<f64>,
    pub receiver_command: Option<String>,
    #[serde(default)]
    pub satellites: Vec<SatelliteConfigDto>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteConfigDto {
    pub name: String,
    #[serde(default)]
    pub disabled: bool,
}
