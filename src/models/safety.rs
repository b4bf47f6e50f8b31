use serde::{Deserialize, Serialize};

/// Annotated hazard point used for map overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskZone {
    pub id: String,
    pub category: String,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 0.0 to 1.0 by convention.
    pub intensity: f64,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub label: String,
    pub number: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeSpotType {
    Police,
    Hospital,
    Embassy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeSpot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub spot_type: SafeSpotType,
    pub address: String,
    pub distance_km: f64,
    pub notes: String,
}
