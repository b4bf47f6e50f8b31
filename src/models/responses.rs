use serde::Serialize;

use super::{EmergencyContact, RiskZone, SafeSpot, SosAlert, UserProfile};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ContactList {
    pub contacts: Vec<EmergencyContact>,
}

#[derive(Debug, Serialize)]
pub struct RiskZoneList {
    pub zones: Vec<RiskZone>,
}

#[derive(Debug, Serialize)]
pub struct SafeSpotList {
    pub safe_spots: Vec<SafeSpot>,
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub message: &'static str,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct SosTriggered {
    pub message: &'static str,
    pub alert_id: String,
    pub emergency_contacts: Vec<EmergencyContact>,
}

#[derive(Debug, Serialize)]
pub struct SosDeactivated {
    pub message: &'static str,
    pub alert_id: String,
}

#[derive(Debug, Serialize)]
pub struct ActiveAlertList {
    pub active_alerts: Vec<SosAlert>,
}
