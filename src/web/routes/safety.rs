use axum::{extract::State, Json};

use crate::database::Store;
use crate::models::responses::{ContactList, RiskZoneList, SafeSpotList};
use crate::services::safety_service;

pub async fn emergency_contacts_handler(State(store): State<Store>) -> Json<ContactList> {
    Json(ContactList {
        contacts: safety_service::emergency_contacts(&store),
    })
}

pub async fn risk_zones_handler(State(store): State<Store>) -> Json<RiskZoneList> {
    Json(RiskZoneList {
        zones: safety_service::risk_zones(&store),
    })
}

pub async fn safe_spots_handler() -> Json<SafeSpotList> {
    Json(SafeSpotList {
        safe_spots: safety_service::safe_spots(),
    })
}
