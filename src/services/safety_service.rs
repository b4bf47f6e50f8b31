use crate::database::{seed, Store};
use crate::models::{EmergencyContact, RiskZone, SafeSpot};

pub fn emergency_contacts(store: &Store) -> Vec<EmergencyContact> {
    store.emergency_contacts().to_vec()
}

pub fn risk_zones(store: &Store) -> Vec<RiskZone> {
    store.risk_zones().to_vec()
}

pub fn safe_spots() -> Vec<SafeSpot> {
    seed::safe_spots()
}
