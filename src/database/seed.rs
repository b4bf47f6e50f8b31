//! Fixed reference data served by the read-only endpoints.

use crate::models::{EmergencyContact, RiskZone, SafeSpot, SafeSpotType};

fn zone(
    id: &str,
    category: &str,
    label: &str,
    latitude: f64,
    longitude: f64,
    intensity: f64,
    note: &str,
) -> RiskZone {
    RiskZone {
        id: id.to_string(),
        category: category.to_string(),
        label: label.to_string(),
        latitude,
        longitude,
        intensity,
        note: note.to_string(),
    }
}

pub fn risk_zones() -> Vec<RiskZone> {
    vec![
        zone(
            "zone-theft-1",
            "theft",
            "Janpath Market",
            28.6263,
            77.2177,
            0.85,
            "High pickpocket activity during shopping hours.",
        ),
        zone(
            "zone-theft-2",
            "theft",
            "Old Delhi Railway Station",
            28.6432,
            77.2191,
            0.9,
            "Extremely crowded. Watch bags at all times.",
        ),
        zone(
            "zone-harass-1",
            "harassment",
            "Paharganj Area",
            28.6447,
            77.2124,
            0.65,
            "Backpacker area with persistent touts.",
        ),
        zone(
            "zone-danger-1",
            "danger",
            "GB Road Area",
            28.6489,
            77.2169,
            0.95,
            "Red light district. Avoid after dark.",
        ),
    ]
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    [
        ("police", "Police", "100", "shield"),
        ("ambulance", "Ambulance", "108", "medkit"),
        ("women", "Women Helpline", "1091", "female"),
        ("tourist", "Tourist Helpline", "1363", "airplane"),
        ("emergency", "Emergency", "112", "alert"),
        ("fire", "Fire", "101", "flame"),
    ]
    .into_iter()
    .map(|(id, label, number, icon)| EmergencyContact {
        id: id.to_string(),
        label: label.to_string(),
        number: number.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// Rebuilt on every call, never stored.
pub fn safe_spots() -> Vec<SafeSpot> {
    vec![
        SafeSpot {
            id: "1".to_string(),
            name: "Connaught Place Police Station".to_string(),
            spot_type: SafeSpotType::Police,
            address: "Block A, Connaught Place".to_string(),
            distance_km: 0.5,
            notes: "24/7 tourist assistance".to_string(),
        },
        SafeSpot {
            id: "2".to_string(),
            name: "RML Hospital".to_string(),
            spot_type: SafeSpotType::Hospital,
            address: "Baba Kharak Singh Marg".to_string(),
            distance_km: 1.2,
            notes: "Emergency ward available".to_string(),
        },
        SafeSpot {
            id: "3".to_string(),
            name: "Embassy Zone".to_string(),
            spot_type: SafeSpotType::Embassy,
            address: "Chanakyapuri".to_string(),
            distance_km: 4.5,
            notes: "Multiple embassies".to_string(),
        },
    ]
}
