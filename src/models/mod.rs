pub mod responses;
pub mod safety;
pub mod sos_alerts;
pub mod users;

pub use safety::{EmergencyContact, RiskZone, SafeSpot, SafeSpotType};
pub use sos_alerts::{NewSosAlert, SosAlert, STATUS_ACTIVE, STATUS_RESOLVED};
pub use users::{NewUserProfile, UserProfile, UserProfileUpdate};
