use serde::{Deserialize, Serialize};

/// Known alert types. Other values are stored as sent.
pub const TYPE_SOS: &str = "sos";
pub const TYPE_SILENT_SOS: &str = "silent_sos";
pub const TYPE_FAKE_CALL: &str = "fake_call";

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_RESOLVED: &str = "resolved";

fn default_alert_type() -> String {
    TYPE_SOS.to_string()
}

fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

/// A recorded SOS alert. `id` and `timestamp` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosAlert {
    pub id: String,
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub timestamp: String,
    pub status: String,
}

impl SosAlert {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn resolve(&mut self) {
        self.status = STATUS_RESOLVED.to_string();
    }
}

/// Body of `POST /api/sos`. Client-sent `id` and `timestamp` are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSosAlert {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type", default = "default_alert_type")]
    pub alert_type: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl NewSosAlert {
    pub fn into_alert(self, id: String, timestamp: String) -> SosAlert {
        SosAlert {
            id,
            user_id: self.user_id,
            latitude: self.latitude,
            longitude: self.longitude,
            alert_type: self.alert_type,
            timestamp,
            status: self.status,
        }
    }
}
