use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::database::{sos_alert_repo, Store};
use crate::error::{ApiError, ApiResult};
use crate::models::{EmergencyContact, NewSosAlert, SosAlert};

/// How many contacts come back with a freshly triggered alert.
pub const SOS_CONTACT_COUNT: usize = 3;

pub struct TriggeredSos {
    pub alert: SosAlert,
    pub emergency_contacts: Vec<EmergencyContact>,
}

/// Local wall-clock time, ISO-8601 without offset, microsecond precision.
pub fn local_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Records the alert and returns it with the first emergency contacts. No
/// notification is sent anywhere.
pub async fn trigger_sos(store: &Store, body: NewSosAlert) -> TriggeredSos {
    let id = Uuid::new_v4().to_string();
    let alert = body.into_alert(id, local_timestamp());
    let total = sos_alert_repo::append_alert(store, alert.clone()).await;

    info!(
        alert_id = %alert.id,
        user_id = %alert.user_id,
        alert_type = %alert.alert_type,
        total_alerts = total,
        "SOS triggered"
    );

    let emergency_contacts = store
        .emergency_contacts()
        .iter()
        .take(SOS_CONTACT_COUNT)
        .cloned()
        .collect();

    TriggeredSos {
        alert,
        emergency_contacts,
    }
}

pub async fn deactivate_sos(store: &Store, alert_id: &str) -> ApiResult<()> {
    if sos_alert_repo::resolve_alert(store, alert_id).await {
        info!(alert_id = %alert_id, "SOS deactivated");
        Ok(())
    } else {
        warn!(alert_id = %alert_id, "deactivate for unknown alert");
        Err(ApiError::not_found("Alert"))
    }
}

pub async fn active_alerts(store: &Store) -> Vec<SosAlert> {
    sos_alert_repo::load_active_alerts(store).await
}
