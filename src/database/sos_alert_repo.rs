use crate::database::Store;
use crate::models::SosAlert;

/// Returns the total number of recorded alerts after the append.
pub async fn append_alert(store: &Store, alert: SosAlert) -> usize {
    let mut alerts = store.sos_alerts().write().await;
    alerts.push(alert);
    alerts.len()
}

/// Marks the first alert with `alert_id` as resolved. Returns `false` when no
/// alert matches, in which case nothing changes.
pub async fn resolve_alert(store: &Store, alert_id: &str) -> bool {
    let mut alerts = store.sos_alerts().write().await;
    match alerts.iter_mut().find(|a| a.id == alert_id) {
        Some(alert) => {
            alert.resolve();
            true
        }
        None => false,
    }
}

/// Active alerts in insertion order.
pub async fn load_active_alerts(store: &Store) -> Vec<SosAlert> {
    store
        .sos_alerts()
        .read()
        .await
        .iter()
        .filter(|a| a.is_active())
        .cloned()
        .collect()
}
