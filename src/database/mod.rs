//! In-memory storage owned by the running server.
//!
//! A [`Store`] is created once at startup and handed to the router as state.
//! Cloning it is cheap and every clone sees the same collections. Nothing is
//! persisted or evicted.

pub mod seed;
pub mod sos_alert_repo;
pub mod user_repo;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{EmergencyContact, RiskZone, SosAlert, UserProfile};

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    users: RwLock<HashMap<String, UserProfile>>,
    sos_alerts: RwLock<Vec<SosAlert>>,
    risk_zones: Vec<RiskZone>,
    emergency_contacts: Vec<EmergencyContact>,
}

impl Store {
    /// Empty user and alert collections plus the fixed seed lists.
    pub fn new() -> Self {
        Self::with_seed(seed::risk_zones(), seed::emergency_contacts())
    }

    pub fn with_seed(risk_zones: Vec<RiskZone>, emergency_contacts: Vec<EmergencyContact>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                users: RwLock::new(HashMap::new()),
                sos_alerts: RwLock::new(Vec::new()),
                risk_zones,
                emergency_contacts,
            }),
        }
    }

    pub(crate) fn users(&self) -> &RwLock<HashMap<String, UserProfile>> {
        &self.inner.users
    }

    pub(crate) fn sos_alerts(&self) -> &RwLock<Vec<SosAlert>> {
        &self.inner.sos_alerts
    }

    pub fn risk_zones(&self) -> &[RiskZone] {
        &self.inner.risk_zones
    }

    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        &self.inner.emergency_contacts
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
