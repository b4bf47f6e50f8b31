use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::Store;
use crate::error::ApiResult;
use crate::models::responses::{ActiveAlertList, SosDeactivated, SosTriggered};
use crate::models::NewSosAlert;
use crate::services::sos_service;
use crate::web::extract::ApiJson;

pub async fn trigger_sos_handler(
    State(store): State<Store>,
    ApiJson(body): ApiJson<NewSosAlert>,
) -> Json<SosTriggered> {
    let triggered = sos_service::trigger_sos(&store, body).await;
    Json(SosTriggered {
        message: "SOS triggered successfully",
        alert_id: triggered.alert.id,
        emergency_contacts: triggered.emergency_contacts,
    })
}

pub async fn deactivate_sos_handler(
    Path(alert_id): Path<String>,
    State(store): State<Store>,
) -> ApiResult<Json<SosDeactivated>> {
    sos_service::deactivate_sos(&store, &alert_id).await?;
    Ok(Json(SosDeactivated {
        message: "SOS deactivated",
        alert_id,
    }))
}

pub async fn active_sos_handler(State(store): State<Store>) -> Json<ActiveAlertList> {
    Json(ActiveAlertList {
        active_alerts: sos_service::active_alerts(&store).await,
    })
}
