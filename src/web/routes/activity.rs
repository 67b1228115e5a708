use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::services::activities_service;
use crate::store::{ActivityStore, StoreError};

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<Arc<ActivityStore>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::signup(&store, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            rejection(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<Arc<ActivityStore>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::unregister(&store, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "unregister rejected: {}", e);
            rejection(e)
        })
}

// Duplicate signup is the one Bad Request; everything else a caller can
// provoke is a missing activity or missing participant.
fn rejection(err: StoreError) -> (StatusCode, Json<Value>) {
    let status = match err {
        StoreError::AlreadySignedUp => StatusCode::BAD_REQUEST,
        StoreError::ActivityNotFound | StoreError::NotSignedUp => StatusCode::NOT_FOUND,
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}
