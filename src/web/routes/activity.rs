use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::models::ConfirmationMessage;
use crate::services::activities_service;
use crate::store::ActivityStore;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    // Option so a missing parameter becomes a 422 with a detail body
    // instead of the extractor's default rejection.
    pub email: Option<String>,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    let Some(email) = query.email else {
        return Err(ApiError::missing_parameter("email"));
    };

    activities_service::sign_up(&store, &activity_name, &email)
        .await
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            ApiError::from(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    let Some(email) = query.email else {
        return Err(ApiError::missing_parameter("email"));
    };

    activities_service::unregister(&store, &activity_name, &email)
        .await
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            ApiError::from(e)
        })
}
