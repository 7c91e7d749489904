use axum::{extract::State, Json};

use crate::services::activities_service;
use crate::store::activity_store::{ActivityMap, ActivityStore};

/// Full registry as a JSON object keyed by activity name, in seed order.
pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&store).await)
}
