pub mod error;
pub mod routes;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ActivityStore;

/// Build the full application router around a store handle.
///
/// Routing is strict single-segment: an activity name containing `/`
/// never matches, so `/activities/Invalid/Activity/signup` is a 404.
pub fn build_router(store: ActivityStore) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activity::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activity::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
