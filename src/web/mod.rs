pub mod routes;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ActivityStore;

/// Build the application router around a store handle. Tests construct this
/// against a fresh store; main wires it to the seeded one.
pub fn build_router(store: Arc<ActivityStore>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activity::signup_handler),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(routes::activity::unregister_handler),
        )
        // Static frontend
        .nest_service("/static", ServeDir::new("static"))
        // Participant lists change on every signup; the frontend must not
        // cache them.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
