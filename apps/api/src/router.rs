use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;

use doctor_cell::router::doctor_routes;
use doctor_cell::services::DoctorDirectory;
use session_cell::router::session_routes;
use session_cell::services::SessionStore;

pub fn create_router(directory: Arc<DoctorDirectory>, store: Arc<RwLock<SessionStore>>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic booking API is running!" }))
        .nest("/doctors", doctor_routes(directory.clone()))
        .nest("/sessions", session_routes(directory, store))
}
