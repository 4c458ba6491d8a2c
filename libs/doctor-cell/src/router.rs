use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{self, DoctorState};
use crate::services::DoctorDirectory;

pub fn doctor_routes(directory: Arc<DoctorDirectory>) -> Router {
    let state = Arc::new(DoctorState { directory });

    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/search", post(handlers::search_doctors))
        .route("/facets", get(handlers::get_doctor_facets))
        .route("/facets/{attribute}", get(handlers::get_doctor_attribute_values))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(state)
}
