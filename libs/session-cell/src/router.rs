use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::RwLock;

use doctor_cell::services::DoctorDirectory;

use crate::handlers::{self, SessionState};
use crate::services::SessionStore;

pub fn session_routes(directory: Arc<DoctorDirectory>, store: Arc<RwLock<SessionStore>>) -> Router {
    let state = Arc::new(SessionState { directory, store });

    Router::new()
        .route("/", post(handlers::book_session))
        .route("/upcoming", get(handlers::list_upcoming_sessions))
        .route("/completed", get(handlers::list_completed_sessions))
        .route("/next", get(handlers::get_next_session))
        .route("/search", post(handlers::search_sessions))
        .route("/facets", get(handlers::get_session_facets))
        .route("/facets/{attribute}", get(handlers::get_session_attribute_values))
        .route("/suggestions", get(handlers::get_doctor_suggestions))
        .route("/validate-patient", post(handlers::validate_patient))
        .route("/slots", get(handlers::get_time_slots))
        .route("/calendar", get(handlers::get_calendar))
        .route("/doctors/{doctor_id}/history", get(handlers::get_doctor_history))
        .route("/doctors/{doctor_id}/options", get(handlers::get_session_options))
        .route("/{session_id}/complete", post(handlers::complete_session))
        .with_state(state)
}
