use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, info};

use doctor_cell::services::DoctorDirectory;
use shared_models::error::AppError;

use crate::models::{
    BookingConfirmation, BookingRequest, PatientDetails, SessionAttribute, SessionDate,
    SessionMode, SessionOptions, SessionSearchRequest,
};
use crate::services::{
    available_modes, calendar_month, distinct_session_values, doctor_name_suggestions,
    filter_sessions, prepare_session, session_facets, session_type_options, time_slots,
    validate_patient_details, SessionStore, MAX_SUGGESTIONS,
};

pub struct SessionState {
    pub directory: Arc<DoctorDirectory>,
    pub store: Arc<RwLock<SessionStore>>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    pub mode: Option<SessionMode>,
}

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

// ==============================================================================
// LISTING
// ==============================================================================

#[axum::debug_handler]
pub async fn list_upcoming_sessions(
    State(state): State<Arc<SessionState>>,
) -> Result<Json<Value>, AppError> {
    let sessions = state.store.read().await.list_upcoming_sessions();

    Ok(Json(json!({
        "sessions": sessions,
        "total": sessions.len()
    })))
}

#[axum::debug_handler]
pub async fn list_completed_sessions(
    State(state): State<Arc<SessionState>>,
) -> Result<Json<Value>, AppError> {
    let sessions = state.store.read().await.list_completed_sessions();

    Ok(Json(json!({
        "sessions": sessions,
        "total": sessions.len()
    })))
}

#[axum::debug_handler]
pub async fn get_next_session(
    State(state): State<Arc<SessionState>>,
) -> Result<Json<Value>, AppError> {
    let next = state.store.read().await.next_upcoming_session();
    Ok(Json(json!({ "session": next })))
}

// ==============================================================================
// SEARCH & FACETS
// ==============================================================================

/// Filters both dashboard lists with the same query and filters, keeping
/// each list in its own date order.
#[axum::debug_handler]
pub async fn search_sessions(
    State(state): State<Arc<SessionState>>,
    Json(request): Json<SessionSearchRequest>,
) -> Result<Json<Value>, AppError> {
    debug!("Searching sessions: query='{}', filters={:?}", request.query, request.filters);

    let store = state.store.read().await;
    let upcoming = filter_sessions(&store.list_upcoming_sessions(), &request.query, &request.filters);
    let completed = filter_sessions(&store.list_completed_sessions(), &request.query, &request.filters);

    Ok(Json(json!({
        "showing": upcoming.len() + completed.len(),
        "total": store.len(),
        "upcoming": upcoming,
        "completed": completed,
        "filters_active": !request.filters.is_empty()
    })))
}

#[axum::debug_handler]
pub async fn get_session_facets(
    State(state): State<Arc<SessionState>>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.read().await;
    let mut sessions = store.list_upcoming_sessions();
    sessions.extend(store.list_completed_sessions());

    Ok(Json(json!(session_facets(&sessions))))
}

#[axum::debug_handler]
pub async fn get_session_attribute_values(
    State(state): State<Arc<SessionState>>,
    Path(attribute): Path<SessionAttribute>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.read().await;
    let mut sessions = store.list_upcoming_sessions();
    sessions.extend(store.list_completed_sessions());

    Ok(Json(json!({
        "attribute": attribute,
        "values": distinct_session_values(&sessions, attribute)
    })))
}

#[axum::debug_handler]
pub async fn get_doctor_suggestions(
    State(state): State<Arc<SessionState>>,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.read().await;
    let suggestions = doctor_name_suggestions(store.all(), query.q.trim(), MAX_SUGGESTIONS);

    Ok(Json(json!({ "suggestions": suggestions })))
}

// ==============================================================================
// PER-DOCTOR
// ==============================================================================

#[axum::debug_handler]
pub async fn get_doctor_history(
    State(state): State<Arc<SessionState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let sessions = state.store.read().await.sessions_for_doctor(&doctor_id);

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "sessions": sessions,
        "total": sessions.len()
    })))
}

#[axum::debug_handler]
pub async fn get_session_options(
    State(state): State<Arc<SessionState>>,
    Path(doctor_id): Path<String>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.directory.get_doctor(&doctor_id)?;
    let modes = available_modes(&doctor.session_mode);

    let session_mode = match query.mode {
        Some(mode) if modes.contains(&mode) => mode,
        Some(mode) => {
            return Err(AppError::BadRequest(format!(
                "{} does not offer {} sessions",
                doctor.name, mode
            )))
        }
        None => modes.first().copied().unwrap_or(SessionMode::InPerson),
    };

    let options = SessionOptions {
        session_types: session_type_options(&doctor.expertise, session_mode)
            .into_iter()
            .map(String::from)
            .collect(),
        available_modes: modes,
        session_mode,
    };

    Ok(Json(json!(options)))
}

// ==============================================================================
// SCHEDULING
// ==============================================================================

#[axum::debug_handler]
pub async fn get_time_slots(Query(query): Query<SlotsQuery>) -> Result<Json<Value>, AppError> {
    let date: SessionDate = query.date.parse()?;
    let groups = time_slots(date, Local::now().naive_local());

    Ok(Json(json!({
        "date": date,
        "periods": groups
    })))
}

#[axum::debug_handler]
pub async fn get_calendar(Query(query): Query<CalendarQuery>) -> Result<Json<Value>, AppError> {
    let today = Local::now().date_naive();
    let days = calendar_month(query.year, query.month, today)?;

    Ok(Json(json!({
        "year": query.year,
        "month": query.month,
        "days": days
    })))
}

// ==============================================================================
// BOOKING & MUTATION
// ==============================================================================

#[axum::debug_handler]
pub async fn validate_patient(
    Json(patient): Json<PatientDetails>,
) -> Result<Json<Value>, AppError> {
    validate_patient_details(&patient).map_err(AppError::InvalidFields)?;
    Ok(Json(json!({ "valid": true })))
}

#[axum::debug_handler]
pub async fn book_session(
    State(state): State<Arc<SessionState>>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor = state.directory.get_doctor(&request.doctor_id)?;
    let avatar = state.directory.avatar_for(doctor);
    let new_session = prepare_session(&request, doctor, avatar).map_err(AppError::InvalidFields)?;

    let mut store = state.store.write().await;
    let previous_sessions_with_doctor = store.sessions_for_doctor(&doctor.id).len();
    let session = store.add_session(new_session);

    info!("Booked session {} with {}", session.id, doctor.name);

    let confirmation = BookingConfirmation {
        session,
        previous_sessions_with_doctor,
    };

    Ok((StatusCode::CREATED, Json(json!(confirmation))))
}

#[axum::debug_handler]
pub async fn complete_session(
    State(state): State<Arc<SessionState>>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let session = state.store.write().await.complete_session(&session_id)?;
    Ok(Json(json!({ "session": session })))
}
