use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{DoctorAttribute, DoctorSearchRequest};
use crate::services::{distinct_doctor_values, doctor_facets, filter_doctors, DoctorDirectory};

pub struct DoctorState {
    pub directory: Arc<DoctorDirectory>,
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<DoctorState>>,
) -> Result<Json<Value>, AppError> {
    let doctors = state.directory.with_display_avatars(state.directory.list_doctors());

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(state): State<Arc<DoctorState>>,
    Json(request): Json<DoctorSearchRequest>,
) -> Result<Json<Value>, AppError> {
    debug!("Searching doctors: query='{}', filters={:?}", request.query, request.filters);

    let all = state.directory.list_doctors();
    let matched = filter_doctors(all, &request.query, &request.filters);
    let doctors = state.directory.with_display_avatars(&matched);

    Ok(Json(json!({
        "doctors": doctors,
        "showing": doctors.len(),
        "total": all.len(),
        "filters_active": !request.filters.is_empty()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor_facets(
    State(state): State<Arc<DoctorState>>,
) -> Result<Json<Value>, AppError> {
    let facets = doctor_facets(state.directory.list_doctors());
    Ok(Json(json!(facets)))
}

#[axum::debug_handler]
pub async fn get_doctor_attribute_values(
    State(state): State<Arc<DoctorState>>,
    Path(attribute): Path<DoctorAttribute>,
) -> Result<Json<Value>, AppError> {
    let values = distinct_doctor_values(state.directory.list_doctors(), attribute);

    Ok(Json(json!({
        "attribute": attribute,
        "values": values
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<DoctorState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.directory.get_doctor(&doctor_id)?;
    Ok(Json(json!(state.directory.with_display_avatar(doctor))))
}
