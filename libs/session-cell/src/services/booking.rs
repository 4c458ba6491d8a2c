// libs/session-cell/src/services/booking.rs
use tracing::debug;

use doctor_cell::models::Doctor;
use shared_models::error::FieldError;
use shared_utils::validation::{is_valid_email, is_valid_phone, whatsapp_link, FieldValidator};

use crate::models::{
    BookingRequest, DoctorSnapshot, NewSession, PatientDetails, SessionDate, SessionMode,
    SessionStatus, DEFAULT_SESSION_DURATION,
};
use crate::services::scheduling::{available_modes, parse_slot_time};

const CLINIC_LOCATION: &str = "Clinic";

fn check_patient(validator: &mut FieldValidator, patient: &PatientDetails) {
    validator.require("name", &patient.name, "Patient name is required");
    if validator.require("phone", &patient.phone, "Phone number is required") {
        validator.check(
            "phone",
            is_valid_phone(&patient.phone),
            "Please enter a valid phone number",
        );
    }
}

/// Checks the patient step of the booking flow on its own.
pub fn validate_patient_details(patient: &PatientDetails) -> Result<(), Vec<FieldError>> {
    let mut validator = FieldValidator::new();
    check_patient(&mut validator, patient);
    validator.finish()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Validates a booking against the chosen doctor and builds the session to
/// store. Every invalid field is reported, not just the first.
pub fn prepare_session(
    request: &BookingRequest,
    doctor: &Doctor,
    avatar: String,
) -> Result<NewSession, Vec<FieldError>> {
    let mut validator = FieldValidator::new();
    check_patient(&mut validator, &request.patient);

    let session_date = if validator.require("session_date", &request.session_date, "Please select a date") {
        match request.session_date.parse::<SessionDate>() {
            Ok(date) => Some(date),
            Err(_) => {
                validator.reject("session_date", "Date must be in dd/mm/yyyy format");
                None
            }
        }
    } else {
        None
    };

    if validator.require("session_time", &request.session_time, "Please select a time slot") {
        validator.check(
            "session_time",
            parse_slot_time(&request.session_time).is_some(),
            "Time must look like 02:00 PM",
        );
    }

    validator.require("session_type", &request.session_type, "Please select a session type");

    let offered = available_modes(&doctor.session_mode);
    let session_mode = match request.session_mode {
        Some(mode) if offered.contains(&mode) => Some(mode),
        Some(mode) => {
            validator.reject(
                "session_mode",
                &format!("{} does not offer {} sessions", doctor.name, mode),
            );
            None
        }
        None => offered.first().copied(),
    };

    let email = non_blank(&request.email);
    if let Some(email) = email {
        validator.check("email", is_valid_email(email), "Please enter a valid email address");
    }

    let whatsapp = non_blank(&request.whatsapp_number);
    if let Some(number) = whatsapp {
        validator.check(
            "whatsapp_number",
            is_valid_phone(number),
            "Please enter a valid WhatsApp number",
        );
    }

    validator.finish()?;

    // Both are Some once validation passed.
    let (Some(session_date), Some(session_mode)) = (session_date, session_mode) else {
        return Err(vec![FieldError::new("session_date", "Please select a date")]);
    };

    let location = match session_mode {
        SessionMode::Online => SessionMode::Online.to_string(),
        SessionMode::InPerson => non_blank(&request.address)
            .unwrap_or(CLINIC_LOCATION)
            .to_string(),
    };

    debug!(
        "Prepared {} session with {} on {}",
        session_mode, doctor.name, session_date
    );

    Ok(NewSession {
        patient_name: request.patient.name.trim().to_string(),
        patient_phone: request.patient.phone.trim().to_string(),
        doctor: DoctorSnapshot::of(doctor, avatar),
        session_date,
        session_time: request.session_time.trim().to_string(),
        session_type: request.session_type.trim().to_string(),
        session_mode,
        session_duration: DEFAULT_SESSION_DURATION.to_string(),
        session_details: non_blank(&request.session_details).map(str::to_string),
        online_session_link: whatsapp.and_then(whatsapp_link),
        status: SessionStatus::Upcoming,
        location: Some(location),
    })
}
