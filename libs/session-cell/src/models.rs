// libs/session-cell/src/models.rs
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use doctor_cell::models::Doctor;
use shared_models::error::AppError;

/// Wire format of session dates, e.g. `15/02/2024`.
pub const SESSION_DATE_FORMAT: &str = "%d/%m/%Y";

/// Every booked session runs for one hour.
pub const DEFAULT_SESSION_DURATION: &str = "01:00 HR";

// ==============================================================================
// CORE SESSION MODELS
// ==============================================================================

/// Calendar date of a session. Travels as `dd/mm/yyyy`, compares chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionDate(NaiveDate);

impl SessionDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_dmy(day: u32, month: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for SessionDate {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), SESSION_DATE_FORMAT)
            .map(Self)
            .map_err(|_| SessionError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for SessionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SESSION_DATE_FORMAT))
    }
}

impl Serialize for SessionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Upcoming,
    Completed,
    Cancelled, // modeled, never produced
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Upcoming => write!(f, "upcoming"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionMode {
    #[serde(rename = "In-Person")]
    InPerson,
    #[serde(rename = "Online")]
    Online,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::InPerson => "In-Person",
            SessionMode::Online => "Online",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Doctor fields copied into a session at booking time. Later roster changes
/// do not reach existing sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorSnapshot {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub expertise: String,
    pub avatar: String,
}

impl DoctorSnapshot {
    pub fn of(doctor: &Doctor, avatar: String) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            phone: doctor.phone.clone(),
            expertise: doctor.expertise.clone(),
            avatar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub patient_name: String,
    pub patient_phone: String,
    pub doctor: DoctorSnapshot,
    pub session_date: SessionDate,
    pub session_time: String,
    pub session_type: String,
    pub session_mode: SessionMode,
    pub session_duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_session_link: Option<String>,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Everything a session needs except the generated id and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub patient_name: String,
    pub patient_phone: String,
    pub doctor: DoctorSnapshot,
    pub session_date: SessionDate,
    pub session_time: String,
    pub session_type: String,
    pub session_mode: SessionMode,
    pub session_duration: String,
    #[serde(default)]
    pub session_details: Option<String>,
    #[serde(default)]
    pub online_session_link: Option<String>,
    pub status: SessionStatus,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewSession {
    pub fn into_session(self, id: String, created_at: DateTime<Utc>) -> Session {
        Session {
            id,
            patient_name: self.patient_name,
            patient_phone: self.patient_phone,
            doctor: self.doctor,
            session_date: self.session_date,
            session_time: self.session_time,
            session_type: self.session_type,
            session_mode: self.session_mode,
            session_duration: self.session_duration,
            session_details: self.session_details,
            online_session_link: self.online_session_link,
            status: self.status,
            location: self.location,
            created_at,
        }
    }
}

// ==============================================================================
// FILTERING & FACET MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionFilters {
    pub session_types: Vec<String>,
    pub doctor_expertise: Vec<String>,
    pub session_modes: Vec<SessionMode>,
}

impl SessionFilters {
    pub fn is_empty(&self) -> bool {
        self.session_types.is_empty()
            && self.doctor_expertise.is_empty()
            && self.session_modes.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSearchRequest {
    pub query: String,
    pub filters: SessionFilters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAttribute {
    SessionType,
    DoctorExpertise,
    SessionMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFacets {
    pub session_types: Vec<String>,
    pub doctor_expertise: Vec<String>,
    pub session_modes: Vec<String>,
}

// ==============================================================================
// BOOKING MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientDetails {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRequest {
    pub patient: PatientDetails,
    pub doctor_id: String,
    pub session_type: String,
    /// Falls back to the first mode the doctor offers.
    pub session_mode: Option<SessionMode>,
    pub session_date: String,
    pub session_time: String,
    pub session_details: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub session: Session,
    pub previous_sessions_with_doctor: usize,
}

// ==============================================================================
// SCHEDULING MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotGroup {
    pub period: TimePeriod,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOptions {
    pub available_modes: Vec<SessionMode>,
    pub session_mode: SessionMode,
    pub session_types: Vec<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Invalid session status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: SessionStatus,
        to: SessionStatus,
    },

    #[error("Invalid session date '{0}', expected dd/mm/yyyy")]
    InvalidDate(String),

    #[error("Invalid calendar month {month}/{year}")]
    InvalidMonth { year: i32, month: u32 },
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => AppError::NotFound(err.to_string()),
            SessionError::InvalidStatusTransition { .. } => AppError::Conflict(err.to_string()),
            SessionError::InvalidDate(_) | SessionError::InvalidMonth { .. } => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}
