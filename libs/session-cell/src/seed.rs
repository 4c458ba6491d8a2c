use chrono::{DateTime, Utc};

use crate::models::{
    DoctorSnapshot, Session, SessionDate, SessionMode, SessionStatus, DEFAULT_SESSION_DURATION,
};

const PATIENT_NAME: &str = "Radical Minds";
const PATIENT_PHONE: &str = "+91 9876543210";
const PLACEHOLDER_AVATAR: &str = "/api/placeholder/48/48";

struct SeedSession {
    id: &'static str,
    doctor: (&'static str, &'static str, &'static str, &'static str),
    date: (u32, u32, i32),
    time: &'static str,
    session_type: &'static str,
    mode: SessionMode,
    details: &'static str,
    link: Option<&'static str>,
    status: SessionStatus,
    created_at: &'static str,
    location: &'static str,
}

const SESSIONS: [SeedSession; 5] = [
    SeedSession {
        id: "session-1",
        doctor: ("doc-1", "Dr. Kiran Rathi", "+91 9876543211", "Psychologist"),
        date: (15, 2, 2024),
        time: "11:00 AM",
        session_type: "Counselling",
        mode: SessionMode::Online,
        details: "Follow-up session for anxiety management",
        link: Some("https://meet.google.com/abc-def-ghi"),
        status: SessionStatus::Upcoming,
        created_at: "2024-02-10T10:30:00Z",
        location: "Bandra",
    },
    SeedSession {
        id: "session-2",
        doctor: ("doc-2", "Dr. Priya Sharma", "+91 9876543212", "Psychiatrist"),
        date: (18, 2, 2024),
        time: "02:00 PM",
        session_type: "Therapy Session",
        mode: SessionMode::InPerson,
        details: "Cognitive behavioral therapy session",
        link: None,
        status: SessionStatus::Upcoming,
        created_at: "2024-02-08T14:20:00Z",
        location: "Andheri Clinic",
    },
    SeedSession {
        id: "session-3",
        doctor: ("doc-1", "Dr. Kiran Rathi", "+91 9876543211", "Psychologist"),
        date: (5, 2, 2024),
        time: "10:00 AM",
        session_type: "Counselling",
        mode: SessionMode::Online,
        details: "Initial consultation for stress management",
        link: Some("https://meet.google.com/xyz-abc-def"),
        status: SessionStatus::Completed,
        created_at: "2024-02-01T09:15:00Z",
        location: "Online",
    },
    SeedSession {
        id: "session-4",
        doctor: ("doc-3", "Dr. Ramesh Naik", "+91 9876543213", "Clinical Psychologist"),
        date: (25, 1, 2024),
        time: "12:00 PM",
        session_type: "Consultation",
        mode: SessionMode::InPerson,
        details: "General mental health assessment",
        link: None,
        status: SessionStatus::Completed,
        created_at: "2024-01-20T11:45:00Z",
        location: "Powai Clinic",
    },
    SeedSession {
        id: "session-5",
        doctor: ("doc-4", "Dr. Suresh Sawant", "+91 9876543214", "Psychotherapist"),
        date: (15, 1, 2024),
        time: "10:30 AM",
        session_type: "Therapy Session",
        mode: SessionMode::InPerson,
        details: "Group therapy session",
        link: None,
        status: SessionStatus::Completed,
        created_at: "2024-01-10T08:30:00Z",
        location: "Bandra Clinic",
    },
];

/// Pre-booked sessions for the demo patient. Entries with an unreadable date
/// or timestamp are skipped.
pub fn seed_sessions() -> Vec<Session> {
    SESSIONS
        .iter()
        .filter_map(|seed| {
            let (day, month, year) = seed.date;
            let session_date = SessionDate::from_dmy(day, month, year)?;
            let created_at = DateTime::parse_from_rfc3339(seed.created_at)
                .ok()?
                .with_timezone(&Utc);
            let (id, name, phone, expertise) = seed.doctor;

            Some(Session {
                id: seed.id.to_string(),
                patient_name: PATIENT_NAME.to_string(),
                patient_phone: PATIENT_PHONE.to_string(),
                doctor: DoctorSnapshot {
                    id: id.to_string(),
                    name: name.to_string(),
                    phone: phone.to_string(),
                    expertise: expertise.to_string(),
                    avatar: PLACEHOLDER_AVATAR.to_string(),
                },
                session_date,
                session_time: seed.time.to_string(),
                session_type: seed.session_type.to_string(),
                session_mode: seed.mode,
                session_duration: DEFAULT_SESSION_DURATION.to_string(),
                session_details: Some(seed.details.to_string()),
                online_session_link: seed.link.map(str::to_string),
                status: seed.status,
                location: Some(seed.location.to_string()),
                created_at,
            })
        })
        .collect()
}
