// libs/session-cell/src/services/store.rs
use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use shared_config::AppConfig;

use crate::models::{NewSession, Session, SessionError, SessionStatus};
use crate::seed::seed_sessions;
use crate::services::ranking::{ranked, DateOrder};

/// In-memory session collection. Sessions are only ever appended or moved
/// from upcoming to completed; nothing is removed.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Vec<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sessions(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    /// Seeded store, or an empty one when demo data is disabled.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = if config.seed_demo_data {
            Self::with_sessions(seed_sessions())
        } else {
            Self::new()
        };

        info!("Session store initialized with {} sessions", store.len());
        store
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn all(&self) -> &[Session] {
        &self.sessions
    }

    pub fn get(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    fn with_status(&self, status: SessionStatus) -> Vec<Session> {
        self.sessions
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect()
    }

    /// Upcoming sessions, soonest first.
    pub fn list_upcoming_sessions(&self) -> Vec<Session> {
        ranked(self.with_status(SessionStatus::Upcoming), DateOrder::Ascending)
    }

    /// Completed sessions, most recent first.
    pub fn list_completed_sessions(&self) -> Vec<Session> {
        ranked(self.with_status(SessionStatus::Completed), DateOrder::Descending)
    }

    /// Completed sessions with one doctor, most recent first.
    pub fn sessions_for_doctor(&self, doctor_id: &str) -> Vec<Session> {
        let history = self
            .sessions
            .iter()
            .filter(|s| s.doctor.id == doctor_id && s.status == SessionStatus::Completed)
            .cloned()
            .collect();

        ranked(history, DateOrder::Descending)
    }

    pub fn next_upcoming_session(&self) -> Option<Session> {
        self.list_upcoming_sessions().into_iter().next()
    }

    /// Stores a new session under a freshly generated id and returns it.
    #[instrument(skip(self, new_session), fields(doctor_id = %new_session.doctor.id))]
    pub fn add_session(&mut self, new_session: NewSession) -> Session {
        let session = new_session.into_session(next_session_id(), Utc::now());

        info!(
            "Session {} added for {} on {} at {}",
            session.id, session.patient_name, session.session_date, session.session_time
        );

        self.sessions.push(session.clone());
        session
    }

    /// Marks an upcoming session completed. Completing an already completed
    /// session changes nothing; unknown ids and cancelled sessions are errors
    /// and leave the store untouched.
    #[instrument(skip(self))]
    pub fn complete_session(&mut self, session_id: &str) -> Result<Session, SessionError> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| {
                warn!("Cannot complete unknown session {}", session_id);
                SessionError::NotFound(session_id.to_string())
            })?;

        match session.status {
            SessionStatus::Upcoming => {
                session.status = SessionStatus::Completed;
                info!("Session {} marked completed", session_id);
            }
            SessionStatus::Completed => {
                debug!("Session {} already completed", session_id);
            }
            SessionStatus::Cancelled => {
                return Err(SessionError::InvalidStatusTransition {
                    from: SessionStatus::Cancelled,
                    to: SessionStatus::Completed,
                });
            }
        }

        Ok(session.clone())
    }
}

fn next_session_id() -> String {
    format!("session-{}", Uuid::new_v4())
}
