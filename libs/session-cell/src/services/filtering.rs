use tracing::debug;

use crate::models::{Session, SessionFilters};

/// Inclusion test over sessions: doctor-name query AND every constrained
/// facet dimension.
#[derive(Debug, Clone)]
pub struct SessionPredicate<'a> {
    query: String,
    filters: &'a SessionFilters,
}

impl<'a> SessionPredicate<'a> {
    pub fn new(query: &str, filters: &'a SessionFilters) -> Self {
        Self {
            query: query.to_lowercase(),
            filters,
        }
    }

    pub fn matches(&self, session: &Session) -> bool {
        if !self.query.is_empty() && !session.doctor.name.to_lowercase().contains(&self.query) {
            return false;
        }

        let f = self.filters;
        (f.session_types.is_empty() || f.session_types.contains(&session.session_type))
            && (f.doctor_expertise.is_empty()
                || f.doctor_expertise.contains(&session.doctor.expertise))
            && (f.session_modes.is_empty() || f.session_modes.contains(&session.session_mode))
    }
}

/// Sessions passing the query and filters, in input order.
pub fn filter_sessions(sessions: &[Session], query: &str, filters: &SessionFilters) -> Vec<Session> {
    let predicate = SessionPredicate::new(query, filters);

    let matched: Vec<Session> = sessions
        .iter()
        .filter(|session| predicate.matches(session))
        .cloned()
        .collect();

    debug!(
        "Session filter '{}' kept {} of {} sessions",
        query,
        matched.len(),
        sessions.len()
    );

    matched
}
