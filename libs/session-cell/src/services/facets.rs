use shared_utils::facets::distinct_by;

use crate::models::{Session, SessionAttribute, SessionFacets};

/// Most suggestions shown under the session search box.
pub const MAX_SUGGESTIONS: usize = 5;

pub fn distinct_session_values(sessions: &[Session], attribute: SessionAttribute) -> Vec<String> {
    match attribute {
        SessionAttribute::SessionType => distinct_by(sessions, |s| s.session_type.as_str()),
        SessionAttribute::DoctorExpertise => distinct_by(sessions, |s| s.doctor.expertise.as_str()),
        SessionAttribute::SessionMode => distinct_by(sessions, |s| s.session_mode.as_str()),
    }
}

pub fn session_facets(sessions: &[Session]) -> SessionFacets {
    SessionFacets {
        session_types: distinct_session_values(sessions, SessionAttribute::SessionType),
        doctor_expertise: distinct_session_values(sessions, SessionAttribute::DoctorExpertise),
        session_modes: distinct_session_values(sessions, SessionAttribute::SessionMode),
    }
}

/// Distinct doctor names containing `query`, case-insensitively. An empty
/// query suggests nothing.
pub fn doctor_name_suggestions(sessions: &[Session], query: &str, limit: usize) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    distinct_by(sessions, |s| s.doctor.name.as_str())
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_sessions;

    #[test]
    fn test_session_type_facet_order() {
        let sessions = seed_sessions();
        assert_eq!(
            distinct_session_values(&sessions, SessionAttribute::SessionType),
            vec!["Counselling", "Therapy Session", "Consultation"]
        );
    }

    #[test]
    fn test_session_mode_facet_uses_wire_names() {
        let sessions = seed_sessions();
        assert_eq!(
            distinct_session_values(&sessions, SessionAttribute::SessionMode),
            vec!["Online", "In-Person"]
        );
    }

    #[test]
    fn test_suggestions() {
        let sessions = seed_sessions();

        assert_eq!(
            doctor_name_suggestions(&sessions, "SH", MAX_SUGGESTIONS),
            vec!["Dr. Priya Sharma", "Dr. Ramesh Naik", "Dr. Suresh Sawant"]
        );
        assert_eq!(doctor_name_suggestions(&sessions, "dr", 2).len(), 2);
        assert!(doctor_name_suggestions(&sessions, "", MAX_SUGGESTIONS).is_empty());
    }
}
