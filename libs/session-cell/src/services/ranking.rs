use crate::models::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// Soonest first, for upcoming sessions.
    Ascending,
    /// Most recent first, for completed sessions.
    Descending,
}

/// Sorts sessions by calendar date. The sort is stable, so sessions on the
/// same date keep their relative input order; that order carries no meaning.
pub fn rank_by_date(sessions: &mut [Session], order: DateOrder) {
    match order {
        DateOrder::Ascending => sessions.sort_by_key(|s| s.session_date),
        DateOrder::Descending => sessions.sort_by(|a, b| b.session_date.cmp(&a.session_date)),
    }
}

pub fn ranked(mut sessions: Vec<Session>, order: DateOrder) -> Vec<Session> {
    rank_by_date(&mut sessions, order);
    sessions
}
