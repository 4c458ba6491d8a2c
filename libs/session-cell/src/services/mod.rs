pub mod booking;
pub mod facets;
pub mod filtering;
pub mod ranking;
pub mod scheduling;
pub mod store;

pub use booking::{prepare_session, validate_patient_details};
pub use facets::{distinct_session_values, doctor_name_suggestions, session_facets, MAX_SUGGESTIONS};
pub use filtering::{filter_sessions, SessionPredicate};
pub use ranking::{rank_by_date, ranked, DateOrder};
pub use scheduling::{available_modes, calendar_month, session_type_options, time_slots};
pub use store::SessionStore;
