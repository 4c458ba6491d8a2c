// libs/doctor-cell/src/services/filtering.rs
use tracing::debug;

use crate::models::{Doctor, DoctorFilters, ANY_GENDER};

/// Parses a fee such as `"₹1,500"` into its integer amount.
///
/// The currency symbol, commas and hyphens are dropped, then the leading run
/// of digits is read. Anything without leading digits is `None`.
pub fn parse_fee(fee: &str) -> Option<i64> {
    let cleaned: String = fee
        .chars()
        .filter(|c| !matches!(c, '₹' | ',' | '-'))
        .collect();

    let digits: String = cleaned
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}

/// Composite inclusion test over doctors: text query AND every constrained
/// facet dimension.
#[derive(Debug, Clone)]
pub struct DoctorPredicate<'a> {
    query: String,
    filters: &'a DoctorFilters,
}

impl<'a> DoctorPredicate<'a> {
    pub fn new(query: &str, filters: &'a DoctorFilters) -> Self {
        Self {
            query: query.to_lowercase(),
            filters,
        }
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        self.matches_text(doctor)
            && self.matches_gender(doctor)
            && self.matches_session_mode(doctor)
            && self.matches_price(doctor)
            && self.matches_expertise(doctor)
    }

    fn matches_text(&self, doctor: &Doctor) -> bool {
        if self.query.is_empty() {
            return true;
        }

        doctor.name.to_lowercase().contains(&self.query)
            || doctor.expertise.to_lowercase().contains(&self.query)
            || doctor.phone.contains(&self.query)
    }

    fn matches_gender(&self, doctor: &Doctor) -> bool {
        let selected = &self.filters.gender;
        if selected.is_empty() || selected.iter().any(|g| g == ANY_GENDER) {
            return true;
        }
        selected.contains(&doctor.gender)
    }

    // "Online" matches composites that include it; the composite itself only
    // matches doctors whose mode is exactly that composite.
    fn matches_session_mode(&self, doctor: &Doctor) -> bool {
        let selected = &self.filters.session_mode;
        selected.is_empty() || selected.iter().any(|mode| doctor.offers_mode(mode))
    }

    fn matches_price(&self, doctor: &Doctor) -> bool {
        self.filters.price_range.admits(parse_fee(&doctor.session_fee))
    }

    fn matches_expertise(&self, doctor: &Doctor) -> bool {
        let selected = &self.filters.expertise;
        selected.is_empty() || selected.contains(&doctor.expertise)
    }
}

/// Doctors passing the query and filters, in input order.
pub fn filter_doctors(doctors: &[Doctor], query: &str, filters: &DoctorFilters) -> Vec<Doctor> {
    let predicate = DoctorPredicate::new(query, filters);

    let matched: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| predicate.matches(doctor))
        .cloned()
        .collect();

    debug!(
        "Doctor filter '{}' kept {} of {} doctors",
        query,
        matched.len(),
        doctors.len()
    );

    matched
}
