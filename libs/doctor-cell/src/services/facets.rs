use shared_utils::facets::distinct_by;

use crate::models::{Doctor, DoctorAttribute, DoctorFacets, PriceRange, PriceRangeOption, ANY_GENDER};

/// Distinct values of one doctor attribute, first-seen order. Gender gets the
/// trailing `"Any"` option.
pub fn distinct_doctor_values(doctors: &[Doctor], attribute: DoctorAttribute) -> Vec<String> {
    match attribute {
        DoctorAttribute::Expertise => distinct_by(doctors, |d| d.expertise.as_str()),
        DoctorAttribute::SessionMode => distinct_by(doctors, |d| d.session_mode.as_str()),
        DoctorAttribute::Gender => {
            let mut genders = distinct_by(doctors, |d| d.gender.as_str());
            genders.push(ANY_GENDER.to_string());
            genders
        }
    }
}

pub fn doctor_facets(doctors: &[Doctor]) -> DoctorFacets {
    DoctorFacets {
        genders: distinct_doctor_values(doctors, DoctorAttribute::Gender),
        session_modes: distinct_doctor_values(doctors, DoctorAttribute::SessionMode),
        price_ranges: PriceRange::OPTIONS
            .iter()
            .map(|range| PriceRangeOption {
                label: range.label().to_string(),
                value: *range,
            })
            .collect(),
        expertise: distinct_doctor_values(doctors, DoctorAttribute::Expertise),
    }
}
