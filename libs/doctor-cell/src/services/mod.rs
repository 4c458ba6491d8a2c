pub mod directory;
pub mod facets;
pub mod filtering;

pub use directory::DoctorDirectory;
pub use facets::{distinct_doctor_values, doctor_facets};
pub use filtering::{filter_doctors, parse_fee, DoctorPredicate};
