pub mod facets;
pub mod test_utils;
pub mod validation;

pub use facets::distinct_by;
pub use validation::FieldValidator;
