use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// Separator used by composite session modes such as `"In-Person & Online"`.
pub const MODE_SEPARATOR: &str = " & ";

/// Gender facet value meaning "no gender restriction".
pub const ANY_GENDER: &str = "Any";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub expertise: String,
    pub gender: String,
    pub session_mode: String,
    pub session_fee: String,
    pub avatar: String,
}

impl Doctor {
    /// Individual modes in the doctor's (possibly composite) session mode.
    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.session_mode.split(MODE_SEPARATOR)
    }

    pub fn offers_mode(&self, mode: &str) -> bool {
        self.session_mode == mode || self.modes().any(|m| m == mode)
    }
}

// ==============================================================================
// FILTERING MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "")]
    Any,
    #[serde(rename = "0-1000")]
    Under1000,
    #[serde(rename = "1000-1500")]
    From1000To1500,
    #[serde(rename = "1500-2000")]
    From1500To2000,
    #[serde(rename = "2000+")]
    From2000,
}

impl PriceRange {
    /// Options in the order the filter sheet lists them.
    pub const OPTIONS: [PriceRange; 5] = [
        PriceRange::Under1000,
        PriceRange::From1000To1500,
        PriceRange::From1500To2000,
        PriceRange::From2000,
        PriceRange::Any,
    ];

    /// Whether a parsed fee falls in this bucket. An unparseable fee only
    /// passes `Any`.
    pub fn admits(&self, fee: Option<i64>) -> bool {
        let fee = match (self, fee) {
            (PriceRange::Any, _) => return true,
            (_, None) => return false,
            (_, Some(fee)) => fee,
        };

        match self {
            PriceRange::Any => true,
            PriceRange::Under1000 => fee < 1000,
            PriceRange::From1000To1500 => (1000..1500).contains(&fee),
            PriceRange::From1500To2000 => (1500..2000).contains(&fee),
            PriceRange::From2000 => fee >= 2000,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            PriceRange::Any => "",
            PriceRange::Under1000 => "0-1000",
            PriceRange::From1000To1500 => "1000-1500",
            PriceRange::From1500To2000 => "1500-2000",
            PriceRange::From2000 => "2000+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Any => "Any",
            PriceRange::Under1000 => "Under ₹1000",
            PriceRange::From1000To1500 => "₹1000 - ₹1500",
            PriceRange::From1500To2000 => "₹1500 - ₹2000",
            PriceRange::From2000 => "Above ₹2000",
        }
    }
}

/// Selected facet values per dimension. An empty selection leaves the
/// dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorFilters {
    pub gender: Vec<String>,
    pub price_range: PriceRange,
    pub expertise: Vec<String>,
    pub session_mode: Vec<String>,
}

impl DoctorFilters {
    pub fn is_empty(&self) -> bool {
        self.gender.is_empty()
            && self.price_range == PriceRange::Any
            && self.expertise.is_empty()
            && self.session_mode.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorSearchRequest {
    pub query: String,
    pub filters: DoctorFilters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorAttribute {
    Expertise,
    Gender,
    SessionMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRangeOption {
    pub label: String,
    pub value: PriceRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorFacets {
    pub genders: Vec<String>,
    pub session_modes: Vec<String>,
    pub price_ranges: Vec<PriceRangeOption>,
    pub expertise: Vec<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor_with_mode(mode: &str) -> Doctor {
        Doctor {
            id: "1".to_string(),
            name: "Dr. Test".to_string(),
            phone: "+91 90000 00000".to_string(),
            expertise: "Psychologist".to_string(),
            gender: "Female".to_string(),
            session_mode: mode.to_string(),
            session_fee: "₹1500".to_string(),
            avatar: "/a.png".to_string(),
        }
    }

    #[test]
    fn test_composite_mode_splits_into_tokens() {
        let doctor = doctor_with_mode("In-Person & Online");
        assert_eq!(doctor.modes().collect::<Vec<_>>(), vec!["In-Person", "Online"]);
        assert!(doctor.offers_mode("Online"));
        assert!(doctor.offers_mode("In-Person & Online"));
    }

    #[test]
    fn test_single_mode_does_not_offer_composite() {
        let doctor = doctor_with_mode("Online");
        assert!(doctor.offers_mode("Online"));
        assert!(!doctor.offers_mode("In-Person & Online"));
        assert!(!doctor.offers_mode("In-Person"));
    }

    #[test]
    fn test_price_range_wire_values() {
        let range: PriceRange = serde_json::from_str("\"2000+\"").unwrap();
        assert_eq!(range, PriceRange::From2000);
        let any: PriceRange = serde_json::from_str("\"\"").unwrap();
        assert_eq!(any, PriceRange::Any);
        assert!(serde_json::from_str::<PriceRange>("\"cheap\"").is_err());
    }

    #[test]
    fn test_price_range_unparseable_fee() {
        assert!(PriceRange::Any.admits(None));
        for range in &PriceRange::OPTIONS[..4] {
            assert!(!range.admits(None));
        }
    }

    #[test]
    fn test_missing_filter_fields_default_to_empty() {
        let filters: DoctorFilters = serde_json::from_str(r#"{"gender": ["Male"]}"#).unwrap();
        assert_eq!(filters.gender, vec!["Male"]);
        assert_eq!(filters.price_range, PriceRange::Any);
        assert!(filters.expertise.is_empty());
        assert!(!filters.is_empty());
        assert!(DoctorFilters::default().is_empty());
    }
}
