// =====================================================================================
// FIELD VALIDATION - PHONE / EMAIL SHAPE CHECKS
// =====================================================================================

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use shared_models::error::{AppError, FieldError};

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone pattern compiles")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Optional leading `+`, then at least ten digits, spaces, hyphens or parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone.trim())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// `https://wa.me/<digits>` for a WhatsApp number, or `None` when it holds no digits.
pub fn whatsapp_link(number: &str) -> Option<String> {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("https://wa.me/{}", digits))
    }
}

/// Collects every rejected field instead of stopping at the first one.
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: Vec<FieldError>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects blank values. Returns whether the value was present.
    pub fn require(&mut self, field: &str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.reject(field, message);
            false
        } else {
            true
        }
    }

    pub fn check(&mut self, field: &str, condition: bool, message: &str) {
        if !condition {
            self.reject(field, message);
        }
    }

    pub fn reject(&mut self, field: &str, message: &str) {
        debug!("Field '{}' rejected: {}", field, message);
        self.errors.push(FieldError::new(field, message));
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    pub fn into_app_result(self) -> Result<(), AppError> {
        self.finish().map_err(AppError::InvalidFields)
    }
}
