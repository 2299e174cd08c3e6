//! Field checks shared by entity constructors and patches

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

/// A single entity field violated its constraint.
///
/// Checks run in field declaration order and stop at the first failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("price must be >= 0")]
    NegativePrice,

    #[error("latitude must be between -90 and 90")]
    LatitudeOutOfRange,

    #[error("longitude must be between -180 and 180")]
    LongitudeOutOfRange,

    #[error("rating must be an integer between 1 and 5")]
    RatingNotInteger,

    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

pub(crate) fn require_text(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub(crate) fn check_email(value: &str) -> ValidationResult<()> {
    require_text("email", value)?;
    if !email_regex().is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

// Comparisons are written so that NaN fails every range.
pub(crate) fn check_price(price: f64) -> ValidationResult<()> {
    if price >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NegativePrice)
    }
}

pub(crate) fn check_latitude(latitude: f64) -> ValidationResult<()> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        Err(ValidationError::LatitudeOutOfRange)
    }
}

pub(crate) fn check_longitude(longitude: f64) -> ValidationResult<()> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(ValidationError::LongitudeOutOfRange)
    }
}

/// Accepts integral numbers in `1..=5` and returns them as an integer rating.
pub(crate) fn check_rating(rating: f64) -> ValidationResult<u8> {
    if !rating.is_finite() || rating.fract() != 0.0 {
        return Err(ValidationError::RatingNotInteger);
    }
    if !(1.0..=5.0).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange);
    }
    Ok(rating as u8)
}

/// Drops repeated ids, keeping the first occurrence of each.
pub(crate) fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
