//! The "create a short link" form: input shape, validation and error messages.

use std::borrow::Cow;

use axum::http::StatusCode;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::errors::LinkError;
use crate::utils::code_generator::SHORTCODE_REGEX;
use crate::utils::url_normalizer::normalize_url;

pub const INVALID_URL: &str = "Please enter a valid URL.";
pub const INVALID_VALIDITY: &str = "Must be a positive number.";
pub const INVALID_SHORTCODE: &str = "Shortcode can only contain letters and numbers.";
pub const SHORTCODE_TAKEN: &str = "That shortcode is already taken.";
pub const SHORTCODE_RESERVED: &str = "This shortcode is reserved.";
pub const GENERATION_FAILED: &str = "Could not generate a unique shortcode. Please try again.";
pub const STORAGE_FAILED: &str = "Something went wrong while saving your link.";

/// Raw form submission.
///
/// Every field arrives as text; empty optional fields mean "not provided".
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(custom(function = validate_original_url))]
    pub original_url: String,

    #[serde(default)]
    #[validate(custom(function = validate_validity_period))]
    pub validity_period: String,

    #[serde(default)]
    #[validate(regex(path = *SHORTCODE_REGEX, message = "Shortcode can only contain letters and numbers."))]
    pub custom_shortcode: String,
}

/// Form input after validation, ready for the link store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenInput {
    pub original_url: String,
    pub validity_days: Option<u32>,
    pub custom_shortcode: Option<String>,
}

/// Inline messages shown next to each field, plus one form-wide message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub original_url: Option<String>,
    pub validity_period: Option<String>,
    pub custom_shortcode: Option<String>,
    pub form: Option<String>,
}

impl ShortenForm {
    /// Validates the submission and converts it into store input.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn into_input(self) -> Result<ShortenInput, FieldErrors> {
        self.validate()
            .map_err(|errors| FieldErrors::from_validation(&errors))?;

        let original_url = normalize_url(&self.original_url).map_err(|_| FieldErrors {
            original_url: Some(INVALID_URL.to_string()),
            ..FieldErrors::default()
        })?;

        let validity_days = parse_validity(&self.validity_period).map_err(|_| FieldErrors {
            validity_period: Some(INVALID_VALIDITY.to_string()),
            ..FieldErrors::default()
        })?;

        let custom_shortcode = Some(self.custom_shortcode).filter(|c| !c.is_empty());

        Ok(ShortenInput {
            original_url,
            validity_days,
            custom_shortcode,
        })
    }
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.original_url.is_none()
            && self.validity_period.is_none()
            && self.custom_shortcode.is_none()
            && self.form.is_none()
    }

    /// Takes the first message reported for each field.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let first = |field: &str| {
            field_errors
                .get(field)
                .and_then(|errs| errs.first())
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
        };

        Self {
            original_url: first("original_url"),
            validity_period: first("validity_period"),
            custom_shortcode: first("custom_shortcode"),
            form: None,
        }
    }

    /// Maps a store refusal onto the form, with the status to render it with.
    pub fn from_link_error(err: &LinkError) -> (StatusCode, Self) {
        let mut errors = Self::default();
        let status = match err {
            LinkError::InvalidCode { .. } => {
                errors.custom_shortcode = Some(INVALID_SHORTCODE.to_string());
                StatusCode::UNPROCESSABLE_ENTITY
            }
            LinkError::Reserved { .. } => {
                errors.custom_shortcode = Some(SHORTCODE_RESERVED.to_string());
                StatusCode::UNPROCESSABLE_ENTITY
            }
            LinkError::InvalidValidity { .. } => {
                errors.validity_period = Some(INVALID_VALIDITY.to_string());
                StatusCode::UNPROCESSABLE_ENTITY
            }
            LinkError::CodeTaken { .. } => {
                errors.custom_shortcode = Some(SHORTCODE_TAKEN.to_string());
                StatusCode::CONFLICT
            }
            LinkError::GenerationExhausted { .. } => {
                errors.form = Some(GENERATION_FAILED.to_string());
                StatusCode::SERVICE_UNAVAILABLE
            }
            LinkError::Storage(_) => {
                errors.form = Some(STORAGE_FAILED.to_string());
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, errors)
    }
}

/// Empty means "never expires"; anything else must be a whole number of
/// days, at least 1. Numeric spellings such as `30.0` or `1e1` are accepted.
fn parse_validity(raw: &str) -> Result<Option<u32>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let value: f64 = raw.parse().map_err(|_| ())?;
    let whole = value.is_finite() && value.fract() == 0.0;
    if !whole || value < 1.0 || value > f64::from(u32::MAX) {
        return Err(());
    }

    Ok(Some(value as u32))
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_original_url(value: &str) -> Result<(), ValidationError> {
    normalize_url(value)
        .map(|_| ())
        .map_err(|_| invalid("url", INVALID_URL))
}

fn validate_validity_period(value: &str) -> Result<(), ValidationError> {
    parse_validity(value)
        .map(|_| ())
        .map_err(|_| invalid("positive_integer", INVALID_VALIDITY))
}
