//! Failures of short link creation.

use crate::error::AppError;

/// Why [`crate::application::services::LinkStore::add_link`] refused to create a link.
///
/// Each variant is a distinct outcome so callers (HTML form, JSON API, CLI)
/// can react to it explicitly.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Shortcode can only contain letters and numbers.")]
    InvalidCode { code: String },

    #[error("This shortcode is reserved.")]
    Reserved { code: String },

    #[error("Must be a positive number.")]
    InvalidValidity { days: u32 },

    #[error("That shortcode is already taken.")]
    CodeTaken { code: String },

    #[error("Could not generate a unique shortcode after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Failed to persist links: {0}")]
    Storage(#[source] AppError),
}
