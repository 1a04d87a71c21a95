//! Error types for the content picker.
//!
//! This module defines the centralized error type [`PickerError`] and a type alias
//! [`Result`] used throughout the plugin. The domain operations themselves
//! (filtering, toggling, swapping, expanding) cannot fail; errors only arise at
//! the edges where the picker touches files, themes, or the document sink.

use thiserror::Error;

/// The main error type for content picker operations.
///
/// # Examples
///
/// ```
/// use content_picker::domain::PickerError;
///
/// fn validate() -> Result<(), PickerError> {
///     Err(PickerError::Catalog("duplicate key: intro".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PickerError {
    /// The catalog could not be loaded or failed validation.
    ///
    /// Raised for unreadable or malformed catalog files, empty titles, and
    /// duplicate item keys.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The document sink rejected the inserted text.
    #[error("Insert error: {0}")]
    Insert(String),
}

/// A specialized `Result` type for content picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
