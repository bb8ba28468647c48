use thiserror::Error;

/// Rejected command input.
///
/// Raised before anything is written, so a validation failure never leaves a
/// partial record behind.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Value is not one of the fixed choices for an enumerated field.
    #[error("'{value}' is not a valid {field}. Expected one of: {allowed}")]
    InvalidChoice {
        /// Field being parsed
        field: &'static str,
        /// The rejected value
        value: String,
        /// Comma-separated list of accepted values
        allowed: String,
    },

    /// Free-text value exceeds the column limit.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Value is not an absolute http(s) URL.
    #[error("{field} must be an http(s) link, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    /// A required value is empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}
