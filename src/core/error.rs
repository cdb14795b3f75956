use thiserror::Error;

/// Errors returned by the storefront forms, cart and login flows.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorefrontError {
    /// One or more form fields failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The field is derived and cannot be edited directly.
    #[error("field '{0}' is read-only")]
    ReadOnlyField(String),

    /// A state name that is not in the reference table.
    #[error("unknown state '{0}'")]
    UnknownState(String),

    /// A new OTP was requested before the resend countdown finished.
    #[error("please wait {remaining_secs}s before requesting a new code")]
    ResendCooldown { remaining_secs: i64 },

    /// The backend refused or failed to store the address.
    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistError),

    /// Client configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl StorefrontError {
    /// Build a `Validation` error from a list of field errors.
    pub fn from_validation_errors(errors: &[ValidationError]) -> Self {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation(joined)
    }
}

/// Failure reported by the persistence collaborator.
///
/// Every variant is treated as transient by the forms: the previous
/// confirmed address is restored and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PersistError {
    /// The backend answered but refused the request.
    #[error("rejected by backend: {0}")]
    Rejected(String),
    /// The request never reached the backend or the connection dropped.
    #[error("network error: {0}")]
    Network(String),
}

/// A form field that failed validation, with the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the invalid field (e.g. "gst_no").
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
