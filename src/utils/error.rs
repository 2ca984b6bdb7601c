use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    /// Fixed message on purpose: the caller must never learn whether the
    /// email exists or the password was wrong.
    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("not found: {id}")]
    NotFound { id: String },

    #[error("featured slots for {period} are full ({max_slots} max)")]
    CapacityExceeded { period: String, max_slots: usize },

    #[error("restaurant {id} is already featured in {period}")]
    DuplicateEntry { id: String, period: String },

    #[error("provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    #[error("invalid month: {month} (expected 1-12)")]
    InvalidPeriod { month: u8 },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// True for precondition violations the operator can fix by changing the
    /// request, as opposed to provider or system faults.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AdminError::InvalidCredentials
                | AdminError::NotFound { .. }
                | AdminError::CapacityExceeded { .. }
                | AdminError::DuplicateEntry { .. }
                | AdminError::InvalidPeriod { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdminError::InvalidCredentials => "Incorrect email or password.".to_string(),
            AdminError::NotFound { id } => format!("No restaurant or entry matches '{}'.", id),
            AdminError::CapacityExceeded { period, max_slots } => {
                format!("All {} featured slots for {} are taken.", max_slots, period)
            }
            AdminError::DuplicateEntry { id, period } => {
                format!("Restaurant '{}' is already featured in {}.", id, period)
            }
            AdminError::ProviderUnavailable { .. } => {
                "A backing service is unavailable right now.".to_string()
            }
            AdminError::InvalidPeriod { month } => {
                format!("'{}' is not a valid month.", month)
            }
            AdminError::ConfigError { message } => {
                format!("Configuration problem: {}.", message)
            }
            AdminError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}.", field, reason)
            }
            AdminError::MissingConfigError { field } => {
                format!("Configuration value '{}' is missing.", field)
            }
            other => format!("Unexpected failure: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdminError::InvalidCredentials => "Check the email and password and try again.",
            AdminError::NotFound { .. } => "List the catalog to find a valid restaurant id.",
            AdminError::CapacityExceeded { .. } => {
                "Remove a featured restaurant before adding another."
            }
            AdminError::DuplicateEntry { .. } => "Pick a restaurant that is not featured yet.",
            AdminError::ProviderUnavailable { .. } => "Retry later or check the provider status.",
            AdminError::InvalidPeriod { .. } => "Use a month between 1 and 12.",
            AdminError::HttpError(_) => "Check network connectivity and the provider URL.",
            AdminError::IoError(_) => "Check that the data path exists and is writable.",
            AdminError::SerializationError(_) => "The data file may be corrupt; restore it.",
            AdminError::ConfigError { .. }
            | AdminError::InvalidConfigValueError { .. }
            | AdminError::MissingConfigError { .. } => "Fix the configuration and run again.",
        }
    }
}
