use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringscopeError {
    #[error("String already exists in the system (id {id})")]
    DuplicateContent { id: String },
    #[error("String not found in the system")]
    NotFound { token: String },
    #[error("Invalid value for '{name}', {expected}")]
    InvalidFilterValue { name: &'static str, expected: &'static str },
    #[error("Missing 'query' parameter")]
    MissingQuery,
    #[error("Unable to parse natural language query into filters")]
    UnparseableQuery { query: String },
    #[error("Unsupported word count '{word}'")]
    UnsupportedWordCount { word: String },
    #[error("Conflicting filters detected in query: {reason}")]
    ConflictingFilters { reason: String },
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StringscopeError>;

impl StringscopeError {
    pub(crate) fn conflict(reason: impl Into<String>) -> Self {
        Self::ConflictingFilters { reason: reason.into() }
    }
}

// Helper conversions
impl From<config::ConfigError> for StringscopeError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
