use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Hit is missing ranking information")]
    MissingRankingInfo,

    #[error("Hit is missing required `objectID` attribute")]
    MissingIdentifier,

    #[error("Hit document must be a JSON object to carry ranking information")]
    DocumentNotObject,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Reasons a ranking configuration can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("settings missing a valid `{key}` list of strings")]
    MissingList { key: String },

    #[error("unknown ranking criterion \"{0}\"")]
    UnknownCriterion(String),

    #[error("invalid sort criterion \"{0}\"")]
    InvalidSortCriterion(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
