use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("SerializeError: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("NotScalar: item {index} is not a JSON scalar")]
    NotScalar { index: usize },
    #[error("MissingSlot: no value for ${{{0}}}")]
    MissingSlot(String),
    #[error("InvalidName: {0}")]
    InvalidName(String),
    #[error("ReservedPermission: {0} cannot be deleted")]
    ReservedPermission(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
