use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoamError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {field} for listing {id:?}: {value}")]
    InvalidCoordinate {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("Invalid price for listing {id:?}: {value}")]
    InvalidPrice { id: String, value: String },

    #[error("Listing has an empty id")]
    InvalidId,

    #[error("Duplicate listing id {0:?}")]
    DuplicateId(String),

    #[error("Category index {index} out of range (total: {total})")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Category list is empty")]
    NoCategories,

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Feedback error: {0}")]
    Feedback(String),
}

pub type Result<T> = std::result::Result<T, RoamError>;
