use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A stored JSON column no longer matches the record schema.
    #[error("stored data for `{field}` is malformed: {message}")]
    Decode { field: &'static str, message: String },
}

impl ModelError {
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{field} required"))
    }
}
