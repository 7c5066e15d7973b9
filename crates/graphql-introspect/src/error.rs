use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Failed to parse introspection JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Introspection result has no __schema (expected {{\"data\": {{\"__schema\": ...}}}} or {{\"__schema\": ...}})")]
    MissingSchema,

    #[error("Introspection result reported errors: {0}")]
    Reported(String),
}
