use thiserror::Error;

/// Error for access document template operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Access template is malformed: {0}")]
    MalformedTemplate(String),

    #[error("Access template {path} could not be read: {reason}")]
    TemplateUnreadable { path: String, reason: String },
}
