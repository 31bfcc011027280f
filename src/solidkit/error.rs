use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SolidError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SolidError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

/// Rejects empty or whitespace-only names.
///
/// `what` names the argument in the error message ("node name", "product name").
pub(crate) fn require_name(what: &str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(SolidError::invalid(format!("{} cannot be empty", what)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_name_accepts_non_blank() {
        assert_eq!(require_name("node name", "li").unwrap(), "li");
    }

    #[test]
    fn require_name_rejects_blank() {
        let err = require_name("node name", "   ").unwrap_err();
        assert!(matches!(err, SolidError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: node name cannot be empty");
    }
}
