use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabError {
    #[error("Invalid type for field '{field}': expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: '{field}'")]
    MissingField { field: String },

    #[error("No book with id {0} in the catalog")]
    BookNotFound(u64),

    #[error("Failed to load catalog: {0}")]
    Load(String),
}

impl LabError {
    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// A field held a value of the wrong kind, or was absent.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::InvalidType { .. } | Self::MissingField { .. })
    }

    /// A field had the right kind but fell outside its domain.
    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::InvalidValue { .. } | Self::BookNotFound(_))
    }
}

impl From<serde_json::Error> for LabError {
    fn from(err: serde_json::Error) -> Self {
        LabError::Load(format!(
            "line {}, column {}: {err}",
            err.line(),
            err.column()
        ))
    }
}

impl From<toml::de::Error> for LabError {
    fn from(err: toml::de::Error) -> Self {
        LabError::Load(err.to_string())
    }
}

impl From<std::io::Error> for LabError {
    fn from(err: std::io::Error) -> Self {
        LabError::Load(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(LabError::invalid_type("weight", "number", "string").is_type_error());
        assert!(LabError::missing_field("name").is_type_error());
        assert!(LabError::invalid_value("weight", -1.0, "must be positive").is_value_error());
        assert!(LabError::BookNotFound(7).is_value_error());
        assert!(!LabError::Load("boom".into()).is_type_error());
    }

    #[test]
    fn test_error_messages() {
        let err = LabError::invalid_type("material", "string", "number");
        assert_eq!(
            err.to_string(),
            "Invalid type for field 'material': expected string, got number"
        );
        assert_eq!(
            LabError::BookNotFound(3).to_string(),
            "No book with id 3 in the catalog"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let converted = LabError::from(err);
        assert!(matches!(converted, LabError::Load(ref msg) if msg.starts_with("line 1")));
    }
}
