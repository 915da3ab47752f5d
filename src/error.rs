//! Error types for Toolshed
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Toolshed
#[derive(Debug, Error)]
pub enum ToolshedError {
    /// Tools root directory missing or not a directory
    #[error("Tools root not found: {0}")]
    RootNotFound(String),

    /// Descriptor path does not sit under a category directory
    #[error("Path structure error: {0}")]
    PathStructure(String),

    /// Descriptor file could not be parsed
    #[error("Malformed descriptor: {0}")]
    MalformedDescriptor(String),

    /// Required main tool file is absent
    #[error("Missing main file: {0}")]
    MissingMainFile(String),

    /// Directory tree scan error
    #[error("Scan error: {0}")]
    Scan(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Toolshed operations
pub type Result<T> = std::result::Result<T, ToolshedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_error() {
        let err = ToolshedError::RootNotFound("tools".to_string());
        assert_eq!(err.to_string(), "Tools root not found: tools");
    }

    #[test]
    fn test_path_structure_error() {
        let err = ToolshedError::PathStructure("metadata.json sits directly under the root".to_string());
        assert_eq!(
            err.to_string(),
            "Path structure error: metadata.json sits directly under the root"
        );
    }

    #[test]
    fn test_malformed_descriptor_error() {
        let err = ToolshedError::MalformedDescriptor("tools/blender/a/metadata.json: EOF".to_string());
        assert!(err.to_string().starts_with("Malformed descriptor:"));
    }

    #[test]
    fn test_missing_main_file_error() {
        let err = ToolshedError::MissingMainFile("tool 'a' is missing tool.py".to_string());
        assert_eq!(err.to_string(), "Missing main file: tool 'a' is missing tool.py");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ToolshedError = io_err.into();
        assert!(matches!(err, ToolshedError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ToolshedError = json_err.into();
        assert!(matches!(err, ToolshedError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ToolshedError::Scan("bad pattern".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
