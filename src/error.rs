/// Error types that can occur while initializing or restoring network parameters
///
/// # Variants
///
/// - `InvalidArgument` - Indicates that a required argument (target layer, connector or record) was absent
/// - `MalformedRecord` - Indicates that a persisted record lacks an expected key, holds a value of the wrong type, or describes an unusable configuration
/// - `InputValidationError` - Indicates that the configuration provided to a constructor does not meet the expected rules
/// - `ProcessingError` - Indicates that there is something wrong while processing
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidArgument(String),
    MalformedRecord(String),
    InputValidationError(String),
    ProcessingError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidArgument(name) => {
                write!(f, "Invalid argument: `{}` must not be absent", name)
            }
            ModelError::MalformedRecord(msg) => write!(f, "Malformed record: {}", msg),
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}

/// Input/Output error types that can occur while saving or loading initializer snapshots
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations (reading, writing, file access)
/// - `JsonError` - Wraps JSON serialization/deserialization errors when working with JSON data formats
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for IoError {}
