use super::{ErrorCode, KernelError};

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to KernelError with context
    fn to_kernel_error(self, context: impl Into<String>) -> Result<T, KernelError>;

    fn to_config_error(self, message: impl Into<String>) -> Result<T, KernelError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_kernel_error(self, context: impl Into<String>) -> Result<T, KernelError> {
        self.map_err(|e| KernelError::other(context).with_source(e))
    }

    fn to_config_error(self, message: impl Into<String>) -> Result<T, KernelError> {
        self.map_err(|e| KernelError::config(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Configuration file named on the command line does not exist
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> KernelError {
        KernelError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
    }

    /// Token stream ran out while `what` was still expected
    pub fn unexpected_eof(what: &str, token: usize) -> KernelError {
        KernelError::input_at(
            ErrorCode::INPUT_UNEXPECTED_EOF,
            format!("expected {} but input ended", what),
            token,
        )
    }

    pub fn digit_out_of_range(value: i64, position: usize) -> KernelError {
        KernelError::validation_with_code(
            ErrorCode::VALIDATION_DIGIT_OUT_OF_RANGE,
            format!("digit {} at position {} is outside 0-9", value, position),
            Some("digit".to_string()),
        )
    }

    pub fn empty_chain() -> KernelError {
        KernelError::validation_with_code(
            ErrorCode::VALIDATION_EMPTY_CHAIN,
            "a digit chain needs at least one digit",
            Some("count".to_string()),
        )
    }

    /// Failed to read the named input source
    pub fn read_failed(source_name: &str) -> KernelError {
        KernelError::io_with_code(
            ErrorCode::IO_READ_FAILED,
            format!("failed to read {}", source_name),
        )
    }
}
