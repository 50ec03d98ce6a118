//! Error types for the fleet core

use thiserror::Error;

/// Fleet core errors.
///
/// The drive-check and start operations themselves are total; errors arise
/// only when parsing external input into domain types.
#[derive(Error, Debug)]
pub enum FleetError {
    /// A name did not match any known vehicle category
    #[error("Unknown vehicle category: {name}")]
    UnknownCategory { name: String },
}

/// Result type for fleet operations
pub type Result<T> = std::result::Result<T, FleetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = FleetError::UnknownCategory {
            name: "hovercraft".to_string(),
        };

        assert_eq!(error.to_string(), "Unknown vehicle category: hovercraft");
    }
}
