//! Error types shared across layers.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    UnsupportedLanguage,

    // Not found errors
    SessionNotFound,

    // Infrastructure errors
    DatabaseError,
    CacheError,
    InternalError,
}

impl ErrorCode {
    /// Returns true if the error originates in an external system
    /// rather than in the caller's input.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            ErrorCode::DatabaseError
                | ErrorCode::CacheError
                | ErrorCode::InternalError
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UnsupportedLanguage => "UNSUPPORTED_LANGUAGE",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::CacheError => "CACHE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::SessionNotFound, "Session not found");
        assert_eq!(format!("{}", err), "[SESSION_NOT_FOUND] Session not found");
    }

    #[test]
    fn with_detail_records_context() {
        let err = DomainError::new(ErrorCode::UnsupportedLanguage, "Unsupported language: fr")
            .with_detail("field", "language");
        assert_eq!(err.details.get("field"), Some(&"language".to_string()));
    }

    #[test]
    fn wire_names_are_screaming_snake_case() {
        let codes = [
            (ErrorCode::ValidationFailed, "VALIDATION_FAILED"),
            (ErrorCode::UnsupportedLanguage, "UNSUPPORTED_LANGUAGE"),
            (ErrorCode::SessionNotFound, "SESSION_NOT_FOUND"),
            (ErrorCode::DatabaseError, "DATABASE_ERROR"),
            (ErrorCode::CacheError, "CACHE_ERROR"),
            (ErrorCode::InternalError, "INTERNAL_ERROR"),
        ];
        for (code, name) in codes {
            assert_eq!(code.to_string(), name);
        }
    }

    #[test]
    fn infrastructure_codes_are_flagged() {
        assert!(ErrorCode::DatabaseError.is_infrastructure());
        assert!(ErrorCode::CacheError.is_infrastructure());
        assert!(!ErrorCode::ValidationFailed.is_infrastructure());
        assert!(!ErrorCode::SessionNotFound.is_infrastructure());
    }
}
