// ABOUTME: Error types for mltran including the ErrorCode enum and LookupError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Fetch,
    /// A required container, cell, or link is missing where the results
    /// grammar mandates it: the page layout changed, or the results
    /// wrapper itself vanished. Fatal to the current parse.
    Structure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Structure => "structural error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for lookup operations.
#[derive(Debug, thiserror::Error)]
pub struct LookupError {
    pub code: ErrorCode,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mltran: {}: {}", self.op, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl LookupError {
    /// Create an InvalidUrl error.
    pub fn invalid_url(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            op: op.into(),
            source,
        }
    }

    /// Create a Fetch error.
    pub fn fetch(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Fetch,
            op: op.into(),
            source,
        }
    }

    /// Create a Structure error with a detail message.
    pub fn structure(op: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Structure,
            op: op.into(),
            source: Some(anyhow::anyhow!(detail.into())),
        }
    }

    /// Returns true if this is a Structure error.
    pub fn is_structure(&self) -> bool {
        self.code == ErrorCode::Structure
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_error_display_keeps_detail() {
        let err = LookupError::structure("ParseResults", "missing results table");
        assert!(err.is_structure());
        let shown = err.to_string();
        assert!(shown.contains("ParseResults"), "got: {}", shown);
        assert!(shown.contains("missing results table"), "got: {}", shown);
    }

    #[test]
    fn code_helpers_are_exclusive() {
        let err = LookupError::fetch("Lookup", None);
        assert!(err.is_fetch());
        assert!(!err.is_structure());
        assert!(!err.is_invalid_url());
    }
}
