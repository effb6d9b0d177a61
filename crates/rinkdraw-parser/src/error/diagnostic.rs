//! The core diagnostic type.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{Severity, error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E100]: malformed coordinates for `P1`
///   |
/// 1 | P1 20,abc
///   |    ^^^^^^ expected `x,y`
///   |
///   = help: write positions as two numbers, e.g. `P1 20,50`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use rinkdraw_parser::error::{Diagnostic, ErrorCode};
    /// # use rinkdraw_parser::Span;
    ///
    /// let diag = Diagnostic::error("unknown zone `slot`")
    ///     .with_code(ErrorCode::E102)
    ///     .with_label(Span::new(6..10), "not a zone")
    ///     .with_help("valid zones: defensive, neutral, offensive");
    /// assert!(diag.severity().is_error());
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create a diagnostic for `code` at its default severity.
    pub fn for_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code.severity(), message).with_code(code)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E100]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Severity::Error, "test error");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_for_code_uses_default_severity() {
        let diag = Diagnostic::for_code(ErrorCode::E200, "unresolved");
        assert!(diag.severity().is_warning());
        assert_eq!(diag.code(), Some(ErrorCode::E200));

        let diag = Diagnostic::for_code(ErrorCode::E100, "malformed");
        assert!(diag.severity().is_error());
    }

    #[test]
    fn test_diagnostic_labels() {
        let diag = Diagnostic::error("path discarded")
            .with_label(Span::new(10..20), "only one point")
            .with_secondary_label(Span::new(5..15), "unresolved here");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(!diag.labels()[1].is_primary());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("malformed coordinates").with_code(ErrorCode::E100);
        assert_eq!(diag.to_string(), "error[E100]: malformed coordinates");

        let diag = Diagnostic::warning("surface unavailable");
        assert_eq!(diag.to_string(), "warning: surface unavailable");
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::warning("unknown directive").with_help("supported: @zone");
        assert_eq!(diag.help(), Some("supported: @zone"));
    }
}
