//! Error codes for the Rinkdraw diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Parser errors
//! - `E2xx` - Model builder errors
//! - `E3xx` - Renderer errors

use std::fmt;

use crate::error::Severity;

/// The pipeline stage a diagnostic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Parse,
    Build,
    Render,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Parse => "parse",
            Phase::Build => "build",
            Phase::Render => "render",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Malformed coordinates.
    ///
    /// A line starts with a recognized sigil but its coordinates are missing
    /// or are not two numbers separated by a comma.
    E100,

    /// Entity position is a reference.
    ///
    /// Entities need a literal position; only path endpoints may name
    /// another entity.
    E101,

    /// Unknown zone name.
    ///
    /// `@zone` accepts `defensive`, `neutral` or `offensive`.
    E102,

    /// Unknown directive.
    ///
    /// A line starts with `@` followed by a keyword other than `zone`.
    E103,

    // =========================================================================
    // Builder Errors (E2xx)
    // =========================================================================
    /// Unresolved path endpoint.
    ///
    /// The endpoint names no entity declared earlier and is not a coordinate
    /// pair. The point is dropped from its path.
    E200,

    /// Path too short.
    ///
    /// After unresolved endpoints were dropped, fewer than two points
    /// remained. The whole path is discarded.
    E201,

    // =========================================================================
    // Renderer Errors (E3xx)
    // =========================================================================
    /// Target surface unavailable.
    ///
    /// The surface is not mounted or has no drawable area. Nothing is drawn.
    E300,

    /// Invalid stroke scale.
    ///
    /// The configured scale is not a positive finite number. The diagram is
    /// drawn at scale `1.0` instead.
    E301,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed coordinates",
            ErrorCode::E101 => "entity position must be coordinates",
            ErrorCode::E102 => "unknown zone",
            ErrorCode::E103 => "unknown directive",
            ErrorCode::E200 => "unresolved path endpoint",
            ErrorCode::E201 => "path needs at least two points",
            ErrorCode::E300 => "target surface unavailable",
            ErrorCode::E301 => "invalid stroke scale",
        }
    }

    /// The stage that reports this code, from the hundreds digit.
    pub fn phase(&self) -> Phase {
        match self {
            ErrorCode::E100 | ErrorCode::E101 | ErrorCode::E102 | ErrorCode::E103 => Phase::Parse,
            ErrorCode::E200 | ErrorCode::E201 => Phase::Build,
            ErrorCode::E300 | ErrorCode::E301 => Phase::Render,
        }
    }

    /// The severity a diagnostic with this code is reported at.
    pub fn severity(&self) -> Severity {
        match self {
            ErrorCode::E100 | ErrorCode::E101 | ErrorCode::E102 | ErrorCode::E201 => {
                Severity::Error
            }
            ErrorCode::E103 | ErrorCode::E200 | ErrorCode::E300 | ErrorCode::E301 => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
        assert_eq!(ErrorCode::E300.as_str(), "E300");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E100.description(), "malformed coordinates");
        assert_eq!(ErrorCode::E200.description(), "unresolved path endpoint");
        assert_eq!(ErrorCode::E300.description(), "target surface unavailable");
    }

    #[test]
    fn test_error_code_phase() {
        assert_eq!(ErrorCode::E103.phase(), Phase::Parse);
        assert_eq!(ErrorCode::E201.phase(), Phase::Build);
        assert_eq!(ErrorCode::E300.phase().to_string(), "render");
        assert!(Phase::Parse < Phase::Build && Phase::Build < Phase::Render);
    }

    #[test]
    fn test_error_code_severity() {
        assert!(ErrorCode::E100.severity().is_error());
        assert!(ErrorCode::E103.severity().is_warning());
        assert!(ErrorCode::E200.severity().is_warning());
        assert!(ErrorCode::E201.severity().is_error());
        assert!(ErrorCode::E301.severity().is_warning());
    }
}
