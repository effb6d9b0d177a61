//! Collector for accumulating diagnostics during a processing phase.

use log::debug;

use crate::error::Diagnostic;

/// A collector for accumulating diagnostics during a processing phase.
///
/// Phases keep going after a problem and report everything they saw.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        debug!(
            code:? = diagnostic.code(),
            severity:? = diagnostic.severity(),
            message = diagnostic.message();
            "Diagnostic emitted"
        );
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return every diagnostic, in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_collector_new_is_empty() {
        assert!(DiagnosticCollector::new().finish().is_empty());
    }

    #[test]
    fn test_collector_keeps_emission_order() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::warning("warning 1"));
        collector.emit(
            Diagnostic::error("error 1")
                .with_code(ErrorCode::E100)
                .with_label(Span::new(10..20), "here"),
        );

        let diagnostics = collector.finish();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].severity().is_warning());
        assert_eq!(diagnostics[1].message(), "error 1");
    }
}
