//! miette reports for the CLI.
//!
//! Two kinds of problems reach the terminal:
//!
//! - drill diagnostics, which point into the notation source and carry the
//!   phase that found them (`parse::E100`, `build::E200`, `render::E300`);
//! - run failures such as a missing input file or a bad configuration,
//!   which have no source location.
//!
//! A strict run turns every drill diagnostic into a failure, so
//! [`reports`] unpacks [`RinkdrawError::Parse`] back into one report per
//! diagnostic.

use std::{collections::BTreeMap, fmt};

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan};

use rinkdraw::{Diagnostic, Phase, RinkdrawError};

/// A drill diagnostic shown against its source.
pub struct DrillReport<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DrillReport<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DrillReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.diag, f)
    }
}

impl fmt::Display for DrillReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DrillReport<'_> {}

impl MietteDiagnostic for DrillReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = self.diag.code()?;
        Some(Box::new(format!("{}::{}", code.phase(), code)))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(if self.diag.severity().is_warning() {
            miette::Severity::Warning
        } else {
            miette::Severity::Error
        })
    }

    /// The diagnostic's own help, or the code's description.
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match (self.diag.help(), self.diag.code()) {
            (Some(help), _) => Some(Box::new(help)),
            (None, Some(code)) => Some(Box::new(code.description())),
            (None, None) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let text = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(text, span)
            } else {
                LabeledSpan::new_with_span(text, span)
            }
        })))
    }
}

/// A run failure without a source location.
pub struct FailureReport<'a>(&'a RinkdrawError);

impl fmt::Debug for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for FailureReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for FailureReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            RinkdrawError::Io(_) => "rinkdraw::io",
            RinkdrawError::Parse { .. } => "rinkdraw::strict",
            RinkdrawError::Config(_) => "rinkdraw::config",
            RinkdrawError::Export(_) => "rinkdraw::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            RinkdrawError::Config(_) => {
                "check the config file and the --width, --height and stroke scale values"
            }
            RinkdrawError::Export(_) => "the surface size must be positive and finite",
            RinkdrawError::Io(_) | RinkdrawError::Parse { .. } => return None,
        };
        Some(Box::new(help))
    }
}

/// Reports for a failed run.
///
/// A strict-mode failure yields one [`DrillReport`] per diagnostic; any
/// other failure yields a single [`FailureReport`].
pub fn reports(err: &RinkdrawError) -> Vec<Box<dyn MietteDiagnostic + '_>> {
    match err {
        RinkdrawError::Parse { err: parse_err, src } if !parse_err.diagnostics().is_empty() => {
            parse_err
                .diagnostics()
                .iter()
                .map(|diag| Box::new(DrillReport::new(diag, src)) as Box<dyn MietteDiagnostic + '_>)
                .collect()
        }
        _ => vec![Box::new(FailureReport(err))],
    }
}

/// Reports for the diagnostics of a lenient run.
pub fn drill_reports<'a>(diagnostics: &'a [Diagnostic], src: &'a str) -> Vec<DrillReport<'a>> {
    diagnostics
        .iter()
        .map(|diag| DrillReport::new(diag, src))
        .collect()
}

/// Counts diagnostics by phase and severity, e.g.
/// `1 parse error, 2 build warnings`.
pub fn summarize(diagnostics: &[Diagnostic]) -> String {
    let mut counts: BTreeMap<(Option<Phase>, bool), usize> = BTreeMap::new();
    for diag in diagnostics {
        let key = (diag.code().map(|code| code.phase()), diag.severity().is_warning());
        *counts.entry(key).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((phase, is_warning), count)| {
            let kind = if is_warning { "warning" } else { "error" };
            let plural = if count == 1 { "" } else { "s" };
            match phase {
                Some(phase) => format!("{count} {phase} {kind}{plural}"),
                None => format!("{count} {kind}{plural}"),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a report with miette's graphical handler.
pub fn render_report(report: &dyn MietteDiagnostic) -> String {
    let mut out = String::new();
    match GraphicalReportHandler::new().render_report(&mut out, report) {
        Ok(()) => out,
        Err(_) => report.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rinkdraw::{ErrorCode, Span};
    use rinkdraw_parser::ParseError;

    use super::*;

    fn code_of(report: &dyn MietteDiagnostic) -> Option<String> {
        report.code().map(|code| code.to_string())
    }

    fn help_of(report: &dyn MietteDiagnostic) -> Option<String> {
        report.help().map(|help| help.to_string())
    }

    #[test]
    fn test_strict_failure_reports_each_diagnostic() {
        let diags = vec![
            Diagnostic::for_code(ErrorCode::E100, "malformed coordinates after `P1`")
                .with_label(Span::new(3..9), "expected `x,y`"),
            Diagnostic::for_code(ErrorCode::E200, "unresolved path endpoint `P9`")
                .with_label(Span::new(16..18), "not declared"),
        ];
        let err = RinkdrawError::new_parse_error(ParseError::from(diags), "P1 20,abc\nP2 -> P9");

        let reports = reports(&err);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].to_string(), "malformed coordinates after `P1`");
        assert_eq!(code_of(reports[0].as_ref()).as_deref(), Some("parse::E100"));
        assert_eq!(reports[0].severity(), Some(miette::Severity::Error));
        assert_eq!(code_of(reports[1].as_ref()).as_deref(), Some("build::E200"));
        assert_eq!(reports[1].severity(), Some(miette::Severity::Warning));
    }

    #[test]
    fn test_help_falls_back_to_code_description() {
        let with_help = Diagnostic::for_code(ErrorCode::E102, "unknown zone `slot`")
            .with_help("use defensive, neutral or offensive");
        let without_help = Diagnostic::for_code(ErrorCode::E300, "surface not mounted");
        let uncoded = Diagnostic::warning("something odd");

        assert_eq!(
            help_of(&DrillReport::new(&with_help, "")).as_deref(),
            Some("use defensive, neutral or offensive")
        );
        assert_eq!(
            help_of(&DrillReport::new(&without_help, "")).as_deref(),
            Some("target surface unavailable")
        );
        assert_eq!(help_of(&DrillReport::new(&uncoded, "")), None);
    }

    #[test]
    fn test_run_failures() {
        let config = RinkdrawError::Config("stroke_scale must be positive".to_string());
        let reports_for_config = reports(&config);
        assert_eq!(reports_for_config.len(), 1);
        assert_eq!(
            reports_for_config[0].to_string(),
            "Configuration error: stroke_scale must be positive"
        );
        assert_eq!(
            code_of(reports_for_config[0].as_ref()).as_deref(),
            Some("rinkdraw::config")
        );
        assert!(help_of(reports_for_config[0].as_ref()).is_some());

        let io = RinkdrawError::Io(std::io::Error::other("missing"));
        let reports_for_io = reports(&io);
        assert_eq!(code_of(reports_for_io[0].as_ref()).as_deref(), Some("rinkdraw::io"));
        assert_eq!(help_of(reports_for_io[0].as_ref()), None);
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let diag = Diagnostic::for_code(ErrorCode::E201, "path discarded")
            .with_label(Span::new(0..5), "primary")
            .with_secondary_label(Span::new(6..8), "secondary");

        let report = DrillReport::new(&diag, "P9 -> P8 -> 10,10");
        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("primary"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_summarize_groups_by_phase_and_severity() {
        let diags = vec![
            Diagnostic::for_code(ErrorCode::E200, "a"),
            Diagnostic::for_code(ErrorCode::E100, "b"),
            Diagnostic::for_code(ErrorCode::E200, "c"),
            Diagnostic::for_code(ErrorCode::E201, "d"),
            Diagnostic::for_code(ErrorCode::E300, "e"),
        ];
        assert_eq!(
            summarize(&diags),
            "1 parse error, 1 build error, 2 build warnings, 1 render warning"
        );
        assert_eq!(summarize(&[]), "");
    }

    #[test]
    fn test_render_report_includes_source() {
        let diag = Diagnostic::for_code(ErrorCode::E102, "unknown zone `slot`")
            .with_label(Span::new(6..10), "not a zone");
        let reports = drill_reports(std::slice::from_ref(&diag), "@zone slot");

        let report = render_report(&reports[0]);
        assert!(report.contains("unknown zone `slot`"));
        assert!(report.contains("parse::E102"));
        assert!(report.contains("@zone"));
    }
}
