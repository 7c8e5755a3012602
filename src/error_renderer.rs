//! Error rendering using ariadne
//!
//! Renders the diagnostics of an [`Error`] with source snippets pointing at
//! the part of the expression that has no value.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expression>";

/// Render an error to stderr
///
/// # Example
/// ```no_run
/// use svexpr::{ExpressionParser, NoReferences, render_error};
///
/// let parser = ExpressionParser::new(NoReferences);
/// if let Err(e) = parser.try_evaluate("1 / 0") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostics(error.source_text(), error.diagnostics(), writer, use_color)
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Info => ReportKind::Advice,
        };

        let span = clamp(diag.span.0.clone(), source.len());
        let mut report = Report::build(kind, (SOURCE_ID, span.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, span))
                .with_message(&diag.message)
                .with_color(color),
        );

        for related in &diag.related {
            let color = colors.next();
            report = report.with_label(
                Label::new((SOURCE_ID, clamp(related.span.0.clone(), source.len())))
                    .with_message(&related.message)
                    .with_color(color),
            );
        }

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        // Reborrow so the writer is not moved.
        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

/// Spans past the end of the text (e.g. "expected expression" at EOF) are
/// pulled back inside it.
fn clamp(range: std::ops::Range<usize>, len: usize) -> std::ops::Range<usize> {
    let start = range.start.min(len);
    start..range.end.clamp(start, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExpressionParser, NoReferences, ParameterTable};

    #[test]
    fn test_render_syntax_error() {
        let parser = ExpressionParser::new(NoReferences);
        let err = parser.try_evaluate("1 + * 2").unwrap_err();
        let output = render_error_to_string_no_color(&err);

        assert!(output.contains("Error") || output.contains("error"));
        assert!(output.contains("1 + * 2"));
        assert!(output.contains("P001"));
    }

    #[test]
    fn test_render_unknown_identifier() {
        let parser = ExpressionParser::new(ParameterTable::new().with("one", "1"));
        let err = parser.try_evaluate("one + unknown").unwrap_err();
        let output = render_error_to_string_no_color(&err);

        assert!(output.contains("Unknown identifier 'unknown'"));
        assert!(output.contains("one + unknown"));
        assert!(output.contains("R001"));
    }

    #[test]
    fn test_render_evaluation_error_shows_substituted_text() {
        let parser = ExpressionParser::new(ParameterTable::new().with("zero", "0"));
        let err = parser.try_evaluate("4 / zero").unwrap_err();
        let output = render_error_to_string_no_color(&err);

        assert!(output.contains("Division by zero"));
        assert!(output.contains("4 / 0"));
    }

    #[test]
    fn test_render_to_string_is_multiline() {
        let parser = ExpressionParser::new(NoReferences);
        let err = parser.try_evaluate("{1, 2").unwrap_err();
        let output = render_error_to_string_no_color(&err);

        assert!(!output.is_empty());
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(3..3, 3), 3..3);
        assert_eq!(clamp(2..10, 5), 2..5);
        assert_eq!(clamp(7..9, 5), 5..5);
    }
}
