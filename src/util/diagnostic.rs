//! User-facing diagnostic messages.
//!
//! Every rejected scheme is reported with the file it lives in, the scheme
//! name, the failing field and a suggested fix.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::annotation::SchemeError;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The run cannot go on
    Error,
    /// A scheme was dropped, the run goes on
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn paint(text: &str, ansi: &str, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", ansi, text)
    } else {
        text.to_string()
    }
}

/// A diagnostic about one header.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    /// Lines printed as `= ...` under the message
    pub context: Vec<String>,
    /// Suggested fixes, printed numbered
    pub suggestions: Vec<String>,
    /// Header the diagnostic refers to
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Downgrade to a warning.
    pub fn as_warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    /// Render for the terminal, with ANSI colors if `color` is set.
    pub fn format(&self, color: bool) -> String {
        let severity = paint(self.severity.label(), self.severity.ansi(), color);
        let mut lines = vec![format!("{}: {}", severity, self.message)];

        lines.extend(
            self.location
                .iter()
                .map(|path| format!("  --> {}", path.display())),
        );
        lines.extend(self.context.iter().map(|ctx| format!("  = {}", ctx)));

        if !self.suggestions.is_empty() {
            lines.push(String::new());
            lines.push(format!("{}: consider:", paint("help", "1;32", color)));
            lines.extend(
                self.suggestions
                    .iter()
                    .enumerate()
                    .map(|(i, fix)| format!("  {}. {}", i + 1, fix)),
            );
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Build the diagnostic for a scheme error found in `path`.
///
/// Scheme-level failures are reported as warnings since the run goes on
/// without the scheme; fatal ones stay errors.
pub fn scheme_diagnostic(path: &Path, err: &SchemeError) -> Diagnostic {
    let diag = err
        .to_diagnostic()
        .with_location(path)
        .with_context(format!("scheme: `{}`", err.scheme()));
    if err.is_fatal() {
        diag
    } else {
        diag.as_warning()
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
