//! Adapter turning [`PerimeterError`] into miette diagnostics.

use std::fmt::Display;

use miette::Diagnostic;
use thiserror::Error;

use perimeter::PerimeterError;

/// A [`PerimeterError`] wrapped with a diagnostic code and help text.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ReportableError {
    message: String,
    code: &'static str,
    help: Option<&'static str>,
}

impl Diagnostic for ReportableError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help
            .map(|help| Box::new(help) as Box<dyn Display + 'a>)
    }
}

/// Convert an error into a diagnostic that miette can render.
pub fn to_reportable(err: &PerimeterError) -> ReportableError {
    let (code, help) = match err {
        PerimeterError::Io(_) => ("perimeter::io", None),
        PerimeterError::Config(_) => (
            "perimeter::config",
            Some("check the TOML file passed with --config or found in perimeter/config.toml"),
        ),
        PerimeterError::InvalidPolicy(_) => (
            "perimeter::policy",
            Some("min_distance must be non-negative, max_attempts at least 1, ranges non-empty"),
        ),
        PerimeterError::Export(_) => ("perimeter::export", None),
    };

    ReportableError {
        message: err.to_string(),
        code,
        help,
    }
}
