//! Error types for perimeter operations.
//!
//! The placement engine itself never fails; [`PerimeterError`] covers the
//! boundary around it: configuration, policy validation and export.

use std::io;

use thiserror::Error;

use perimeter_core::color::ColorError;

/// The main error type for perimeter operations.
#[derive(Debug, Error)]
pub enum PerimeterError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid placement policy: {0}")]
    InvalidPolicy(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for PerimeterError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<ColorError> for PerimeterError {
    fn from(error: ColorError) -> Self {
        Self::Config(error.to_string())
    }
}
