// src/error.rs
use thiserror::Error;

/// Error hierarchy for the preview core
/// Covers catalog enumeration, text measurement, and rendering failures
#[derive(Error, Debug)]
pub enum PreviewError {
    // Measurement and rendering errors
    #[error("Text measurement failed for {context}: {message}")]
    MeasurementFailed { context: String, message: String },

    #[error("Render failed: {message}")]
    RenderFailed { message: String },

    #[error("Drawing surface error: {message}")]
    SurfaceError { message: String },

    // Catalog and enumeration errors
    #[error("Font catalog enumeration failed: {message}")]
    EnumerationFailed { message: String },

    #[error("No fonts available from catalog source")]
    NoFontsAvailable,

    // Communication errors
    #[error("Catalog event channel closed: {destination}")]
    ChannelClosed { destination: String },

    // Configuration errors
    #[error("Invalid configuration: {field} = {value}")]
    ConfigurationError { field: String, value: String },
}

pub type PreviewResult<T> = Result<T, PreviewError>;
