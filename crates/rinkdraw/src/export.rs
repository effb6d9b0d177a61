//! Export functionality for Rinkdraw diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a drawn [`Surface`] to an output format. It is the final stage in
//! the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Notation
//!     ↓ parse
//! Instructions
//!     ↓ build
//! Diagram
//!     ↓ render
//! Surface (primitives in pixels)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. It converts into
//! [`RinkdrawError::Export`] at the crate boundary.
//!
//! [`RinkdrawError::Export`]: crate::RinkdrawError::Export

/// SVG export backend.
pub mod svg;

use crate::surface::Surface;

/// Abstraction for export backends.
pub trait Exporter {
    /// Exports everything currently drawn on `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the surface holds nothing to export, or
    /// [`Error::Io`] if writing the output fails.
    fn export_surface(&mut self, surface: &Surface) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
