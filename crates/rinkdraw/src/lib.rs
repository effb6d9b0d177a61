//! Rinkdraw - Hockey drill diagrams from a short text notation.
//!
//! Parsing, model building and rendering for the Rinkdraw drill notation.
//! Notation text becomes an immutable [`scene::Diagram`], which is drawn
//! onto a [`Surface`] as vector primitives that keep the rink's 2:1 aspect
//! ratio on any surface size.

pub mod config;
pub mod export;
pub mod render;

mod error;
mod surface;

pub use rinkdraw_core::{color, draw, geometry, rink, scene};
pub use rinkdraw_parser::{Diagnostic, ErrorCode, Parsed, Phase, Severity, Span};

pub use error::RinkdrawError;
pub use render::{RenderOutcome, Renderer, Viewport};
pub use surface::Surface;

use std::path::Path;

use log::{debug, info, trace, warn};

use config::AppConfig;
use export::{Exporter, svg::SvgBuilder};
use scene::Diagram;

/// The result of a render call: what happened to the surface, and every
/// diagnostic collected on the way.
#[derive(Debug, Clone)]
pub struct Rendered {
    outcome: RenderOutcome,
    diagnostics: Vec<Diagnostic>,
}

impl Rendered {
    pub fn outcome(&self) -> &RenderOutcome {
        &self.outcome
    }

    /// Parser and builder diagnostics in source order (notation renders
    /// only), then the renderer's style warning, then `E300` if the surface
    /// was skipped.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (RenderOutcome, Vec<Diagnostic>) {
        (self.outcome, self.diagnostics)
    }
}

/// Builder for parsing and rendering Rinkdraw diagrams.
///
/// # Examples
///
/// ```rust
/// use rinkdraw::{DiagramBuilder, Surface, config::AppConfig};
///
/// let source = "P1 20,50\nX2 60,40\nP1 -> X2 :pass";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse source to the scene model
/// let parsed = builder.parse(source);
/// assert!(parsed.diagnostics().is_empty());
///
/// // Draw it on a surface
/// let mut surface = Surface::new(800.0, 400.0);
/// let rendered = builder.render(parsed.diagram(), &mut surface);
/// assert!(rendered.outcome().is_drawn());
///
/// // Or straight to SVG
/// let svg = builder.render_svg(parsed.diagram()).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse notation into a diagram.
    ///
    /// Never fails: lines that cannot be used are reported in the returned
    /// diagnostics and the rest of the drill is still built.
    pub fn parse(&self, source: &str) -> Parsed {
        info!("Parsing diagram");
        let parsed = rinkdraw_parser::parse(source);
        debug!(diagnostics = parsed.diagnostics().len(); "Diagram parsed");
        trace!(diagram:? = parsed.diagram(); "Parsed diagram");
        parsed
    }

    /// Parse notation, failing if anything in it was reported.
    ///
    /// # Errors
    ///
    /// Returns [`RinkdrawError::Parse`] carrying every diagnostic and the
    /// source text.
    pub fn parse_strict(&self, source: &str) -> Result<Diagram, RinkdrawError> {
        self.parse(source)
            .into_strict()
            .map_err(|err| RinkdrawError::new_parse_error(err, source))
    }

    /// Draw a diagram onto a surface, replacing its previous content.
    ///
    /// Never fails. An unavailable surface gives [`RenderOutcome::Skipped`]
    /// and keeps what it had; an invalid stroke scale is drawn at `1.0`.
    /// Both are reported in the returned diagnostics.
    pub fn render(&self, diagram: &Diagram, surface: &mut Surface) -> Rendered {
        let renderer = Renderer::new(self.config.style());
        let outcome = renderer.render(diagram, surface);
        let diagnostics = renderer
            .style_diagnostic()
            .into_iter()
            .chain(outcome.diagnostic())
            .cloned()
            .collect();
        Rendered {
            outcome,
            diagnostics,
        }
    }

    /// Parse notation and draw it onto a surface.
    ///
    /// Never fails; see [`render`](Self::render).
    pub fn render_notation(&self, source: &str, surface: &mut Surface) -> Rendered {
        let (diagram, mut diagnostics) = self.parse(source).into_parts();
        let (outcome, render_diagnostics) = self.render(&diagram, surface).into_parts();
        diagnostics.extend(render_diagnostics);
        Rendered {
            outcome,
            diagnostics,
        }
    }

    /// Render a diagram to an SVG string on a surface of the configured size.
    ///
    /// # Errors
    ///
    /// Returns [`RinkdrawError::Export`] if the configured surface size
    /// cannot be drawn on.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, RinkdrawError> {
        let surface = self.draw_configured_surface(diagram)?;
        let svg = SvgBuilder::default()
            .with_style(self.config.style())
            .build()
            .render_surface(&surface);

        info!("SVG rendered successfully");
        Ok(svg.to_string())
    }

    /// Render a diagram and write it as an SVG file.
    ///
    /// # Errors
    ///
    /// Same as [`render_svg`](Self::render_svg), plus
    /// [`RinkdrawError::Export`] if the file cannot be written.
    pub fn write_svg(&self, diagram: &Diagram, path: impl AsRef<Path>) -> Result<(), RinkdrawError> {
        let surface = self.draw_configured_surface(diagram)?;
        let mut exporter = SvgBuilder::new(path.as_ref())
            .with_style(self.config.style())
            .build();
        exporter.export_surface(&surface)?;
        Ok(())
    }

    fn draw_configured_surface(&self, diagram: &Diagram) -> Result<Surface, RinkdrawError> {
        let size = self.config.surface();
        let mut surface = Surface::new(size.width(), size.height());
        let (outcome, diagnostics) = self.render(diagram, &mut surface).into_parts();
        match outcome {
            RenderOutcome::Drawn { .. } => {
                for diagnostic in &diagnostics {
                    warn!(
                        code:? = diagnostic.code(),
                        message = diagnostic.message();
                        "Rendered with fallback"
                    );
                }
                Ok(surface)
            }
            RenderOutcome::Skipped { diagnostic } => {
                Err(export::Error::Render(diagnostic.message().to_string()).into())
            }
        }
    }
}
