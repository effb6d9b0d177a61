//! Configuration types for Rinkdraw rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are drawn. All types implement [`serde::Deserialize`] for loading from
//! external sources. Keys are written in `snake_case`; the `camelCase`
//! spelling used by web front ends is accepted as an alias.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and surface settings.
//! - [`StyleConfig`] - Zone marker visibility, stroke scaling and colors.
//! - [`ColorScheme`] - The palette used for rink lines and drawables.
//! - [`SurfaceConfig`] - Pixel size of the surface used for SVG output.
//!
//! # Example
//!
//! ```
//! # use rinkdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().show_zone_markers());
//! assert_eq!(config.style().stroke_scale(), Ok(1.0));
//! ```

use serde::Deserialize;

use rinkdraw_core::color::Color;

/// Top-level application configuration combining style and surface settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Output surface configuration section.
    #[serde(default)]
    surface: SurfaceConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and surface configurations.
    pub fn new(style: StyleConfig, surface: SurfaceConfig) -> Self {
        Self { style, surface }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the surface configuration.
    pub fn surface(&self) -> &SurfaceConfig {
        &self.surface
    }

    /// Returns a mutable reference to the style configuration.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    /// Returns a mutable reference to the surface configuration.
    pub fn surface_mut(&mut self) -> &mut SurfaceConfig {
        &mut self.surface
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Draw goal lines, blue lines, the red line and face-off dots.
    #[serde(default = "default_show_zone_markers", alias = "showZoneMarkers")]
    show_zone_markers: bool,

    /// Multiplier applied to every line width and entity size.
    #[serde(default = "default_stroke_scale", alias = "strokeScale")]
    stroke_scale: f32,

    #[serde(default, alias = "colorScheme")]
    color_scheme: ColorScheme,
}

fn default_show_zone_markers() -> bool {
    true
}

pub(crate) const DEFAULT_STROKE_SCALE: f32 = 1.0;

fn default_stroke_scale() -> f32 {
    DEFAULT_STROKE_SCALE
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            show_zone_markers: default_show_zone_markers(),
            stroke_scale: default_stroke_scale(),
            color_scheme: ColorScheme::default(),
        }
    }
}

impl StyleConfig {
    pub fn show_zone_markers(&self) -> bool {
        self.show_zone_markers
    }

    /// Returns the stroke scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured scale is not finite or not
    /// strictly positive.
    pub fn stroke_scale(&self) -> Result<f32, String> {
        if self.stroke_scale.is_finite() && self.stroke_scale > 0.0 {
            Ok(self.stroke_scale)
        } else {
            Err(format!(
                "Invalid stroke scale in config: {} (must be a finite number greater than zero)",
                self.stroke_scale
            ))
        }
    }

    pub fn color_scheme(&self) -> &ColorScheme {
        &self.color_scheme
    }

    pub fn set_show_zone_markers(&mut self, show: bool) {
        self.show_zone_markers = show;
    }

    pub fn set_stroke_scale(&mut self, scale: f32) {
        self.stroke_scale = scale;
    }

    pub fn set_color_scheme(&mut self, color_scheme: ColorScheme) {
        self.color_scheme = color_scheme;
    }
}

/// Palette for the rink and everything drawn on it.
///
/// Colors are written as CSS color strings. Missing entries keep their
/// default value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Boards and goal lines.
    #[serde(alias = "rinkLine")]
    pub rink_line: Color,
    #[serde(alias = "blueLine")]
    pub blue_line: Color,
    /// Center red line and face-off dots.
    #[serde(alias = "redLine")]
    pub red_line: Color,
    pub player: Color,
    pub opponent: Color,
    pub puck: Color,
    pub goalie: Color,
    pub cone: Color,
    /// Skating, passing and shooting paths.
    pub path: Color,
    /// Fill of emphasis regions. Drawn translucent.
    pub emphasis: Color,
    /// Ice surface inside the boards.
    pub background: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            rink_line: palette("#4b5563"),
            blue_line: palette("#1d4ed8"),
            red_line: palette("#dc2626"),
            player: palette("#2563eb"),
            opponent: palette("#b91c1c"),
            puck: palette("#111827"),
            goalie: palette("#047857"),
            cone: palette("#f97316"),
            path: palette("#1f2937"),
            emphasis: palette("#facc15"),
            background: palette("white"),
        }
    }
}

fn palette(css: &str) -> Color {
    Color::new(css).expect("default palette colors are valid CSS colors")
}

/// Pixel size of the surface created for SVG output.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_surface_width")]
    width: f32,

    #[serde(default = "default_surface_height")]
    height: f32,
}

fn default_surface_width() -> f32 {
    800.0
}

fn default_surface_height() -> f32 {
    400.0
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
        }
    }
}

impl SurfaceConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
