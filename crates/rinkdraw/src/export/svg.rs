//! SVG export.

use std::path::{Path, PathBuf};

use log::{debug, info};
use svg::node::element as svg_element;

use rinkdraw_core::{color::Color, draw::LayeredOutput};

use super::{Error, Exporter};
use crate::{config::StyleConfig, surface::Surface};

/// Builder for [`Svg`] exporters.
///
/// # Example
///
/// ```rust,no_run
/// # use rinkdraw::export::{Exporter, svg::SvgBuilder};
/// # use rinkdraw::Surface;
/// let surface = Surface::new(800.0, 400.0);
/// let mut exporter = SvgBuilder::new("drill.svg").build();
/// exporter.export_surface(&surface).expect("Failed to export");
/// ```
#[derive(Debug, Default)]
pub struct SvgBuilder {
    file_name: PathBuf,
    background: Option<Color>,
}

impl SvgBuilder {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            background: None,
        }
    }

    /// Fill the area outside the rink with the style's ice color.
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.background = Some(style.color_scheme().background);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            file_name: self.file_name,
            background: self.background,
        }
    }
}

/// Writes surfaces as SVG documents.
#[derive(Debug)]
pub struct Svg {
    file_name: PathBuf,
    background: Option<Color>,
}

impl Svg {
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Renders the surface to an SVG document.
    ///
    /// The document has the surface's pixel size. Each render layer becomes
    /// one `<g data-layer="...">` group.
    pub fn render_surface(&self, surface: &Surface) -> svg::Document {
        let (width, height) = (surface.width(), surface.height());
        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(color) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", color),
            );
        }

        let mut output = LayeredOutput::new();
        for (layer, primitive) in surface.primitives() {
            output.add_to_layer(*layer, primitive.to_svg_node());
        }

        let groups = output.render();
        debug!(groups = groups.len(); "Surface layers rendered");
        groups.into_iter().fold(doc, |doc, group| doc.add(group))
    }
}

impl Exporter for Svg {
    fn export_surface(&mut self, surface: &Surface) -> Result<(), Error> {
        if surface.is_empty() {
            return Err(Error::Render(
                "surface has nothing drawn on it".to_string(),
            ));
        }

        let doc = self.render_surface(surface);
        svg::save(&self.file_name, &doc).map_err(Error::Io)?;

        info!(path:? = self.file_name; "SVG exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rinkdraw_core::draw::{Primitive, RenderLayer};

    use super::*;
    use crate::{DiagramBuilder, render::Renderer};

    fn drawn_surface(source: &str) -> Surface {
        let diagram = DiagramBuilder::default().parse(source).into_parts().0;
        let mut surface = Surface::new(400.0, 200.0);
        Renderer::new(&StyleConfig::default()).render(&diagram, &mut surface);
        surface
    }

    #[test]
    fn test_layers_become_groups() {
        let surface = drawn_surface("P1 20,50\nP1 -> 100,50 :pass");
        let svg = SvgBuilder::new("unused.svg")
            .build()
            .render_surface(&surface)
            .to_string();

        assert!(svg.contains(r#"viewBox="0 0 400 200""#));
        for layer in ["rink", "zone-marker", "path", "entity", "label"] {
            assert!(
                svg.contains(&format!(r#"data-layer="{layer}""#)),
                "missing layer {layer}"
            );
        }
        assert!(!svg.contains(r#"data-layer="emphasis""#));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_background() {
        let mut surface = Surface::new(10.0, 10.0);
        surface.draw(
            RenderLayer::Rink,
            Primitive::Line {
                from: Default::default(),
                to: Default::default(),
                stroke: Default::default(),
            },
        );

        let plain = SvgBuilder::new("x.svg").build().render_surface(&surface);
        assert!(!plain.to_string().contains(r#"height="100%""#));

        let filled = SvgBuilder::new("x.svg")
            .with_background(Color::new("white").unwrap())
            .build()
            .render_surface(&surface);
        assert!(filled.to_string().contains(r#"height="100%""#));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drill.svg");
        let surface = drawn_surface("X2 60,40");

        SvgBuilder::new(&path)
            .build()
            .export_surface(&surface)
            .expect("export succeeds");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        assert!(written.contains(r#"data-layer="entity""#));
    }

    #[test]
    fn test_empty_surface_is_not_exported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        let result = SvgBuilder::new(&path).build().export_surface(&Surface::new(10.0, 10.0));
        assert!(matches!(result, Err(Error::Render(_))));
        assert!(!path.exists());
    }
}
