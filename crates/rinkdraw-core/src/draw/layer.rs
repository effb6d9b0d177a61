//! Layer-based z-ordering for diagram output.
//!
//! Every primitive the renderer produces is tagged with a [`RenderLayer`].
//! Layers are drawn bottom to top in declaration order, so a player is never
//! hidden beneath a pass line and labels always sit on top of their shapes.
//!
//! # Example
//!
//! ```
//! # use rinkdraw_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let boards = Rectangle::new().set("fill", "white");
//! output.add_to_layer(RenderLayer::Rink, Box::new(boards));
//!
//! let label = svg::node::element::Text::new("7");
//! output.add_to_layer(RenderLayer::Label, Box::new(label));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers of a rink diagram.
///
/// The `Ord` derive uses declaration order, so the first variant renders
/// first (bottom) and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Rink surface and boards
    Rink,
    /// Goal lines, blue lines, red line and face-off dots
    ZoneMarker,
    /// Shaded emphasis regions
    Emphasis,
    /// Skating, passing and shooting paths with their arrowheads
    Path,
    /// Players, opponents, goalies, pucks and cones
    Entity,
    /// Entity labels
    Label,
}

impl RenderLayer {
    /// All layers, bottom to top.
    pub const ALL: [RenderLayer; 6] = [
        Self::Rink,
        Self::ZoneMarker,
        Self::Emphasis,
        Self::Path,
        Self::Entity,
        Self::Label,
    ];

    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rink => "rink",
            Self::ZoneMarker => "zone-marker",
            Self::Emphasis => "emphasis",
            Self::Path => "path",
            Self::Entity => "entity",
            Self::Label => "label",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// Nodes are emitted in layer order (bottom to top) and, within a layer, in
/// the order they were added.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: keeps insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
