//! Drawing definitions shared by the renderer and the exporters.
//!
//! - [`Primitive`]: a resolved surface primitive in device space
//! - [`RenderLayer`] / [`LayeredOutput`]: z-ordering of exported SVG nodes
//! - [`StrokeDefinition`]: line color, width and pattern

mod layer;
mod primitive;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::Primitive;
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
