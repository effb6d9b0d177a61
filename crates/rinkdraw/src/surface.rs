//! Render targets.
//!
//! A [`Surface`] stands in for whatever the host application draws on: it
//! has a pixel size, a mounted flag, and owns the primitives drawn on it
//! last. The renderer clears and refills it on every successful render.

use rinkdraw_core::{
    draw::{Primitive, RenderLayer},
    geometry::Size,
};

/// A drawing target with a pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    size: Size,
    mounted: bool,
    primitives: Vec<(RenderLayer, Primitive)>,
}

impl Surface {
    /// Creates a mounted, empty surface.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            mounted: true,
            primitives: Vec::new(),
        }
    }

    /// Creates a surface that is not attached to anything yet.
    pub fn unmounted(width: f32, height: f32) -> Self {
        Self {
            mounted: false,
            ..Self::new(width, height)
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width()
    }

    pub fn height(&self) -> f32 {
        self.size.height()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Detaches the surface. Primitives already drawn are kept.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }

    /// Returns `true` if the surface can be drawn on: mounted, with a
    /// finite, non-zero pixel size.
    pub fn is_available(&self) -> bool {
        let (width, height) = (self.width(), self.height());
        self.mounted && width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }

    /// The primitives currently on the surface, bottom to top.
    pub fn primitives(&self) -> &[(RenderLayer, Primitive)] {
        &self.primitives
    }

    /// The primitives drawn on one layer, in draw order.
    pub fn primitives_in(&self, layer: RenderLayer) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(move |(l, _)| *l == layer)
            .map(|(_, primitive)| primitive)
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.primitives.clear();
    }

    pub(crate) fn draw(&mut self, layer: RenderLayer, primitive: Primitive) {
        self.primitives.push((layer, primitive));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability() {
        assert!(Surface::new(800.0, 400.0).is_available());
        assert!(!Surface::unmounted(800.0, 400.0).is_available());
        assert!(!Surface::new(0.0, 400.0).is_available());
        assert!(!Surface::new(800.0, -1.0).is_available());
        assert!(!Surface::new(f32::NAN, 400.0).is_available());
        assert!(!Surface::new(800.0, f32::INFINITY).is_available());
    }

    #[test]
    fn test_mount_and_resize() {
        let mut surface = Surface::unmounted(0.0, 0.0);
        surface.mount();
        assert!(!surface.is_available());

        surface.resize(200.0, 100.0);
        assert!(surface.is_available());

        surface.unmount();
        assert!(!surface.is_mounted());
    }
}
