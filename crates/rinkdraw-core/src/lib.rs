//! Rinkdraw Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Rinkdraw parser,
//! renderer and exporters. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Rink**: The fixed logical rink and its reference markings ([`rink`] module)
//! - **Scene**: The immutable diagram model ([`scene`] module)
//! - **Draw**: Surface primitives, strokes and render layers ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod rink;
pub mod scene;
