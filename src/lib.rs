//! Software triangle rasterization with per-pixel Phong illumination.
//!
//! The crate hand-implements the classic scanline-fill algorithm: triangle
//! vertices carry world-space positions and normals, both attributes are
//! linearly interpolated along edges and spans, and the full Phong
//! reflection model is evaluated at every covered pixel. Geometry comes
//! from a straight profile extrusion or the cube primitive.
//!
//! Windowing, input dispatch, and on-screen text stay with the caller: the
//! library consumes a [`crate::scene::context::RenderContext`] (camera,
//! viewport, light) and writes shaded pixels into any
//! [`crate::core::pipeline::PixelSink`].

pub mod core;
pub mod io;
pub mod pipeline;
pub mod scene;
