//! Vertex generation for external renderers
//!
//! The simulation draws nothing itself. These helpers turn a `Frame` into
//! triangle lists any GPU or canvas backend can upload directly.

pub mod shapes;
pub mod vertex;

pub use shapes::{circle, frame_vertices, polygon_outline};
pub use vertex::{Vertex, colors};
