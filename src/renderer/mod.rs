//! Rendering boundary
//!
//! Effects describe themselves through a [`DrawSink`]; pixel output is
//! somebody else's job.

pub mod color;
pub mod shapes;
pub mod sink;
pub mod vertex;

pub use color::Color;
pub use sink::{DrawCommand, DrawSink, MeshSink, RecordingSink};
pub use vertex::Vertex;
