//! WebGPU rendering module
//!
//! Every sprite is a flat-colored quad built on the CPU each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, view_to_ndc};
pub use vertex::Vertex;
