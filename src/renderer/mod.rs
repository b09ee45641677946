//! WebGPU rendering module
//!
//! Balls and the overlay label are tessellated into one colored-triangle
//! stream on the CPU each frame and drawn in a single render pass.

pub mod pipeline;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};
