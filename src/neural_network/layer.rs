/// Activation layer whose neurons carry a trainable bias
pub mod activation_layer;
/// Kohonen (self-organizing map) layer arranged as a rectangular grid
pub mod kohonen_layer;

pub use activation_layer::*;
pub use kohonen_layer::*;
