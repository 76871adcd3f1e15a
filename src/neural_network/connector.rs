/// Connector linking two activation layers, trained by backpropagation
pub mod backpropagation_connector;
/// Connector linking an activation layer to a Kohonen grid
pub mod kohonen_connector;

pub use backpropagation_connector::*;
pub use kohonen_connector::*;
