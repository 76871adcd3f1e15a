/// Module that contains the connector implementations (synapse collections between layers)
pub mod connector;
/// Module that contains the initialization strategies and their persistence types
pub mod initializer;
/// Module that contains the layer implementations (neuron collections)
pub mod layer;

pub use connector::*;
pub use initializer::*;
pub use layer::*;

pub use crate::traits::Initializer;
pub use crate::traits::RestoreInitializer;
