pub use crate::error::{IoError, ModelError};
pub use crate::neural_network::connector::*;
pub use crate::neural_network::initializer::*;
pub use crate::neural_network::layer::*;
pub use crate::traits::{Initializer, RestoreInitializer};
