/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value of the
/// specified field. The generated method includes appropriate documentation
/// describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_constant)
/// - `$field_name` - The name of the field to access (e.g., constant)
/// - `$return_type` - The return type of the getter method
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// Module `error` contains the error types returned by every fallible operation of this crate.
///
/// - `ModelError` - Argument, record, configuration and processing errors
/// - `IoError` - File system and JSON errors raised while saving or loading snapshots
pub mod error;

/// Module `traits` contains the contracts shared by all initialization strategies.
///
/// - `Initializer` - Initializes biases of activation layers and weights of backpropagation
///   and Kohonen connectors, and writes its configuration to an `InitializerRecord`
/// - `RestoreInitializer` - Reconstructs a strategy from an `InitializerRecord`
pub mod traits;

/// Module `neural_network` provides the parameter targets and the initialization strategies.
///
/// # Parameter Targets
/// - **ActivationLayer**: A flat collection of `ActivationNeuron`s, each carrying a bias
/// - **KohonenLayer**: A rectangular grid of position neurons without biases
/// - **BackpropagationConnector**: Synapses between two activation layers, complete or one-to-one
/// - **KohonenConnector**: Synapses from an activation layer onto every cell of a Kohonen grid
///
/// # Initialization Strategies
/// - **ConstantFunction**: Assigns one fixed constant to every bias and weight
/// - **ZeroFunction**: Assigns zero to every bias and weight
/// - **RandomFunction**: Draws values uniformly from a closed range
/// - **NormalFunction**: Draws values from a Gaussian distribution
/// - **NguyenWidrowFunction**: Scales each neuron's incoming weight vector by the Nguyen-Widrow factor
///
/// # Persistence
/// - **InitializerRecord**: Versioned flat key/value record holding a strategy's configuration
/// - **InitializerSnapshot**: Typed envelope that saves and restores any strategy as JSON
///
/// # Examples
/// ```rust
/// use rustyinit::neural_network::*;
///
/// let mut layer = ActivationLayer::new(3);
/// let initializer = ConstantFunction::new(0.5);
///
/// initializer.initialize_layer(Some(&mut layer)).unwrap();
/// assert!(layer.neurons().iter().all(|neuron| neuron.get_bias() == 0.5));
///
/// // Save the configuration and restore it
/// let mut record = InitializerRecord::new();
/// initializer.write_record(Some(&mut record)).unwrap();
/// let restored = ConstantFunction::read_record(Some(&record), &RecordContext).unwrap();
/// assert_eq!(restored.get_constant(), 0.5);
/// ```
pub mod neural_network;

/// Module `prelude` re-exports the most commonly used types of this crate.
pub mod prelude;

pub use error::{IoError, ModelError};
