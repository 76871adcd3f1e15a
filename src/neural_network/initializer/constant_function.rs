use super::input_validation_function::validate_present;
use super::{InitializerRecord, RecordContext};
use crate::ModelError;
use crate::neural_network::connector::{BackpropagationConnector, KohonenConnector};
use crate::neural_network::layer::ActivationLayer;
use crate::traits::{Initializer, RestoreInitializer};

/// Record key holding the constant.
const CONSTANT_KEY: &str = "constant";

/// Initializer that assigns one fixed constant to every bias and weight.
///
/// The constant is stored verbatim: zero, negative, very large and non-finite values are
/// all accepted. It is set once, at construction or restore, and never changes.
///
/// # Persistence
///
/// The record holds a single entry, `"constant"`, with the constant as a double.
///
/// # Example
/// ```rust
/// use rustyinit::neural_network::*;
///
/// let mut layer = ActivationLayer::new(3);
/// let initializer = ConstantFunction::new(0.5);
///
/// initializer.initialize_layer(Some(&mut layer)).unwrap();
/// assert_eq!(layer.biases().to_vec(), vec![0.5, 0.5, 0.5]);
///
/// // An absent target is rejected
/// assert!(initializer.initialize_layer(None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantFunction {
    constant: f64,
}

impl ConstantFunction {
    /// Creates a constant initializer.
    ///
    /// # Parameters
    ///
    /// * `constant` - The value assigned to every bias and weight
    ///
    /// # Returns
    ///
    /// * `Self` - A new ConstantFunction
    pub fn new(constant: f64) -> Self {
        Self { constant }
    }

    get_field!(get_constant, constant, f64);
}

impl Initializer for ConstantFunction {
    fn initialize_layer(&self, layer: Option<&mut ActivationLayer>) -> Result<(), ModelError> {
        let layer = validate_present(layer, "layer")?;
        for neuron in layer.neurons_mut() {
            neuron.set_bias(self.constant);
        }
        Ok(())
    }

    fn initialize_backpropagation_connector(
        &self,
        connector: Option<&mut BackpropagationConnector>,
    ) -> Result<(), ModelError> {
        let connector = validate_present(connector, "connector")?;
        for synapse in connector.synapses_mut() {
            synapse.set_weight(self.constant);
        }
        Ok(())
    }

    fn initialize_kohonen_connector(
        &self,
        connector: Option<&mut KohonenConnector>,
    ) -> Result<(), ModelError> {
        let connector = validate_present(connector, "connector")?;
        for synapse in connector.synapses_mut() {
            synapse.set_weight(self.constant);
        }
        Ok(())
    }

    fn initializer_type(&self) -> &str {
        "Constant"
    }

    fn write_record(&self, record: Option<&mut InitializerRecord>) -> Result<(), ModelError> {
        let record = validate_present(record, "record")?;
        record.add_value(CONSTANT_KEY, self.constant);
        Ok(())
    }
}

impl RestoreInitializer for ConstantFunction {
    fn read_record(
        record: Option<&InitializerRecord>,
        _context: &RecordContext,
    ) -> Result<Self, ModelError> {
        let record = validate_present(record, "record")?;
        record.check_version()?;
        Ok(Self::new(record.get_f64(CONSTANT_KEY)?))
    }
}
