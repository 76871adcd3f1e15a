use super::input_validation_function::validate_present;
use super::{InitializerRecord, RecordContext};
use crate::ModelError;
use crate::neural_network::connector::{BackpropagationConnector, KohonenConnector};
use crate::neural_network::layer::ActivationLayer;
use crate::traits::{Initializer, RestoreInitializer};

/// Initializer that assigns zero to every bias and weight.
///
/// It has no configuration, so its record is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroFunction;

impl ZeroFunction {
    /// Creates a zero initializer
    pub fn new() -> Self {
        ZeroFunction
    }
}

impl Initializer for ZeroFunction {
    fn initialize_layer(&self, layer: Option<&mut ActivationLayer>) -> Result<(), ModelError> {
        let layer = validate_present(layer, "layer")?;
        layer.neurons_mut().for_each(|neuron| neuron.set_bias(0.0));
        Ok(())
    }

    fn initialize_backpropagation_connector(
        &self,
        connector: Option<&mut BackpropagationConnector>,
    ) -> Result<(), ModelError> {
        let connector = validate_present(connector, "connector")?;
        connector
            .synapses_mut()
            .for_each(|synapse| synapse.set_weight(0.0));
        Ok(())
    }

    fn initialize_kohonen_connector(
        &self,
        connector: Option<&mut KohonenConnector>,
    ) -> Result<(), ModelError> {
        let connector = validate_present(connector, "connector")?;
        connector
            .synapses_mut()
            .for_each(|synapse| synapse.set_weight(0.0));
        Ok(())
    }

    fn initializer_type(&self) -> &str {
        "Zero"
    }

    fn write_record(&self, record: Option<&mut InitializerRecord>) -> Result<(), ModelError> {
        validate_present(record, "record")?;
        Ok(())
    }
}

impl RestoreInitializer for ZeroFunction {
    fn read_record(
        record: Option<&InitializerRecord>,
        _context: &RecordContext,
    ) -> Result<Self, ModelError> {
        validate_present(record, "record")?.check_version()?;
        Ok(ZeroFunction)
    }
}
