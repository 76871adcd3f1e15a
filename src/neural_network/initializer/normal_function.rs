use super::helper_function::sample_values;
use super::input_validation_function::{
    into_malformed_record, validate_finite, validate_present, validate_std_dev,
};
use super::{InitializerRecord, RecordContext};
use crate::ModelError;
use crate::neural_network::connector::{BackpropagationConnector, KohonenConnector};
use crate::neural_network::layer::ActivationLayer;
use crate::traits::{Initializer, RestoreInitializer};
use rand_distr::Normal;

const MEAN_KEY: &str = "mean";
const STD_DEV_KEY: &str = "std_dev";
const SEED_KEY: &str = "seed";

/// Initializer that draws every bias and weight from a Gaussian distribution.
///
/// Values are drawn in element index order. A standard deviation of zero assigns the mean
/// to every parameter.
///
/// # Persistence
///
/// The record holds `"mean"` and `"std_dev"` as doubles and, if set, `"seed"` as an
/// unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalFunction {
    mean: f64,
    std_dev: f64,
    seed: Option<u64>,
}

impl NormalFunction {
    /// Creates a Gaussian initializer.
    ///
    /// # Parameters
    ///
    /// - `mean` - Mean of the distribution
    /// - `std_dev` - Standard deviation of the distribution
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new NormalFunction without a fixed seed
    /// - `Err(ModelError::InputValidationError)` - If `mean` is not finite, or `std_dev`
    ///   is negative or not finite
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, ModelError> {
        validate_finite(mean, "mean")?;
        validate_std_dev(std_dev)?;
        Ok(Self {
            mean,
            std_dev,
            seed: None,
        })
    }

    /// Fixes the seed, making every call deterministic.
    ///
    /// # Parameters
    ///
    /// * `seed` - Seed of the random number generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    get_field!(get_mean, mean, f64);

    get_field!(get_std_dev, std_dev, f64);

    get_field!(get_seed, seed, Option<u64>);

    fn sample(&self, count: usize) -> Result<Vec<f64>, ModelError> {
        let distribution = Normal::new(self.mean, self.std_dev)
            .map_err(|e| ModelError::ProcessingError(e.to_string()))?;
        Ok(sample_values(&distribution, count, self.seed))
    }
}

impl Initializer for NormalFunction {
    fn initialize_layer(&self, layer: Option<&mut ActivationLayer>) -> Result<(), ModelError> {
        let layer = validate_present(layer, "layer")?;
        let values = self.sample(layer.get_neuron_count())?;
        for (neuron, value) in layer.neurons_mut().zip(values) {
            neuron.set_bias(value);
        }
        Ok(())
    }

    fn initialize_backpropagation_connector(
        &self,
        connector: Option<&mut BackpropagationConnector>,
    ) -> Result<(), ModelError> {
        let connector = validate_present(connector, "connector")?;
        let values = self.sample(connector.get_synapse_count())?;
        for (synapse, value) in connector.synapses_mut().zip(values) {
            synapse.set_weight(value);
        }
        Ok(())
    }

    fn initialize_kohonen_connector(
        &self,
        connector: Option<&mut KohonenConnector>,
    ) -> Result<(), ModelError> {
        let connector = validate_present(connector, "connector")?;
        let values = self.sample(connector.get_synapse_count())?;
        for (synapse, value) in connector.synapses_mut().zip(values) {
            synapse.set_weight(value);
        }
        Ok(())
    }

    fn initializer_type(&self) -> &str {
        "Normal"
    }

    fn write_record(&self, record: Option<&mut InitializerRecord>) -> Result<(), ModelError> {
        let record = validate_present(record, "record")?;
        record.add_value(MEAN_KEY, self.mean);
        record.add_value(STD_DEV_KEY, self.std_dev);
        if let Some(seed) = self.seed {
            record.add_value(SEED_KEY, seed);
        }
        Ok(())
    }
}

impl RestoreInitializer for NormalFunction {
    fn read_record(
        record: Option<&InitializerRecord>,
        _context: &RecordContext,
    ) -> Result<Self, ModelError> {
        let record = validate_present(record, "record")?;
        record.check_version()?;
        let mut initializer =
            Self::new(record.get_f64(MEAN_KEY)?, record.get_f64(STD_DEV_KEY)?)
                .map_err(into_malformed_record)?;
        initializer.seed = record.get_optional_u64(SEED_KEY)?;
        Ok(initializer)
    }
}
