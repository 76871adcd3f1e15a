use super::helper_function::sample_values;
use super::input_validation_function::{into_malformed_record, validate_present, validate_range};
use super::{InitializerRecord, RecordContext};
use crate::ModelError;
use crate::neural_network::connector::{BackpropagationConnector, KohonenConnector};
use crate::neural_network::layer::ActivationLayer;
use crate::traits::{Initializer, RestoreInitializer};
use rand::distr::Uniform;

const MIN_KEY: &str = "min";
const MAX_KEY: &str = "max";
const SEED_KEY: &str = "seed";

/// Initializer that draws every bias and weight uniformly from `[min, max]`.
///
/// Values are drawn in element index order. With a seed, every call produces the same
/// values for targets of the same size; without one, each call draws a fresh seed.
///
/// # Persistence
///
/// The record holds `"min"` and `"max"` as doubles and, if set, `"seed"` as an unsigned
/// integer.
///
/// # Example
/// ```rust
/// use rustyinit::neural_network::*;
///
/// let input = ActivationLayer::new(3);
/// let mut output = ActivationLayer::new(2);
/// let mut connector =
///     BackpropagationConnector::new(&input, &mut output, ConnectionMode::Complete).unwrap();
///
/// let initializer = RandomFunction::new(-0.5, 0.5).unwrap().with_seed(42);
/// initializer.initialize_backpropagation_connector(Some(&mut connector)).unwrap();
///
/// assert!(connector.synapses().iter().all(|s| (-0.5..=0.5).contains(&s.get_weight())));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomFunction {
    min: f64,
    max: f64,
    seed: Option<u64>,
}

impl RandomFunction {
    /// Creates a uniform random initializer.
    ///
    /// # Parameters
    ///
    /// - `min` - Lower bound of the range (inclusive)
    /// - `max` - Upper bound of the range (inclusive)
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new RandomFunction without a fixed seed
    /// - `Err(ModelError::InputValidationError)` - If a bound is not finite or `min > max`
    pub fn new(min: f64, max: f64) -> Result<Self, ModelError> {
        validate_range(min, max)?;
        Ok(Self {
            min,
            max,
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

    get_field!(get_min, min, f64);

    get_field!(get_max, max, f64);

    get_field!(get_seed, seed, Option<u64>);

    fn sample(&self, count: usize) -> Result<Vec<f64>, ModelError> {
        let distribution = Uniform::new_inclusive(self.min, self.max)
            .map_err(|e| ModelError::ProcessingError(e.to_string()))?;
        Ok(sample_values(&distribution, count, self.seed))
    }
}

impl Initializer for RandomFunction {
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
        "Random"
    }

    fn write_record(&self, record: Option<&mut InitializerRecord>) -> Result<(), ModelError> {
        let record = validate_present(record, "record")?;
        record.add_value(MIN_KEY, self.min);
        record.add_value(MAX_KEY, self.max);
        if let Some(seed) = self.seed {
            record.add_value(SEED_KEY, seed);
        }
        Ok(())
    }
}

impl RestoreInitializer for RandomFunction {
    fn read_record(
        record: Option<&InitializerRecord>,
        _context: &RecordContext,
    ) -> Result<Self, ModelError> {
        let record = validate_present(record, "record")?;
        record.check_version()?;
        let mut initializer = Self::new(record.get_f64(MIN_KEY)?, record.get_f64(MAX_KEY)?)
            .map_err(into_malformed_record)?;
        initializer.seed = record.get_optional_u64(SEED_KEY)?;
        Ok(initializer)
    }
}
