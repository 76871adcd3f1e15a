use super::helper_function::resolve_seed;
use super::input_validation_function::validate_present;
use super::{InitializerRecord, RecordContext};
use crate::ModelError;
use crate::neural_network::connector::{BackpropagationConnector, KohonenConnector};
use crate::neural_network::layer::ActivationLayer;
use crate::traits::{Initializer, RestoreInitializer};
use ndarray::{Array1, Array2, Axis, s};
use ndarray_rand::RandomExt;
// rand and rand_distr as re-exported by ndarray-rand (rand 0.8), not the crate's rand 0.9:
// `random_using` only accepts generators and distributions from its own rand version.
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand_distr::Uniform;

const SEED_KEY: &str = "seed";

/// Scale of the Nguyen-Widrow factor.
const NGUYEN_WIDROW_SCALE: f64 = 0.7;

/// Nguyen-Widrow initializer.
///
/// The Nguyen-Widrow factor is `beta = 0.7 * hidden^(1 / input)`, where `input` is the
/// number of inputs feeding a layer and `hidden` the number of neurons in it.
///
/// - Activation layer: `input` is the layer's fan-in and `hidden` its size. Biases are
///   drawn uniformly from `[-beta, beta]`. A layer without incoming synapses uses
///   `beta = 0.7`.
/// - Connectors: `input` is the source size and `hidden` the target size. For each
///   target neuron, the weights of its incoming synapses are drawn uniformly from
///   `[-1, 1)` and rescaled so that their Euclidean norm equals `beta`. Synapses are
///   grouped per target neuron in synapse index order.
///
/// # Persistence
///
/// The record holds `"seed"` as an unsigned integer if one is set, and is empty otherwise.
///
/// # Example
/// ```rust
/// use rustyinit::neural_network::*;
///
/// let input = ActivationLayer::new(4);
/// let mut hidden = ActivationLayer::new(3);
/// let mut connector =
///     BackpropagationConnector::new(&input, &mut hidden, ConnectionMode::Complete).unwrap();
///
/// let initializer = NguyenWidrowFunction::new().with_seed(7);
/// initializer.initialize_backpropagation_connector(Some(&mut connector)).unwrap();
/// initializer.initialize_layer(Some(&mut hidden)).unwrap();
///
/// let beta = nguyen_widrow_factor(4, 3);
/// for row in connector.weights().rows() {
///     assert!((row.dot(&row).sqrt() - beta).abs() < 1e-9);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NguyenWidrowFunction {
    seed: Option<u64>,
}

/// Computes the Nguyen-Widrow factor `0.7 * hidden_count^(1 / input_count)`.
///
/// # Parameters
///
/// - `input_count` - Number of inputs feeding each neuron
/// - `hidden_count` - Number of neurons being initialized
///
/// # Returns
///
/// * `f64` - The factor, or `0.7` when `input_count` is zero
pub fn nguyen_widrow_factor(input_count: usize, hidden_count: usize) -> f64 {
    if input_count == 0 {
        return NGUYEN_WIDROW_SCALE;
    }
    NGUYEN_WIDROW_SCALE * (hidden_count as f64).powf(1.0 / input_count as f64)
}

impl NguyenWidrowFunction {
    /// Creates a Nguyen-Widrow initializer without a fixed seed
    pub fn new() -> Self {
        Self { seed: None }
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

    get_field!(get_seed, seed, Option<u64>);

    /// Draws one weight per synapse, given the target neuron index of each synapse.
    ///
    /// The weights of the synapses ending in the same target neuron form a vector of norm
    /// `beta`. The result is in the same order as `target_indices`.
    fn normalized_weights(
        &self,
        target_indices: &[usize],
        target_count: usize,
        beta: f64,
    ) -> Vec<f64> {
        let mut counts = vec![0usize; target_count];
        for &target in target_indices {
            counts[target] += 1;
        }
        let width = counts.iter().copied().max().unwrap_or(0);

        let mut rng = StdRng::seed_from_u64(resolve_seed(self.seed));
        let mut matrix: Array2<f64> =
            Array2::random_using((target_count, width), Uniform::new(-1.0, 1.0), &mut rng);

        for (mut row, &count) in matrix.axis_iter_mut(Axis(0)).zip(&counts) {
            let mut incoming = row.slice_mut(s![..count]);
            let norm = incoming.dot(&incoming).sqrt();
            let scale = if norm > 0.0 { beta / norm } else { 0.0 };
            incoming.mapv_inplace(|weight| weight * scale);
        }

        let mut cursors = vec![0usize; target_count];
        target_indices
            .iter()
            .map(|&target| {
                let weight = matrix[[target, cursors[target]]];
                cursors[target] += 1;
                weight
            })
            .collect()
    }
}

impl Initializer for NguyenWidrowFunction {
    fn initialize_layer(&self, layer: Option<&mut ActivationLayer>) -> Result<(), ModelError> {
        let layer = validate_present(layer, "layer")?;
        let beta = nguyen_widrow_factor(layer.get_fan_in(), layer.get_neuron_count());

        let mut rng = StdRng::seed_from_u64(resolve_seed(self.seed));
        let biases = Array1::random_using(
            layer.get_neuron_count(),
            Uniform::new_inclusive(-beta, beta),
            &mut rng,
        );

        for (neuron, &bias) in layer.neurons_mut().zip(biases.iter()) {
            neuron.set_bias(bias);
        }
        Ok(())
    }

    fn initialize_backpropagation_connector(
        &self,
        connector: Option<&mut BackpropagationConnector>,
    ) -> Result<(), ModelError> {
        let connector = validate_present(connector, "connector")?;
        let beta = nguyen_widrow_factor(
            connector.get_source_neuron_count(),
            connector.get_target_neuron_count(),
        );
        let target_indices: Vec<usize> = connector
            .synapses()
            .iter()
            .map(|synapse| synapse.get_target_index())
            .collect();
        let weights =
            self.normalized_weights(&target_indices, connector.get_target_neuron_count(), beta);

        for (synapse, weight) in connector.synapses_mut().zip(weights) {
            synapse.set_weight(weight);
        }
        Ok(())
    }

    fn initialize_kohonen_connector(
        &self,
        connector: Option<&mut KohonenConnector>,
    ) -> Result<(), ModelError> {
        let connector = validate_present(connector, "connector")?;
        let beta = nguyen_widrow_factor(
            connector.get_source_neuron_count(),
            connector.get_target_neuron_count(),
        );
        let target_indices: Vec<usize> = connector
            .synapses()
            .iter()
            .map(|synapse| connector.target_index_of(synapse))
            .collect();
        let weights =
            self.normalized_weights(&target_indices, connector.get_target_neuron_count(), beta);

        for (synapse, weight) in connector.synapses_mut().zip(weights) {
            synapse.set_weight(weight);
        }
        Ok(())
    }

    fn initializer_type(&self) -> &str {
        "NguyenWidrow"
    }

    fn write_record(&self, record: Option<&mut InitializerRecord>) -> Result<(), ModelError> {
        let record = validate_present(record, "record")?;
        if let Some(seed) = self.seed {
            record.add_value(SEED_KEY, seed);
        }
        Ok(())
    }
}

impl RestoreInitializer for NguyenWidrowFunction {
    fn read_record(
        record: Option<&InitializerRecord>,
        _context: &RecordContext,
    ) -> Result<Self, ModelError> {
        let record = validate_present(record, "record")?;
        record.check_version()?;
        Ok(Self {
            seed: record.get_optional_u64(SEED_KEY)?,
        })
    }
}
