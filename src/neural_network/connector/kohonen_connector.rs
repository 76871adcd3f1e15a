use crate::ModelError;
use crate::neural_network::layer::{ActivationLayer, KohonenLayer};
use crate::traits::Initializer;
use ndarray::Array2;
use std::sync::Arc;

/// A synapse of a Kohonen connector.
///
/// # Fields
///
/// - `source_index` - Index of the neuron in the source activation layer
/// - `target_position` - (row, col) of the position neuron in the Kohonen grid
/// - `weight` - Trainable weight of the synapse, `0.0` until initialized
#[derive(Debug, Clone, PartialEq)]
pub struct KohonenSynapse {
    source_index: usize,
    target_position: (usize, usize),
    weight: f64,
}

impl KohonenSynapse {
    get_field!(get_source_index, source_index, usize);

    get_field!(get_target_position, target_position, (usize, usize));

    get_field!(get_weight, weight, f64);

    /// Sets the weight of the synapse.
    ///
    /// # Parameters
    ///
    /// * `weight` - The new weight value
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

/// Connector from an activation layer onto a Kohonen grid.
///
/// Every source neuron is linked to every position neuron of the grid, so the weights
/// of the synapses ending in one position form that position's codebook vector.
#[derive(Debug, Clone)]
pub struct KohonenConnector {
    source_neuron_count: usize,
    target: KohonenLayer,
    synapses: Vec<KohonenSynapse>,
    initializer: Option<Arc<dyn Initializer>>,
}

impl KohonenConnector {
    /// Creates a complete connector from `source` to the grid `target`.
    ///
    /// # Parameters
    ///
    /// - `source` - The activation layer providing the input vector
    /// - `target` - The Kohonen grid
    ///
    /// # Returns
    ///
    /// * `Self` - A new connector with `source_neuron_count * grid size` zero-weight synapses
    pub fn new(source: &ActivationLayer, target: &KohonenLayer) -> Self {
        let source_neuron_count = source.get_neuron_count();
        let synapses = target
            .positions()
            .flat_map(|target_position| {
                (0..source_neuron_count).map(move |source_index| KohonenSynapse {
                    source_index,
                    target_position,
                    weight: 0.0,
                })
            })
            .collect();

        Self {
            source_neuron_count,
            target: target.clone(),
            synapses,
            initializer: None,
        }
    }

    get_field!(get_source_neuron_count, source_neuron_count, usize);

    /// Returns the number of position neurons in the target grid
    pub fn get_target_neuron_count(&self) -> usize {
        self.target.get_neuron_count()
    }

    /// Returns the target grid
    pub fn get_target(&self) -> &KohonenLayer {
        &self.target
    }

    /// Returns the number of synapses in the connector
    pub fn get_synapse_count(&self) -> usize {
        self.synapses.len()
    }

    /// Returns the synapses of the connector
    pub fn synapses(&self) -> &[KohonenSynapse] {
        &self.synapses
    }

    /// Returns a mutable iterator over the synapses of the connector.
    ///
    /// The iterator only allows mutating existing synapses; it cannot add or remove any.
    pub fn synapses_mut(&mut self) -> std::slice::IterMut<'_, KohonenSynapse> {
        self.synapses.iter_mut()
    }

    /// Returns the row-major grid index of the position neuron a synapse ends in.
    pub(crate) fn target_index_of(&self, synapse: &KohonenSynapse) -> usize {
        self.target.index_of(synapse.target_position)
    }

    /// Returns the weights as a matrix with shape (grid size, source_neuron_count).
    ///
    /// Row `r * cols + c` is the codebook vector of grid position (r, c).
    pub fn weights(&self) -> Array2<f64> {
        let mut weights = Array2::zeros((self.get_target_neuron_count(), self.source_neuron_count));
        for synapse in &self.synapses {
            weights[[self.target_index_of(synapse), synapse.source_index]] = synapse.weight;
        }
        weights
    }

    /// Sets the strategy used by `initialize`
    ///
    /// # Parameters
    ///
    /// * `initializer` - Shared initialization strategy
    pub fn set_initializer(&mut self, initializer: Arc<dyn Initializer>) {
        self.initializer = Some(initializer);
    }

    /// Returns the strategy used by `initialize`, if one has been set
    pub fn get_initializer(&self) -> Option<&Arc<dyn Initializer>> {
        self.initializer.as_ref()
    }

    /// Initializes the weights of the connector with its own strategy.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The weights were initialized
    /// - `Err(ModelError::ProcessingError)` - If no initializer has been set
    pub fn initialize(&mut self) -> Result<(), ModelError> {
        let initializer = self.initializer.clone().ok_or_else(|| {
            ModelError::ProcessingError(String::from(
                "KohonenConnector has no initializer, call set_initializer first",
            ))
        })?;
        initializer.initialize_kohonen_connector(Some(self))
    }
}
