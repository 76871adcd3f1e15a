use crate::ModelError;
use crate::neural_network::layer::ActivationLayer;
use crate::traits::Initializer;
use ndarray::Array2;
use std::sync::Arc;

/// How the neurons of the source layer are linked to the neurons of the target layer.
///
/// # Variants
///
/// - `Complete` - Every source neuron is linked to every target neuron
/// - `OneToOne` - Source neuron `i` is linked to target neuron `i`; both layers must have
///   the same number of neurons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    Complete,
    OneToOne,
}

/// A synapse of a backpropagation connector.
///
/// # Fields
///
/// - `source_index` - Index of the neuron in the source layer
/// - `target_index` - Index of the neuron in the target layer
/// - `weight` - Trainable weight of the synapse, `0.0` until initialized
#[derive(Debug, Clone, PartialEq)]
pub struct BackpropagationSynapse {
    source_index: usize,
    target_index: usize,
    weight: f64,
}

impl BackpropagationSynapse {
    get_field!(get_source_index, source_index, usize);

    get_field!(get_target_index, target_index, usize);

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

/// Connector between two activation layers whose weights are trained by backpropagation.
///
/// Synapses are created once, by `new`, and are stored in source-major order for
/// `ConnectionMode::Complete`. Creating the connector registers the incoming synapses on
/// the target layer's fan-in.
///
/// # Example
/// ```rust
/// use rustyinit::neural_network::*;
///
/// let input = ActivationLayer::new(2);
/// let mut hidden = ActivationLayer::new(2);
/// let mut connector =
///     BackpropagationConnector::new(&input, &mut hidden, ConnectionMode::Complete).unwrap();
///
/// ConstantFunction::new(-1.0)
///     .initialize_backpropagation_connector(Some(&mut connector))
///     .unwrap();
///
/// assert_eq!(connector.get_synapse_count(), 4);
/// assert!(connector.synapses().iter().all(|synapse| synapse.get_weight() == -1.0));
/// ```
#[derive(Debug, Clone)]
pub struct BackpropagationConnector {
    source_neuron_count: usize,
    target_neuron_count: usize,
    mode: ConnectionMode,
    synapses: Vec<BackpropagationSynapse>,
    initializer: Option<Arc<dyn Initializer>>,
}

impl BackpropagationConnector {
    /// Creates a connector from `source` to `target`.
    ///
    /// # Parameters
    ///
    /// - `source` - The layer the synapses start from
    /// - `target` - The layer the synapses end in; its fan-in grows by the number of
    ///   synapses each of its neurons receives
    /// - `mode` - How source and target neurons are linked
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new connector with zero weights
    /// - `Err(ModelError::InputValidationError)` - If `mode` is `OneToOne` and the layers
    ///   have a different number of neurons
    pub fn new(
        source: &ActivationLayer,
        target: &mut ActivationLayer,
        mode: ConnectionMode,
    ) -> Result<Self, ModelError> {
        let source_neuron_count = source.get_neuron_count();
        let target_neuron_count = target.get_neuron_count();

        let synapses: Vec<BackpropagationSynapse> = match mode {
            ConnectionMode::Complete => (0..source_neuron_count)
                .flat_map(|source_index| {
                    (0..target_neuron_count).map(move |target_index| BackpropagationSynapse {
                        source_index,
                        target_index,
                        weight: 0.0,
                    })
                })
                .collect(),
            ConnectionMode::OneToOne => {
                if source_neuron_count != target_neuron_count {
                    return Err(ModelError::InputValidationError(format!(
                        "One-to-one connection requires layers of equal size, got {} and {}",
                        source_neuron_count, target_neuron_count
                    )));
                }
                (0..source_neuron_count)
                    .map(|index| BackpropagationSynapse {
                        source_index: index,
                        target_index: index,
                        weight: 0.0,
                    })
                    .collect()
            }
        };

        let fan_in = match mode {
            ConnectionMode::Complete => source_neuron_count,
            ConnectionMode::OneToOne => 1,
        };
        target.add_fan_in(fan_in);

        Ok(Self {
            source_neuron_count,
            target_neuron_count,
            mode,
            synapses,
            initializer: None,
        })
    }

    get_field!(get_source_neuron_count, source_neuron_count, usize);

    get_field!(get_target_neuron_count, target_neuron_count, usize);

    get_field!(get_mode, mode, ConnectionMode);

    /// Returns the number of synapses in the connector
    pub fn get_synapse_count(&self) -> usize {
        self.synapses.len()
    }

    /// Returns the synapses of the connector
    pub fn synapses(&self) -> &[BackpropagationSynapse] {
        &self.synapses
    }

    /// Returns a mutable iterator over the synapses of the connector.
    ///
    /// The iterator only allows mutating existing synapses; it cannot add or remove any.
    pub fn synapses_mut(&mut self) -> std::slice::IterMut<'_, BackpropagationSynapse> {
        self.synapses.iter_mut()
    }

    /// Returns the weights as a matrix with shape (target_neuron_count, source_neuron_count).
    ///
    /// Entries without a synapse (off-diagonal entries of a one-to-one connector) are `0.0`.
    pub fn weights(&self) -> Array2<f64> {
        let mut weights = Array2::zeros((self.target_neuron_count, self.source_neuron_count));
        for synapse in &self.synapses {
            weights[[synapse.target_index, synapse.source_index]] = synapse.weight;
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
                "BackpropagationConnector has no initializer, call set_initializer first",
            ))
        })?;
        initializer.initialize_backpropagation_connector(Some(self))
    }
}
