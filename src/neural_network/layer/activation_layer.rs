use crate::ModelError;
use crate::traits::Initializer;
use ndarray::Array1;
use std::sync::Arc;

/// A neuron of an activation layer.
///
/// The only trainable parameter of an activation neuron is its bias, the additive term
/// applied before the activation function. A freshly created neuron has a bias of `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationNeuron {
    bias: f64,
}

impl ActivationNeuron {
    /// Creates a neuron with a zero bias.
    pub fn new() -> Self {
        Self { bias: 0.0 }
    }

    get_field!(get_bias, bias, f64);

    /// Sets the bias of the neuron.
    ///
    /// # Parameters
    ///
    /// * `bias` - The new bias value
    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }
}

impl Default for ActivationNeuron {
    fn default() -> Self {
        Self::new()
    }
}

/// Activation layer: a fixed collection of neurons, each carrying a bias.
///
/// The number of neurons is fixed at construction. Neurons can be visited and mutated
/// through `neurons_mut`, but the collection itself cannot be resized.
///
/// # Fields
///
/// - `neurons` - The neurons of the layer
/// - `fan_in` - Number of incoming synapses per neuron, accumulated by the connectors
///   that target this layer
/// - `initializer` - Strategy used by `initialize`, if any
///
/// # Example
/// ```rust
/// use rustyinit::neural_network::*;
/// use std::sync::Arc;
///
/// let mut layer = ActivationLayer::new(4);
/// layer.set_initializer(Arc::new(ConstantFunction::new(0.1)));
/// layer.initialize().unwrap();
///
/// assert_eq!(layer.biases().to_vec(), vec![0.1; 4]);
/// ```
#[derive(Debug, Clone)]
pub struct ActivationLayer {
    neurons: Vec<ActivationNeuron>,
    fan_in: usize,
    initializer: Option<Arc<dyn Initializer>>,
}

impl ActivationLayer {
    /// Creates an activation layer with `neuron_count` zero-bias neurons.
    ///
    /// A layer without neurons is allowed; initializing it is a no-op.
    ///
    /// # Parameters
    ///
    /// * `neuron_count` - Number of neurons in the layer
    ///
    /// # Returns
    ///
    /// * `Self` - A new ActivationLayer with no incoming connections and no initializer
    pub fn new(neuron_count: usize) -> Self {
        Self {
            neurons: vec![ActivationNeuron::new(); neuron_count],
            fan_in: 0,
            initializer: None,
        }
    }

    /// Returns the number of neurons in the layer
    pub fn get_neuron_count(&self) -> usize {
        self.neurons.len()
    }

    get_field!(get_fan_in, fan_in, usize);

    /// Returns the neurons of the layer
    pub fn neurons(&self) -> &[ActivationNeuron] {
        &self.neurons
    }

    /// Returns a mutable iterator over the neurons of the layer.
    ///
    /// The iterator only allows mutating existing neurons; it cannot add or remove any.
    pub fn neurons_mut(&mut self) -> std::slice::IterMut<'_, ActivationNeuron> {
        self.neurons.iter_mut()
    }

    /// Returns the biases of all neurons in index order
    pub fn biases(&self) -> Array1<f64> {
        self.neurons.iter().map(|neuron| neuron.bias).collect()
    }

    /// Registers `count` additional incoming synapses per neuron.
    pub(crate) fn add_fan_in(&mut self, count: usize) {
        self.fan_in += count;
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

    /// Initializes the biases of the layer with its own strategy.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The biases were initialized
    /// - `Err(ModelError::ProcessingError)` - If no initializer has been set
    pub fn initialize(&mut self) -> Result<(), ModelError> {
        let initializer = self.initializer.clone().ok_or_else(|| {
            ModelError::ProcessingError(String::from(
                "ActivationLayer has no initializer, call set_initializer first",
            ))
        })?;
        initializer.initialize_layer(Some(self))
    }
}
