use crate::ModelError;
use crate::neural_network::connector::{BackpropagationConnector, KohonenConnector};
use crate::neural_network::initializer::{InitializerRecord, RecordContext};
use crate::neural_network::layer::ActivationLayer;

/// Defines the interface for parameter initialization strategies.
///
/// A strategy assigns initial values to the biases of an activation layer and to the
/// weights of backpropagation and Kohonen connectors. The three targets are unrelated
/// types, so the trait carries one method per target shape.
///
/// Every initialize method rejects an absent target with `ModelError::InvalidArgument`
/// before touching any element, visits every element exactly once, and overwrites the
/// previous value of the parameter. Elements are not added or removed.
///
/// Strategies hold no mutable state, so one instance may be shared (e.g. through an
/// `Arc`) and used concurrently against different targets. Initializing the same target
/// from several threads requires the caller to serialize access to that target.
pub trait Initializer: std::fmt::Debug + Send + Sync {
    /// Initializes the bias of every neuron in an activation layer.
    ///
    /// # Parameters
    ///
    /// * `layer` - The activation layer to initialize
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Every neuron's bias now holds a value produced by the strategy
    /// - `Err(ModelError::InvalidArgument)` - If `layer` is `None`
    fn initialize_layer(&self, layer: Option<&mut ActivationLayer>) -> Result<(), ModelError>;

    /// Initializes the weight of every synapse in a backpropagation connector.
    ///
    /// # Parameters
    ///
    /// * `connector` - The backpropagation connector to initialize
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Every synapse's weight now holds a value produced by the strategy
    /// - `Err(ModelError::InvalidArgument)` - If `connector` is `None`
    fn initialize_backpropagation_connector(
        &self,
        connector: Option<&mut BackpropagationConnector>,
    ) -> Result<(), ModelError>;

    /// Initializes the weight of every synapse in a Kohonen connector.
    ///
    /// # Parameters
    ///
    /// * `connector` - The Kohonen connector to initialize
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Every synapse's weight now holds a value produced by the strategy
    /// - `Err(ModelError::InvalidArgument)` - If `connector` is `None`
    fn initialize_kohonen_connector(
        &self,
        connector: Option<&mut KohonenConnector>,
    ) -> Result<(), ModelError>;

    /// Returns the stable type tag of the strategy (e.g. "Constant").
    ///
    /// The tag is stored next to the record in an `InitializerSnapshot` and selects the
    /// strategy to rebuild on restore.
    fn initializer_type(&self) -> &str;

    /// Writes the configuration of the strategy into a record.
    ///
    /// # Parameters
    ///
    /// * `record` - The record to fill
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The configuration was written under the strategy's stable keys
    /// - `Err(ModelError::InvalidArgument)` - If `record` is `None`
    fn write_record(&self, record: Option<&mut InitializerRecord>) -> Result<(), ModelError>;
}

/// Defines how a strategy is reconstructed from a persisted record.
pub trait RestoreInitializer: Sized {
    /// Reads the configuration of the strategy from a record.
    ///
    /// # Parameters
    ///
    /// - `record` - The record to read from
    /// - `context` - Execution context of the restore, currently unused
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - The restored strategy
    /// - `Err(ModelError::InvalidArgument)` - If `record` is `None`
    /// - `Err(ModelError::MalformedRecord)` - If an expected key is missing, holds a value
    ///   of the wrong type, or the record version is not supported
    fn read_record(
        record: Option<&InitializerRecord>,
        context: &RecordContext,
    ) -> Result<Self, ModelError>;
}
