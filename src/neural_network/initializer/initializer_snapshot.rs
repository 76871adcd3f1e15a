use super::{
    ConstantFunction, InitializerRecord, NguyenWidrowFunction, NormalFunction, RandomFunction,
    RecordContext, ZeroFunction,
};
use crate::ModelError;
use crate::error::IoError;
use crate::traits::{Initializer, RestoreInitializer};
use serde::{Deserialize, Serialize};
use serde_json::{from_reader, from_str, to_string_pretty, to_writer_pretty};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::sync::Arc;

/// Saved form of an initializer whose concrete type is not known statically.
///
/// A snapshot pairs the strategy's type tag (see `Initializer::initializer_type`) with
/// the record it wrote, so a network's initializers can be saved and restored without
/// re-deriving their parameters.
///
/// # Fields
///
/// - `initializer_type` - Type tag of the strategy, e.g. "Constant"
/// - `record` - The configuration written by the strategy
///
/// # Example
/// ```rust
/// use rustyinit::neural_network::*;
///
/// let snapshot = InitializerSnapshot::capture(&ConstantFunction::new(3.14159)).unwrap();
/// let json = snapshot.to_json_string().unwrap();
///
/// let restored = InitializerSnapshot::from_json_str(&json).unwrap().restore().unwrap();
/// assert_eq!(restored.initializer_type(), "Constant");
///
/// let mut layer = ActivationLayer::new(2);
/// restored.initialize_layer(Some(&mut layer)).unwrap();
/// assert_eq!(layer.biases().to_vec(), vec![3.14159, 3.14159]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializerSnapshot {
    pub initializer_type: String,
    pub record: InitializerRecord,
}

impl InitializerSnapshot {
    /// Captures the type tag and configuration of an initializer.
    ///
    /// # Parameters
    ///
    /// * `initializer` - The initializer to capture
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - The snapshot
    /// - `Err(ModelError)` - If the initializer fails to write its record
    pub fn capture(initializer: &dyn Initializer) -> Result<Self, ModelError> {
        let mut record = InitializerRecord::new();
        initializer.write_record(Some(&mut record))?;
        Ok(Self {
            initializer_type: initializer.initializer_type().to_string(),
            record,
        })
    }

    /// Rebuilds the initializer described by the snapshot.
    ///
    /// # Returns
    ///
    /// - `Ok(Arc<dyn Initializer>)` - The restored initializer, ready to be shared
    /// - `Err(ModelError::MalformedRecord)` - If the type tag is unknown or the record
    ///   cannot be read by that strategy
    pub fn restore(&self) -> Result<Arc<dyn Initializer>, ModelError> {
        let record = Some(&self.record);
        let context = RecordContext;
        let initializer: Arc<dyn Initializer> = match self.initializer_type.as_str() {
            "Constant" => Arc::new(ConstantFunction::read_record(record, &context)?),
            "Zero" => Arc::new(ZeroFunction::read_record(record, &context)?),
            "Random" => Arc::new(RandomFunction::read_record(record, &context)?),
            "Normal" => Arc::new(NormalFunction::read_record(record, &context)?),
            "NguyenWidrow" => Arc::new(NguyenWidrowFunction::read_record(record, &context)?),
            other => {
                return Err(ModelError::MalformedRecord(format!(
                    "unknown initializer type `{}`",
                    other
                )));
            }
        };
        Ok(initializer)
    }

    /// Serializes the snapshot to a pretty-printed JSON string
    pub fn to_json_string(&self) -> Result<String, IoError> {
        to_string_pretty(self).map_err(IoError::JsonError)
    }

    /// Parses a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, IoError> {
        from_str(json).map_err(IoError::JsonError)
    }

    /// Saves the snapshot to a JSON file, creating or overwriting it.
    ///
    /// # Parameters
    ///
    /// * `path` - Path of the file to write
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The snapshot was written and flushed
    /// - `Err(IoError)` - If the file cannot be written or serialization fails
    pub fn save_to_path(&self, path: &str) -> Result<(), IoError> {
        let file = File::create(path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);

        to_writer_pretty(&mut writer, self).map_err(IoError::JsonError)?;

        // Ensure all data is written to disk
        writer.flush().map_err(IoError::StdIoError)?;

        Ok(())
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Parameters
    ///
    /// * `path` - Path of the file to read
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - The loaded snapshot
    /// - `Err(IoError)` - If the file cannot be read or does not hold a valid snapshot
    pub fn load_from_path(path: &str) -> Result<Self, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        from_reader(BufReader::new(file)).map_err(IoError::JsonError)
    }
}
