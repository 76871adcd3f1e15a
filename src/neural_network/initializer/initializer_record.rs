use crate::ModelError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Schema version written into every new `InitializerRecord`.
///
/// Records carrying a version in `1..=RECORD_SCHEMA_VERSION` can be read back.
pub const RECORD_SCHEMA_VERSION: u32 = 1;

/// Execution context handed to `RestoreInitializer::read_record`.
///
/// No strategy reads anything from it yet; it exists so restore signatures stay stable
/// if a strategy ever needs to know where its record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordContext;

/// A primitive value stored in an `InitializerRecord`.
///
/// # Variants
///
/// - `Float` - Double-precision floating-point number, non-finite values included
/// - `Integer` - Signed integer
/// - `Unsigned` - Unsigned integer (e.g. random seeds)
/// - `Boolean` - Boolean flag
/// - `Text` - UTF-8 string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordValue {
    Float(#[serde(with = "float_repr")] f64),
    Integer(i64),
    Unsigned(u64),
    Boolean(bool),
    Text(String),
}

impl RecordValue {
    /// Returns the name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            RecordValue::Float(_) => "Float",
            RecordValue::Integer(_) => "Integer",
            RecordValue::Unsigned(_) => "Unsigned",
            RecordValue::Boolean(_) => "Boolean",
            RecordValue::Text(_) => "Text",
        }
    }

    /// Returns the value as `f64` if it is numeric.
    ///
    /// Integers are converted; booleans and text are not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RecordValue::Float(value) => Some(*value),
            RecordValue::Integer(value) => Some(*value as f64),
            RecordValue::Unsigned(value) => Some(*value as f64),
            RecordValue::Boolean(_) | RecordValue::Text(_) => None,
        }
    }

    /// Returns the value as `u64` if it is a non-negative integer
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            RecordValue::Unsigned(value) => Some(*value),
            RecordValue::Integer(value) => u64::try_from(*value).ok(),
            _ => None,
        }
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        RecordValue::Float(value)
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        RecordValue::Integer(value)
    }
}

impl From<u64> for RecordValue {
    fn from(value: u64) -> Self {
        RecordValue::Unsigned(value)
    }
}

impl From<bool> for RecordValue {
    fn from(value: bool) -> Self {
        RecordValue::Boolean(value)
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::Text(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::Text(value.to_string())
    }
}

/// Flat key/value record holding the configuration of an initialization strategy.
///
/// The record is independent of any serialization mechanism: strategies write their
/// parameters under stable keys with `add_value` and read them back with the typed
/// getters. The record itself derives `serde` traits, so it can be carried by any serde
/// format; `InitializerSnapshot` uses JSON.
///
/// # Fields
///
/// - `version` - Schema version of the record
/// - `fields` - Stored values by key
///
/// # Example
/// ```rust
/// use rustyinit::neural_network::*;
///
/// let mut record = InitializerRecord::new();
/// record.add_value("constant", 3.14159);
///
/// assert_eq!(record.get_f64("constant").unwrap(), 3.14159);
/// assert!(record.get_f64("missing").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializerRecord {
    version: u32,
    fields: AHashMap<String, RecordValue>,
}

impl InitializerRecord {
    /// Creates an empty record with the current schema version
    pub fn new() -> Self {
        Self::with_version(RECORD_SCHEMA_VERSION)
    }

    /// Creates an empty record carrying an explicit schema version.
    ///
    /// # Parameters
    ///
    /// * `version` - Schema version of the record
    pub fn with_version(version: u32) -> Self {
        Self {
            version,
            fields: AHashMap::new(),
        }
    }

    get_field!(get_version, version, u32);

    /// Stores a value under `key`, replacing any previous value.
    ///
    /// # Parameters
    ///
    /// - `key` - The key to store the value under
    /// - `value` - The value to store
    pub fn add_value(&mut self, key: &str, value: impl Into<RecordValue>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Returns the value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.fields.get(key)
    }

    /// Removes and returns the value stored under `key`, if any
    pub fn remove(&mut self, key: &str) -> Option<RecordValue> {
        self.fields.remove(key)
    }

    /// Returns whether a value is stored under `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the number of stored values
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the record holds no values
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the stored key/value pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Checks that the record's schema version can be read.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the version is in `1..=RECORD_SCHEMA_VERSION`
    /// - `Err(ModelError::MalformedRecord)` - Otherwise
    pub fn check_version(&self) -> Result<(), ModelError> {
        if self.version == 0 || self.version > RECORD_SCHEMA_VERSION {
            return Err(ModelError::MalformedRecord(format!(
                "unsupported record version {}, expected 1 to {}",
                self.version, RECORD_SCHEMA_VERSION
            )));
        }
        Ok(())
    }

    /// Reads a numeric value as `f64`.
    ///
    /// # Parameters
    ///
    /// * `key` - The key to read
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The stored value; integer values are converted
    /// - `Err(ModelError::MalformedRecord)` - If the key is missing or the value is not numeric
    pub fn get_f64(&self, key: &str) -> Result<f64, ModelError> {
        let value = self.require(key)?;
        value.as_f64().ok_or_else(|| wrong_type(key, "a number", value))
    }

    /// Reads a non-negative integer value as `u64`.
    ///
    /// # Parameters
    ///
    /// * `key` - The key to read
    ///
    /// # Returns
    ///
    /// - `Ok(u64)` - The stored value
    /// - `Err(ModelError::MalformedRecord)` - If the key is missing or the value is not a
    ///   non-negative integer
    pub fn get_u64(&self, key: &str) -> Result<u64, ModelError> {
        let value = self.require(key)?;
        value
            .as_u64()
            .ok_or_else(|| wrong_type(key, "a non-negative integer", value))
    }

    /// Reads an optional non-negative integer value.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` - If the key is missing
    /// - `Ok(Some(u64))` - The stored value
    /// - `Err(ModelError::MalformedRecord)` - If the value is not a non-negative integer
    pub fn get_optional_u64(&self, key: &str) -> Result<Option<u64>, ModelError> {
        if self.contains_key(key) {
            self.get_u64(key).map(Some)
        } else {
            Ok(None)
        }
    }

    fn require(&self, key: &str) -> Result<&RecordValue, ModelError> {
        self.fields
            .get(key)
            .ok_or_else(|| ModelError::MalformedRecord(format!("missing key `{}`", key)))
    }
}

impl Default for InitializerRecord {
    fn default() -> Self {
        Self::new()
    }
}

fn wrong_type(key: &str, expected: &str, found: &RecordValue) -> ModelError {
    ModelError::MalformedRecord(format!(
        "value under `{}` must be {}, found {}",
        key,
        expected,
        found.type_name()
    ))
}

/// Serde representation of `f64` that keeps non-finite values.
///
/// Finite values are written as numbers; NaN and the infinities are written as the
/// strings "NaN", "inf" and "-inf", since JSON numbers cannot hold them.
mod float_repr {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FloatRepr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match FloatRepr::deserialize(deserializer)? {
            FloatRepr::Number(value) => Ok(value),
            FloatRepr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!(
                    "invalid floating-point value `{}`",
                    other
                ))),
            },
        }
    }
}
