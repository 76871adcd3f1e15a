use crate::ModelError;

/// Unwraps a required argument.
///
/// # Parameters
///
/// - `argument` - The argument supplied by the caller
/// - `name` - The name of the argument (for error messages)
///
/// # Returns
///
/// - `Ok(T)` - The argument if it is present
/// - `Err(ModelError::InvalidArgument)` - If the argument is `None`
pub(super) fn validate_present<T>(argument: Option<T>, name: &str) -> Result<T, ModelError> {
    argument.ok_or_else(|| ModelError::InvalidArgument(name.to_string()))
}

/// Validates that a value is finite.
///
/// # Parameters
///
/// - `value` - The value to validate
/// - `param_name` - The name of the parameter (for error messages)
///
/// # Returns
///
/// - `Ok(())` if the value is finite
/// - `Err(ModelError::InputValidationError)` if the value is NaN or infinite
pub(super) fn validate_finite(value: f64, param_name: &str) -> Result<(), ModelError> {
    if !value.is_finite() {
        return Err(ModelError::InputValidationError(format!(
            "{} must be finite, got {}",
            param_name, value
        )));
    }
    Ok(())
}

/// Validates that `min` and `max` describe a non-empty closed range.
///
/// # Returns
///
/// - `Ok(())` if both bounds are finite, `min <= max` and `max - min` is finite
/// - `Err(ModelError::InputValidationError)` otherwise
pub(super) fn validate_range(min: f64, max: f64) -> Result<(), ModelError> {
    validate_finite(min, "min")?;
    validate_finite(max, "max")?;
    if min > max {
        return Err(ModelError::InputValidationError(format!(
            "min must not be greater than max, got min = {} and max = {}",
            min, max
        )));
    }
    if !(max - min).is_finite() {
        return Err(ModelError::InputValidationError(format!(
            "range width max - min must be finite, got min = {} and max = {}",
            min, max
        )));
    }
    Ok(())
}

/// Validates that a standard deviation is finite and non-negative.
///
/// # Returns
///
/// - `Ok(())` if `std_dev` is finite and `>= 0`
/// - `Err(ModelError::InputValidationError)` otherwise
pub(super) fn validate_std_dev(std_dev: f64) -> Result<(), ModelError> {
    validate_finite(std_dev, "std_dev")?;
    if std_dev < 0.0 {
        return Err(ModelError::InputValidationError(format!(
            "std_dev must be non-negative, got {}",
            std_dev
        )));
    }
    Ok(())
}

/// Converts a configuration error found while restoring into a record error.
///
/// A record that restores into an invalid configuration is corrupted persisted state,
/// not a caller mistake.
pub(super) fn into_malformed_record(error: ModelError) -> ModelError {
    match error {
        ModelError::InputValidationError(msg) => ModelError::MalformedRecord(msg),
        other => other,
    }
}
