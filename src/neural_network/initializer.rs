/// Constant-value initialization strategy
pub mod constant_function;
/// Helper functions shared by the random strategies
mod helper_function;
/// Versioned key/value record holding a strategy's configuration
pub mod initializer_record;
/// Typed envelope that saves and restores any strategy as JSON
pub mod initializer_snapshot;
/// Input validation functions shared by the strategies
mod input_validation_function;
/// Nguyen-Widrow initialization strategy
pub mod nguyen_widrow_function;
/// Gaussian initialization strategy
pub mod normal_function;
/// Uniform random initialization strategy
pub mod random_function;
/// Zero-value initialization strategy
pub mod zero_function;

pub use constant_function::*;
pub use initializer_record::*;
pub use initializer_snapshot::*;
pub use nguyen_widrow_function::*;
pub use normal_function::*;
pub use random_function::*;
pub use zero_function::*;
