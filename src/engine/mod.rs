/// Scalar energy metrics derived from the resolved inputs.
pub mod metrics;
pub mod projection;
pub mod types;
