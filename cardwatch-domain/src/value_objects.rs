// Domain value objects
pub mod fraud_class;

pub use fraud_class::*;
