// Domain entities

pub mod config;
pub mod dashboard;
pub mod transaction;

pub use config::*;
pub use dashboard::*;
pub use transaction::*;
