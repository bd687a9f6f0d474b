// Domain services

pub mod deck;
pub mod pipeline;

pub use deck::*;
pub use pipeline::*;
