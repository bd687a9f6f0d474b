pub mod error;
pub mod handlers;
pub mod routes;
pub mod views;

#[cfg(test)]
mod test_support;

pub use error::*;
pub use handlers::*;
pub use routes::*;
pub use views::*;
