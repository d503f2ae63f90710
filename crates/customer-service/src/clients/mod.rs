//! Domain clients wrapping the generic `ResourceClient`s with typed errors.

pub mod address_client;
pub mod customer_client;

pub use address_client::*;
pub use customer_client::*;
