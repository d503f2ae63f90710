//! Pure data structures (DTOs) stored by the resource actors.

pub mod address;
pub mod customer;
pub mod postal_code;

pub use address::*;
pub use customer::*;
pub use postal_code::*;
