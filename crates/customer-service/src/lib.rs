//! # Customer Registry
//!
//! Customers and the addresses they live at, kept in two actor-owned stores. Saving a
//! customer first settles its address: the address store is consulted by postal code,
//! and only on a miss is the postal resolver (ViaCEP) asked, its answer stored once and
//! shared by every later customer with the same code.
//!
//! - [`model`] - [`Customer`](model::Customer), [`Address`](model::Address), [`PostalCode`](model::PostalCode)
//! - [`customer_actor`] / [`address_actor`] - the two stores
//! - [`clients`] - typed clients over the stores
//! - [`resolver`] - the postal resolver seam and its ViaCEP implementation
//! - [`configuration`] / [`lifecycle`] - settings, wiring, shutdown and tracing

pub mod address_actor;
pub mod clients;
pub mod configuration;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod resolver;
