//! # System Lifecycle
//!
//! Starting, wiring and stopping the two store actors.
//!
//! ## Wiring
//!
//! Actors are built without dependencies; dependencies are injected when each one is
//! started with `run(context)`:
//!
//! - the Address actor needs nothing (`Context = ()`)
//! - the Customer actor gets an [`AddressDirectory`](crate::customer_actor::AddressDirectory),
//!   i.e. a clone of the address client plus the shared postal resolver
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Customer actor exits** - its receiver returns `None`, dropping its address client
//! 3. **Address actor exits** - its last sender is gone
//! 4. **Await completion** - every actor task is joined; a panicked task is reported
//!
//! The dependency graph is acyclic (customers depend on addresses, never the reverse),
//! so channel closure alone is enough to stop everything.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber once, from the binary. Actors log
//! start/shutdown and each request with `entity_type`, `id` and store `size`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod customer_system;
pub mod telemetry;

pub use customer_system::*;
pub use telemetry::*;
