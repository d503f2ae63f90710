//! Subscriber set-up for the binary.
//!
//! Levels come from `RUST_LOG` (`RUST_LOG=debug` also prints request payloads). Lines are
//! compact, spans inline (`insert:address_for: Address not stored, resolving postal code`),
//! and module paths are hidden since actor logs carry `entity_type` instead.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
