//! # Store Errors
//!
//! This module defines the common error types used throughout the resource store.
//! Entity-specific failures travel inside [`FrameworkError::EntityError`] and can be
//! recovered by the client with `downcast`.

/// Errors that can occur within the resource store itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor has no id generator, create is unavailable")]
    MissingIdGenerator,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
