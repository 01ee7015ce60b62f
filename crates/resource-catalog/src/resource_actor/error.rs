//! Error types for the Resource actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// The catalog operations on [`CatalogClient`](crate::clients::CatalogClient) answer a
/// missing resource with `None` or `false`. Only the generic
/// [`ActorClient`](actor_framework::ActorClient) methods, which have no such slot, report
/// [`ResourceError::NotFound`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// An update tried to lower an engagement counter.
    #[error("{counter} cannot go down: stored {current}, requested {requested}")]
    CounterRegression {
        counter: &'static str,
        current: u64,
        requested: u64,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ResourceError {
    fn from(msg: String) -> Self {
        ResourceError::ActorCommunicationError(msg)
    }
}
