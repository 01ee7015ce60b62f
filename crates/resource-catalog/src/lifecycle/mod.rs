//! # System Lifecycle
//!
//! Starting, seeding and stopping the catalog.
//!
//! The actor is built without dependencies and receives its [`SharedClock`](crate::clock::SharedClock)
//! when it starts running:
//!
//! ```rust,ignore
//! let (actor, catalog) = resource_actor::new(config.channel_capacity);
//! let handle = tokio::spawn(actor.run(clock));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs its final state** - `Shutdown` with the store size
//! 4. **Await completion** - [`CatalogSystem::shutdown`] joins the task
//!
//! Logging is set up separately with
//! [`actor_framework::tracing::setup_tracing`].

pub mod catalog_system;

pub use catalog_system::*;
