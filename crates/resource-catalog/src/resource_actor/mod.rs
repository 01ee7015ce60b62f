//! # Resource Actor
//!
//! The catalog's single actor: it owns every [`Resource`] and serializes all reads and
//! writes against them.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Resource`]
//! - [`error`] - [`ResourceError`]
//! - [`actions`] - [`ResourceAction`] for the view and like counters
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use resource_catalog::clock::{SharedClock, SystemClock};
//! use resource_catalog::model::{Category, Level, NewResource, ResourceType};
//! use resource_catalog::resource_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = resource_actor::new(32);
//!     let clock: SharedClock = Arc::new(SystemClock);
//!     tokio::spawn(actor.run(clock));
//!
//!     let data = NewResource {
//!         title: "Writing a grant proposal".to_string(),
//!         description: "Step by step".to_string(),
//!         content: "...".to_string(),
//!         category: Category::Community,
//!         resource_type: ResourceType::Guide,
//!         level: Level::Beginner,
//!         tags: Default::default(),
//!         language: "en".to_string(),
//!         published: Some(true),
//!         featured: None,
//!     };
//!     let created = client.create_resource(data, "u-1", "Rosa").await?;
//!
//!     let viewed = client.view_resource(created.id).await?.expect("just created");
//!     assert_eq!(viewed.views, 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::model::Resource;
use actor_framework::ResourceActor;

/// Creates a new Resource actor and its client.
///
/// Run the actor with a [`SharedClock`](crate::clock::SharedClock) as context.
pub fn new(buffer_size: usize) -> (ResourceActor<Resource>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CatalogClient::new(generic_client))
}
