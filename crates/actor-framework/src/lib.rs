//! # Actor Framework
//!
//! Building blocks for type-safe actors that own a collection of stateful entities.
//! It implements a **Resource-Oriented Architecture (ROA)** pattern on top of the
//! **Actor Model**: every resource type gets one actor exposing the same CRUD + List +
//! Action surface, and that actor is the only code that ever touches the collection.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and sequential state access
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::cmp::Ordering;
//!
//! #[derive(Clone, Debug)]
//! struct Bookmark {
//!     id: u32,
//!     url: String,
//!     clicks: u64,
//! }
//!
//! #[derive(Debug)] struct BookmarkCreate { url: String }
//! #[derive(Debug)] struct BookmarkUpdate { url: Option<String> }
//! #[derive(Debug)] struct BookmarkFilter { min_clicks: u64 }
//! #[derive(Debug)] enum BookmarkAction { Click }
//! #[derive(Debug, thiserror::Error)] #[error("bookmark error")] struct BookmarkError;
//!
//! #[async_trait]
//! impl ActorEntity for Bookmark {
//!     type Id = u32;
//!     type Create = BookmarkCreate;
//!     type Update = BookmarkUpdate;
//!     type Filter = BookmarkFilter;
//!     type Action = BookmarkAction;
//!     type ActionResult = u64;
//!     type Context = ();
//!     type Error = BookmarkError;
//!
//!     fn from_create_params(id: u32, params: BookmarkCreate, _: &()) -> Result<Self, Self::Error> {
//!         Ok(Self { id, url: params.url, clicks: 0 })
//!     }
//!
//!     async fn on_update(&mut self, update: BookmarkUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(url) = update.url { self.url = url; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: BookmarkAction, _: &()) -> Result<u64, Self::Error> {
//!         match action {
//!             BookmarkAction::Click => { self.clicks += 1; Ok(self.clicks) }
//!         }
//!     }
//!
//!     fn matches(&self, filter: &BookmarkFilter) -> bool {
//!         self.clicks >= filter.min_clicks
//!     }
//!
//!     fn list_order(&self, other: &Self) -> Ordering {
//!         other.clicks.cmp(&self.clicks)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Bookmark>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let a = client.create(BookmarkCreate { url: "https://a.example".into() }).await.unwrap();
//!     client.create(BookmarkCreate { url: "https://b.example".into() }).await.unwrap();
//!     client.perform_action(a.id, BookmarkAction::Click).await.unwrap();
//!
//!     let popular = client.list(BookmarkFilter { min_clicks: 1 }).await.unwrap();
//!     assert_eq!(popular.len(), 1);
//!     assert_eq!(popular[0].url, "https://a.example");
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! Entities receive the context in every hook, which is how a domain crate hands in a
//! clock, a config, or other clients without global state.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`], which answers a real
//! `ResourceClient<T>` from scripted expectations, plus low-level receiver helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
