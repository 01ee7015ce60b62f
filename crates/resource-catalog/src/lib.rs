//! # Resource Catalog
//!
//! An in-memory catalog of learning resources (articles, courses, videos, podcasts and
//! guides) built on [`actor_framework`].
//!
//! ## Core Components
//!
//! - **[model]**: [`Resource`](model::Resource), its patch type and the list filter.
//! - **[resource_actor]**: The [`ActorEntity`](actor_framework::ActorEntity) implementation that owns the store.
//! - **[clients]**: [`CatalogClient`](clients::CatalogClient), the only way in.
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem) starts, seeds and stops the actor.
//! - **[config]** and **[seed]**: Environment settings and starter content.
//! - **[clock]**: Injected time source for `created_at` / `updated_at`.
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for testing clients without spawning the actor, and
//! [`clock::ManualClock`] for deterministic timestamps against a real one.

pub mod clients;
pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod resource_actor;
pub mod seed;
