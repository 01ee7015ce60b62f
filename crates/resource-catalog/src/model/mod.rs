//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod filter;
pub mod resource;
pub mod update;

pub use filter::*;
pub use resource::*;
pub use update::*;
