use crate::clients::CatalogClient;
use crate::clock::{SharedClock, SystemClock};
use crate::config::CatalogConfig;
use crate::model::Resource;
use crate::resource_actor::ResourceError;
use crate::seed::SeedResource;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the running resource actor and hands out its client.
///
/// The clock passed to [`CatalogSystem::start`] becomes the actor's context, so tests
/// can drive timestamps with a [`ManualClock`](crate::clock::ManualClock).
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::start(&CatalogConfig::default(), Arc::new(SystemClock));
/// system.seed(seed::default_resources()).await?;
///
/// let featured = system.catalog.featured_resources(Some(3)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for the resource actor
    pub catalog: CatalogClient,

    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the resource actor with `clock` injected as its context.
    pub fn start(config: &CatalogConfig, clock: SharedClock) -> Self {
        let (actor, catalog) = crate::resource_actor::new(config.channel_capacity);
        let handle = tokio::spawn(actor.run(clock));

        info!(channel_capacity = config.channel_capacity, "Catalog started");
        Self { catalog, handle }
    }

    /// Default config and the system clock.
    pub fn new() -> Self {
        Self::start(&CatalogConfig::default(), Arc::new(SystemClock))
    }

    /// Creates each entry in order, then lifts its counters to the seeded values.
    ///
    /// Returns the stored resources in creation order.
    pub async fn seed(&self, entries: Vec<SeedResource>) -> Result<Vec<Resource>, ResourceError> {
        let mut stored = Vec::with_capacity(entries.len());
        for entry in entries {
            let engagement = entry.engagement();
            let mut resource = self
                .catalog
                .create_resource(entry.data, entry.author_id, entry.author_name)
                .await?;

            if let Some(patch) = engagement {
                let id = resource.id;
                resource = self
                    .catalog
                    .update_resource(id, patch)
                    .await?
                    .ok_or_else(|| ResourceError::NotFound(id.to_string()))?;
            }
            stored.push(resource);
        }

        info!(count = stored.len(), "Catalog seeded");
        Ok(stored)
    }

    /// Drops the client, which closes the actor's channel, and waits for the actor to finish.
    ///
    /// Clones of [`CatalogSystem::catalog`] held elsewhere keep the actor alive until
    /// they are dropped too.
    pub async fn shutdown(self) -> Result<(), ResourceError> {
        info!("Shutting down catalog...");

        drop(self.catalog);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(ResourceError::ActorCommunicationError(format!(
                "Actor task failed: {e:?}"
            )));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
