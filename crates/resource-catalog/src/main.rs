//! Catalog demo: seeds the store, then walks through browsing, engagement and editing.
//!
//! ```bash
//! RUST_LOG=info cargo run -p resource-catalog
//! CATALOG_SEED_PATH=seed.json RUST_LOG=debug cargo run -p resource-catalog
//! ```

use actor_framework::tracing::setup_tracing;
use actor_framework::ActorClient;
use resource_catalog::clock::SystemClock;
use resource_catalog::config::CatalogConfig;
use resource_catalog::lifecycle::CatalogSystem;
use resource_catalog::model::{
    Category, Level, NewResource, ResourceFilter, ResourceType, ResourceUpdate,
};
use resource_catalog::seed::{default_resources, load_seed_file};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CatalogConfig::from_env()?;
    info!(?config, "Starting catalog demo");

    let entries = match &config.seed_path {
        Some(path) => load_seed_file(path)?,
        None => default_resources(),
    };

    let system = CatalogSystem::start(&config, Arc::new(SystemClock));
    let catalog = system.catalog.clone();

    let stored = system
        .seed(entries)
        .instrument(tracing::info_span!("seeding"))
        .await?;

    let all = catalog.list_resources(ResourceFilter::default()).await?;
    info!(count = all.len(), "All resources");

    let featured = catalog.featured_resources(Some(3)).await?;
    for resource in &featured {
        info!(id = %resource.id, title = %resource.title, "Featured");
    }

    let beginner_matches = catalog
        .list_resources(ResourceFilter {
            level: Some(Level::Beginner),
            ..ResourceFilter::default().with_search("FORM")
        })
        .await?;
    info!(count = beginner_matches.len(), "Beginner resources mentioning \"form\"");

    let span = tracing::info_span!("engagement");
    async {
        let Some(first) = stored.first() else {
            warn!("Nothing seeded");
            return Ok::<_, Box<dyn std::error::Error>>(());
        };
        if let Some(viewed) = catalog.view_resource(first.id).await? {
            info!(id = %viewed.id, views = viewed.views, "Viewed");
        }
        for _ in 0..2 {
            catalog.like_resource(first.id).await?;
        }
        if let Some(liked) = catalog.get(first.id).await? {
            info!(id = %liked.id, likes = liked.likes, "Liked");
        }
        Ok(())
    }
    .instrument(span)
    .await?;

    let draft = catalog
        .create_resource(
            NewResource {
                title: "Interviewing users".to_string(),
                description: "Questions that do not lead the witness".to_string(),
                content: "Ask about the last time, not the usual time.".to_string(),
                category: Category::Design,
                resource_type: ResourceType::Podcast,
                level: Level::Intermediate,
                tags: ["research".to_string(), "ux".to_string()].into(),
                language: "en".to_string(),
                published: None,
                featured: None,
            },
            "u-lin",
            "Lin Park",
        )
        .await?;
    info!(id = %draft.id, published = draft.published, "Draft created");

    let publish = ResourceUpdate {
        published: Some(true),
        ..ResourceUpdate::default()
    };
    if let Some(published) = catalog.update_resource(draft.id, publish).await? {
        info!(id = %published.id, published = published.published, "Draft published");
    }

    let by_lin = catalog.resources_by_author("u-lin").await?;
    info!(count = by_lin.len(), "Resources by u-lin");

    let removed = catalog.delete_resource(draft.id).await?;
    let removed_again = catalog.delete_resource(draft.id).await?;
    info!(removed, removed_again, "Deleted draft");

    drop(catalog);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
