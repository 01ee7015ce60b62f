use actor_framework::ActorClient;
use chrono::{DateTime, Duration, TimeZone, Utc};
use resource_catalog::clock::ManualClock;
use resource_catalog::config::CatalogConfig;
use resource_catalog::lifecycle::CatalogSystem;
use resource_catalog::model::{
    Category, Level, NewResource, Resource, ResourceFilter, ResourceId, ResourceType,
    ResourceUpdate,
};
use resource_catalog::resource_actor::ResourceError;
use resource_catalog::seed::{default_resources, load_seed_file};
use std::io::Write;
use std::sync::Arc;

fn start() -> (CatalogSystem, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
    let system = CatalogSystem::start(&CatalogConfig::default(), Arc::new(clock.clone()));
    (system, clock)
}

fn data(title: &str, category: Category, level: Level) -> NewResource {
    NewResource {
        title: title.to_string(),
        description: format!("About {title}"),
        content: "...".to_string(),
        category,
        resource_type: ResourceType::Article,
        level,
        tags: Default::default(),
        language: "en".to_string(),
        published: Some(true),
        featured: None,
    }
}

/// Creates a resource one minute after the previous one so creation order is unambiguous.
async fn create_at_next_minute(
    system: &CatalogSystem,
    clock: &ManualClock,
    data: NewResource,
    author_id: &str,
) -> Resource {
    clock.advance(Duration::minutes(1));
    system
        .catalog
        .create_resource(data, author_id, "Test Author")
        .await
        .expect("Failed to create resource")
}

fn ids(resources: &[Resource]) -> Vec<ResourceId> {
    resources.iter().map(|r| r.id).collect()
}

#[tokio::test]
async fn test_create_fills_generated_fields() {
    let (system, clock) = start();
    let created_at: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 1, 12, 1, 0).unwrap();

    let first = create_at_next_minute(
        &system,
        &clock,
        NewResource {
            published: None,
            ..data("Budgeting basics", Category::PersonalDevelopment, Level::Beginner)
        },
        "u-1",
    )
    .await;
    let second = create_at_next_minute(
        &system,
        &clock,
        data("Budgeting basics", Category::PersonalDevelopment, Level::Beginner),
        "u-1",
    )
    .await;

    assert_eq!(first.id, ResourceId(1));
    assert_eq!(first.id.to_string(), "resource_1");
    assert_ne!(first.id, second.id, "Same payload must still get a fresh id");
    assert_eq!(first.created_at, created_at);
    assert_eq!(first.updated_at, created_at);
    assert_eq!((first.views, first.likes), (0, 0));
    assert!(!first.published && !first.featured);
    assert_eq!(first.author_name, "Test Author");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_filters_and_orders_newest_first() {
    let (system, clock) = start();
    let rust = create_at_next_minute(
        &system,
        &clock,
        NewResource {
            tags: ["Systems".to_string()].into(),
            ..data("Rust in practice", Category::Technology, Level::Advanced)
        },
        "u-1",
    )
    .await;
    let pitch = create_at_next_minute(
        &system,
        &clock,
        data("Pitching to investors", Category::Business, Level::Intermediate),
        "u-2",
    )
    .await;
    let intro = create_at_next_minute(
        &system,
        &clock,
        data("Intro to systems thinking", Category::Technology, Level::Beginner),
        "u-2",
    )
    .await;

    let all = system
        .catalog
        .list_resources(ResourceFilter::default())
        .await
        .unwrap();
    assert_eq!(ids(&all), vec![intro.id, pitch.id, rust.id]);

    let technology = system
        .catalog
        .list_resources(ResourceFilter {
            category: Some(Category::Technology),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(ids(&technology), vec![intro.id, rust.id]);

    // "systems" hits a tag on one and the title on the other
    let search = system
        .catalog
        .list_resources(ResourceFilter::default().with_search("SYSTEMS"))
        .await
        .unwrap();
    assert_eq!(ids(&search), vec![intro.id, rust.id]);

    let anded = system
        .catalog
        .list_resources(ResourceFilter {
            level: Some(Level::Advanced),
            ..ResourceFilter::default().with_search("systems")
        })
        .await
        .unwrap();
    assert_eq!(ids(&anded), vec![rust.id]);

    let nothing = system
        .catalog
        .list_resources(ResourceFilter {
            category: Some(Category::Wellbeing),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(nothing.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_view_counts_and_get_does_not() {
    let (system, clock) = start();
    let created = create_at_next_minute(
        &system,
        &clock,
        data("Color theory", Category::Design, Level::Beginner),
        "u-1",
    )
    .await;

    let viewed = system
        .catalog
        .view_resource(created.id)
        .await
        .unwrap()
        .expect("Resource not found");
    assert_eq!(
        viewed,
        Resource {
            views: 1,
            ..created.clone()
        },
        "Returned copy includes this view and nothing else changed"
    );

    let viewed = system
        .catalog
        .view_resource(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(viewed.views, 2);

    let peeked = system.catalog.get(created.id).await.unwrap().unwrap();
    assert_eq!(peeked.views, 2);
    assert_eq!(peeked.updated_at, created.updated_at, "Views do not touch updated_at");

    assert_eq!(
        system.catalog.view_resource(ResourceId(99)).await.unwrap(),
        None
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_merges_patch() {
    let (system, clock) = start();
    let created = create_at_next_minute(
        &system,
        &clock,
        data("Email marketing 101", Category::Marketing, Level::Beginner),
        "u-1",
    )
    .await;

    clock.advance(Duration::hours(1));
    let patch = ResourceUpdate {
        likes: Some(5),
        ..Default::default()
    };
    let updated = system
        .catalog
        .update_resource(created.id, patch)
        .await
        .unwrap()
        .expect("Resource not found");

    assert_eq!(updated.likes, 5);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.views, created.views);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, created.created_at + Duration::hours(1));

    let missing = system
        .catalog
        .update_resource(ResourceId(42), ResourceUpdate::default())
        .await
        .unwrap();
    assert_eq!(missing, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_cannot_lower_counters() {
    let (system, clock) = start();
    let created = create_at_next_minute(
        &system,
        &clock,
        data("Negotiation", Category::Business, Level::Advanced),
        "u-1",
    )
    .await;
    for _ in 0..3 {
        system.catalog.like_resource(created.id).await.unwrap();
    }

    let patch = ResourceUpdate {
        title: Some("Renamed".to_string()),
        likes: Some(1),
        ..Default::default()
    };
    let result = system.catalog.update_resource(created.id, patch).await;
    assert_eq!(
        result,
        Err(ResourceError::CounterRegression {
            counter: "likes",
            current: 3,
            requested: 1,
        })
    );

    let unchanged = system.catalog.get(created.id).await.unwrap().unwrap();
    assert_eq!(unchanged.title, "Negotiation");
    assert_eq!(unchanged.likes, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_reports_whether_it_removed() {
    let (system, clock) = start();
    let kept = create_at_next_minute(
        &system,
        &clock,
        data("Breathing exercises", Category::Wellbeing, Level::Beginner),
        "u-1",
    )
    .await;
    let created = create_at_next_minute(
        &system,
        &clock,
        data("Sleep hygiene", Category::Wellbeing, Level::Beginner),
        "u-1",
    )
    .await;

    assert!(system.catalog.delete_resource(created.id).await.unwrap());
    assert_eq!(system.catalog.get(created.id).await.unwrap(), None);

    let after_delete = system
        .catalog
        .list_resources(ResourceFilter::default())
        .await
        .unwrap();
    assert_eq!(after_delete, vec![kept.clone()]);

    assert!(!system.catalog.delete_resource(created.id).await.unwrap());
    assert!(!system.catalog.delete_resource(ResourceId(500)).await.unwrap());
    let after_miss = system
        .catalog
        .list_resources(ResourceFilter::default())
        .await
        .unwrap();
    assert_eq!(after_miss, after_delete, "A delete that finds nothing changes nothing");

    // ids are never handed out again
    let next = create_at_next_minute(
        &system,
        &clock,
        data("Sleep hygiene", Category::Wellbeing, Level::Beginner),
        "u-1",
    )
    .await;
    assert_ne!(next.id, created.id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_generic_delete_reports_missing_as_not_found() {
    let (system, clock) = start();
    let created = create_at_next_minute(
        &system,
        &clock,
        data("Stretching at your desk", Category::Wellbeing, Level::Beginner),
        "u-1",
    )
    .await;

    system.catalog.delete(created.id).await.unwrap();
    assert_eq!(
        system.catalog.delete(created.id).await,
        Err(ResourceError::NotFound(created.id.to_string()))
    );
    assert_eq!(
        system.catalog.delete(ResourceId(9)).await,
        Err(ResourceError::NotFound("resource_9".to_string()))
    );
    assert!(!system.catalog.delete_resource(ResourceId(9)).await.unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_like_only_adds() {
    let (system, clock) = start();
    let created = create_at_next_minute(
        &system,
        &clock,
        data("Public speaking", Category::PersonalDevelopment, Level::Intermediate),
        "u-1",
    )
    .await;

    let mut last = None;
    for _ in 0..3 {
        last = system.catalog.like_resource(created.id).await.unwrap();
    }
    assert_eq!(last.map(|r| r.likes), Some(3));
    assert_eq!(
        system.catalog.like_resource(ResourceId(77)).await.unwrap(),
        None
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_featured_and_by_author() {
    let (system, clock) = start();
    let shelf = |featured: bool, published: bool, title: &str| NewResource {
        featured: Some(featured),
        published: Some(published),
        ..data(title, Category::Community, Level::Beginner)
    };

    let a = create_at_next_minute(&system, &clock, shelf(true, true, "A"), "u-1").await;
    let draft = create_at_next_minute(&system, &clock, shelf(true, false, "Draft"), "u-1").await;
    let b = create_at_next_minute(&system, &clock, shelf(true, true, "B"), "u-2").await;
    create_at_next_minute(&system, &clock, shelf(false, true, "Plain"), "u-2").await;

    assert!(draft.featured && !draft.published);

    let featured = system.catalog.featured_resources(None).await.unwrap();
    assert_eq!(ids(&featured), vec![b.id, a.id]);

    let top = system.catalog.featured_resources(Some(1)).await.unwrap();
    assert_eq!(ids(&top), vec![b.id]);

    let by_u1 = system.catalog.resources_by_author("u-1").await.unwrap();
    assert_eq!(ids(&by_u1), vec![draft.id, a.id], "Drafts included");
    assert!(system
        .catalog
        .resources_by_author("nobody")
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_views_are_all_counted() {
    let (system, clock) = start();
    let created = create_at_next_minute(
        &system,
        &clock,
        data("Popular", Category::Technology, Level::Beginner),
        "u-1",
    )
    .await;

    let id = created.id;
    let mut handles = Vec::new();
    for _ in 0..50 {
        let catalog = system.catalog.clone();
        handles.push(tokio::spawn(async move { catalog.view_resource(id).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let resource = system.catalog.get(created.id).await.unwrap().unwrap();
    assert_eq!(resource.views, 50);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seed_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "title": "Old favourite",
                "description": "Still useful",
                "content": "...",
                "category": "technology",
                "type": "course",
                "level": "beginner",
                "language": "en",
                "published": true,
                "featured": true,
                "author_id": "u-1",
                "author_name": "Sam",
                "views": 12,
                "likes": 3
            }}
        ]"#
    )
    .unwrap();

    let entries = load_seed_file(file.path()).unwrap();
    let (system, _clock) = start();
    let stored = system.seed(entries).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!((stored[0].views, stored[0].likes), (12, 3));

    let featured = system.catalog.featured_resources(None).await.unwrap();
    assert_eq!(ids(&featured), ids(&stored));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_default_seed_lists_everything() {
    let (system, _clock) = start();
    let stored = system.seed(default_resources()).await.unwrap();

    // Same timestamp for all, so ties fall back to the later id
    let all = system
        .catalog
        .list_resources(ResourceFilter::default())
        .await
        .unwrap();
    let mut expected = ids(&stored);
    expected.reverse();
    assert_eq!(ids(&all), expected);

    system.shutdown().await.unwrap();
}
