//! ActorEntity trait implementation for the Resource domain type.
//!
//! Timestamps come from the injected [`SharedClock`]; counters only grow.

use super::actions::ResourceAction;
use super::error::ResourceError;
use crate::clock::SharedClock;
use crate::model::{Resource, ResourceCreate, ResourceFilter, ResourceId, ResourceUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::cmp::Ordering;

#[async_trait]
impl ActorEntity for Resource {
    type Id = ResourceId;
    type Create = ResourceCreate;
    type Update = ResourceUpdate;
    type Filter = ResourceFilter;
    type Action = ResourceAction;
    type ActionResult = Resource;
    type Context = SharedClock;
    type Error = ResourceError;

    /// Stamps both timestamps with the current time and starts the counters at zero.
    fn from_create_params(
        id: ResourceId,
        params: ResourceCreate,
        clock: &SharedClock,
    ) -> Result<Self, Self::Error> {
        Ok(Self::new(
            id,
            params.data,
            params.author_id,
            params.author_name,
            clock.now(),
        ))
    }

    /// Merges the supplied fields and refreshes `updated_at`.
    ///
    /// Rejects the whole patch, changing nothing, if it would lower `views` or `likes`.
    async fn on_update(
        &mut self,
        update: ResourceUpdate,
        clock: &SharedClock,
    ) -> Result<(), Self::Error> {
        check_counter("views", self.views, update.views)?;
        check_counter("likes", self.likes, update.likes)?;

        let ResourceUpdate {
            title,
            description,
            content,
            category,
            resource_type,
            level,
            tags,
            author_id,
            author_name,
            published,
            featured,
            views,
            likes,
            language,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(resource_type) = resource_type {
            self.resource_type = resource_type;
        }
        if let Some(level) = level {
            self.level = level;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(author_id) = author_id {
            self.author_id = author_id;
        }
        if let Some(author_name) = author_name {
            self.author_name = author_name;
        }
        if let Some(published) = published {
            self.published = published;
        }
        if let Some(featured) = featured {
            self.featured = featured;
        }
        if let Some(views) = views {
            self.views = views;
        }
        if let Some(likes) = likes {
            self.likes = likes;
        }
        if let Some(language) = language {
            self.language = language;
        }

        self.updated_at = clock.now().max(self.created_at);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ResourceAction,
        _clock: &SharedClock,
    ) -> Result<Resource, Self::Error> {
        match action {
            ResourceAction::RecordView => self.views = self.views.saturating_add(1),
            ResourceAction::Like => self.likes = self.likes.saturating_add(1),
        }
        Ok(self.clone())
    }

    fn matches(&self, filter: &ResourceFilter) -> bool {
        filter.accepts(self)
    }

    /// Newest first; equal timestamps fall back to the later id.
    fn list_order(&self, other: &Self) -> Ordering {
        other
            .created_at
            .cmp(&self.created_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

fn check_counter(
    counter: &'static str,
    current: u64,
    requested: Option<u64>,
) -> Result<(), ResourceError> {
    match requested {
        Some(requested) if requested < current => Err(ResourceError::CounterRegression {
            counter,
            current,
            requested,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::model::{Category, Level, NewResource, ResourceType};
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn setup() -> (ManualClock, SharedClock, Resource) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let shared: SharedClock = Arc::new(clock.clone());
        let params = ResourceCreate {
            data: NewResource {
                title: "Budgeting 101".to_string(),
                description: "Monthly plans".to_string(),
                content: "Start with fixed costs.".to_string(),
                category: Category::PersonalDevelopment,
                resource_type: ResourceType::Course,
                level: Level::Beginner,
                tags: BTreeSet::from(["money".to_string()]),
                language: "en".to_string(),
                published: Some(true),
                featured: None,
            },
            author_id: "u-7".to_string(),
            author_name: "Sam".to_string(),
        };
        let resource = Resource::from_create_params(ResourceId(1), params, &shared).unwrap();
        (clock, shared, resource)
    }

    #[tokio::test]
    async fn test_update_touches_only_supplied_fields() {
        let (clock, shared, mut resource) = setup();
        let before = resource.clone();
        clock.advance(Duration::hours(1));

        let patch = ResourceUpdate {
            likes: Some(5),
            ..Default::default()
        };
        resource.on_update(patch, &shared).await.unwrap();

        assert_eq!(resource.likes, 5);
        assert_eq!(resource.updated_at, before.created_at + Duration::hours(1));
        let restored = Resource {
            likes: before.likes,
            updated_at: before.updated_at,
            ..resource.clone()
        };
        assert_eq!(restored, before);
    }

    #[tokio::test]
    async fn test_update_rejects_counter_regression() {
        let (_clock, shared, mut resource) = setup();
        resource.views = 10;
        let before = resource.clone();

        let patch = ResourceUpdate {
            title: Some("Renamed".to_string()),
            views: Some(3),
            ..Default::default()
        };
        let err = resource.on_update(patch, &shared).await.unwrap_err();

        assert_eq!(
            err,
            ResourceError::CounterRegression {
                counter: "views",
                current: 10,
                requested: 3
            }
        );
        assert_eq!(resource, before);
    }

    #[tokio::test]
    async fn test_updated_at_never_precedes_created_at() {
        let (clock, shared, mut resource) = setup();
        clock.advance(Duration::days(-1));

        resource
            .on_update(ResourceUpdate::default(), &shared)
            .await
            .unwrap();
        assert_eq!(resource.updated_at, resource.created_at);
    }

    #[tokio::test]
    async fn test_actions_increment_and_return_copy() {
        let (_clock, shared, mut resource) = setup();

        let viewed = resource
            .handle_action(ResourceAction::RecordView, &shared)
            .await
            .unwrap();
        assert_eq!(viewed.views, 1);

        for _ in 0..3 {
            resource
                .handle_action(ResourceAction::Like, &shared)
                .await
                .unwrap();
        }
        assert_eq!(resource.likes, 3);
        assert_eq!(resource.views, 1);
    }

    #[test]
    fn test_list_order_is_newest_first() {
        let (_clock, _shared, older) = setup();
        let newer = Resource {
            created_at: older.created_at + Duration::seconds(1),
            ..older.clone()
        };
        assert_eq!(newer.list_order(&older), Ordering::Less);
        assert_eq!(older.list_order(&newer), Ordering::Greater);
    }
}
