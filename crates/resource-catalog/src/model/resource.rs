//! The [`Resource`] entity: one piece of learning content (an article, a course, ...).
//!
//! # Actor Framework
//! [`Resource`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Resource`](Resource#impl-ActorEntity-for-Resource) for details on:
//! - Creation parameters ([`ResourceCreate`])
//! - Update parameters ([`ResourceUpdate`](crate::model::ResourceUpdate))
//! - Listing criteria ([`ResourceFilter`](crate::model::ResourceFilter))
//! - Custom actions ([`ResourceAction`](crate::resource_actor::ResourceAction))

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for Resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub u32);

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "resource_{}", self.0)
    }
}

/// Topic a resource is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technology,
    Business,
    Design,
    Marketing,
    PersonalDevelopment,
    Community,
    Wellbeing,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Design => "design",
            Category::Marketing => "marketing",
            Category::PersonalDevelopment => "personal_development",
            Category::Community => "community",
            Category::Wellbeing => "wellbeing",
            Category::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Article,
    Course,
    Video,
    Podcast,
    Guide,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Article => "article",
            ResourceType::Course => "course",
            ResourceType::Video => "video",
            ResourceType::Podcast => "podcast",
            ResourceType::Guide => "guide",
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected reader experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored catalog entry.
///
/// Values handed out by the catalog are copies; changing one never affects the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub level: Level,
    pub tags: BTreeSet<String>,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    /// Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
    pub published: bool,
    /// Independent of `published`; a featured draft is allowed.
    pub featured: bool,
    /// Only ever grows.
    pub views: u64,
    /// Only ever grows.
    pub likes: u64,
    pub language: String,
}

impl Resource {
    /// Builds a fresh, unviewed and unliked resource stamped at `now`.
    pub fn new(
        id: ResourceId,
        data: NewResource,
        author_id: impl Into<String>,
        author_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            content: data.content,
            category: data.category,
            resource_type: data.resource_type,
            level: data.level,
            tags: data.tags,
            author_id: author_id.into(),
            author_name: author_name.into(),
            created_at: now,
            updated_at: now,
            published: data.published.unwrap_or(false),
            featured: data.featured.unwrap_or(false),
            views: 0,
            likes: 0,
            language: data.language,
        }
    }
}

/// The caller-supplied part of a new resource.
///
/// Identifier, timestamps, author and counters are filled in by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub level: Level,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub language: String,
    /// Defaults to `false`.
    #[serde(default)]
    pub published: Option<bool>,
    /// Defaults to `false`.
    #[serde(default)]
    pub featured: Option<bool>,
}

/// Payload for creating a new resource.
#[derive(Debug, Clone)]
pub struct ResourceCreate {
    pub data: NewResource,
    pub author_id: String,
    pub author_name: String,
}
