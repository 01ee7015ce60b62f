//! Listing criteria for the catalog.

use crate::model::{Category, Level, Resource, ResourceType};
use serde::{Deserialize, Serialize};

/// Criteria for listing resources.
///
/// Every field that is set must match (AND). An all-`None` filter selects the whole catalog.
/// `search` is matched case-insensitively as a substring of the title, the description
/// or any single tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceFilter {
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
    pub level: Option<Level>,
    pub language: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub author_id: Option<String>,
    pub search: Option<String>,
}

impl ResourceFilter {
    /// Featured and published resources, the public "featured" shelf.
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            published: Some(true),
            ..Self::default()
        }
    }

    /// Everything written by `author_id`, drafts included.
    pub fn by_author(author_id: impl Into<String>) -> Self {
        Self {
            author_id: Some(author_id.into()),
            ..Self::default()
        }
    }

    /// Adds a free-text search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Whether `resource` satisfies every criterion that is set.
    pub fn accepts(&self, resource: &Resource) -> bool {
        fn field<T: PartialEq>(wanted: &Option<T>, actual: &T) -> bool {
            wanted.as_ref().map_or(true, |wanted| wanted == actual)
        }

        field(&self.category, &resource.category)
            && field(&self.resource_type, &resource.resource_type)
            && field(&self.level, &resource.level)
            && field(&self.language, &resource.language)
            && field(&self.featured, &resource.featured)
            && field(&self.published, &resource.published)
            && field(&self.author_id, &resource.author_id)
            && self
                .search
                .as_deref()
                .map_or(true, |term| search_matches(resource, term))
    }
}

fn search_matches(resource: &Resource, term: &str) -> bool {
    let needle = term.to_lowercase();
    resource.title.to_lowercase().contains(&needle)
        || resource.description.to_lowercase().contains(&needle)
        || resource
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}
