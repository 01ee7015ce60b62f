use crate::model::{Category, Level, ResourceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Partial update for a [`Resource`](crate::model::Resource).
///
/// Only the fields set to `Some` are written; everything else keeps its stored value.
/// `updated_at` is refreshed on every successful update.
///
/// ```
/// use resource_catalog::model::ResourceUpdate;
///
/// let patch = ResourceUpdate {
///     likes: Some(5),
///     ..Default::default()
/// };
/// assert!(!patch.is_empty());
/// assert!(ResourceUpdate::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
    pub level: Option<Level>,
    pub tags: Option<BTreeSet<String>>,
    pub author_id: Option<String>,
    pub author_name: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    /// Must not be lower than the stored count.
    pub views: Option<u64>,
    /// Must not be lower than the stored count.
    pub likes: Option<u64>,
    pub language: Option<String>,
}

impl ResourceUpdate {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
