//! Starter content for a fresh catalog.
//!
//! A seed entry is a [`NewResource`] plus its author and, optionally, the engagement
//! it should start with. The JSON form is an array of such entries:
//!
//! ```json
//! [
//!   {
//!     "title": "Getting started with the community",
//!     "description": "House rules and where to ask questions",
//!     "content": "...",
//!     "category": "community",
//!     "type": "guide",
//!     "level": "beginner",
//!     "tags": ["onboarding"],
//!     "language": "en",
//!     "published": true,
//!     "featured": true,
//!     "author_id": "team",
//!     "author_name": "Community Team",
//!     "views": 120
//!   }
//! ]
//! ```

use crate::config::ConfigError;
use crate::model::{Category, Level, NewResource, ResourceType, ResourceUpdate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedResource {
    #[serde(flatten)]
    pub data: NewResource,
    pub author_id: String,
    pub author_name: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
}

impl SeedResource {
    /// The patch that brings a freshly created resource up to the seeded counters,
    /// or `None` when both are zero.
    pub fn engagement(&self) -> Option<ResourceUpdate> {
        if self.views == 0 && self.likes == 0 {
            return None;
        }
        Some(ResourceUpdate {
            views: Some(self.views),
            likes: Some(self.likes),
            ..ResourceUpdate::default()
        })
    }
}

/// Reads a JSON array of seed entries.
pub fn load_seed_file(path: &Path) -> Result<Vec<SeedResource>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}

/// The built-in starter set.
pub fn default_resources() -> Vec<SeedResource> {
    vec![
        entry(
            "Welcome to the community",
            "How the space works and where to find help",
            "Read the house rules, introduce yourself, and browse the learning shelf.",
            Category::Community,
            ResourceType::Guide,
            Level::Beginner,
            &["onboarding", "rules"],
            (true, true),
            ("team", "Community Team"),
        ),
        entry(
            "Rust for web developers",
            "From JavaScript to ownership and borrowing",
            "Module 1 covers ownership; module 2 covers error handling with Result.",
            Category::Technology,
            ResourceType::Course,
            Level::Intermediate,
            &["rust", "programming"],
            (true, true),
            ("u-ada", "Ada Moreno"),
        ),
        entry(
            "Designing accessible forms",
            "Labels, focus order and error messages",
            "Every input needs a visible label and an error that says how to fix it.",
            Category::Design,
            ResourceType::Article,
            Level::Beginner,
            &["a11y", "ux"],
            (true, false),
            ("u-lin", "Lin Park"),
        ),
        entry(
            "Pricing your freelance work",
            "Day rates, retainers and value pricing",
            "Draft. Start from your yearly target and work backwards.",
            Category::Business,
            ResourceType::Article,
            Level::Advanced,
            &["freelance", "money"],
            (false, true),
            ("u-ada", "Ada Moreno"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    title: &str,
    description: &str,
    content: &str,
    category: Category,
    resource_type: ResourceType,
    level: Level,
    tags: &[&str],
    (published, featured): (bool, bool),
    (author_id, author_name): (&str, &str),
) -> SeedResource {
    SeedResource {
        data: NewResource {
            title: title.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            category,
            resource_type,
            level,
            tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            language: "en".to_string(),
            published: Some(published),
            featured: Some(featured),
        },
        author_id: author_id.to_string(),
        author_name: author_name.to_string(),
        views: 0,
        likes: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_resources_mix_featured_and_published() {
        let seeds = default_resources();
        let featured_published = seeds
            .iter()
            .filter(|s| s.data.featured == Some(true) && s.data.published == Some(true))
            .count();
        assert_eq!(seeds.len(), 4);
        assert_eq!(featured_published, 2);
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "title": "Meal prep on a budget",
                "description": "Five dinners, one shop",
                "content": "...",
                "category": "wellbeing",
                "type": "video",
                "level": "beginner",
                "language": "es",
                "author_id": "u-9",
                "author_name": "Marta",
                "likes": 4
            }}]"#
        )
        .unwrap();

        let seeds = load_seed_file(file.path()).unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].data.category, Category::Wellbeing);
        assert_eq!(seeds[0].data.published, None);
        assert_eq!(seeds[0].views, 0);
        assert_eq!(
            seeds[0].engagement().and_then(|patch| patch.likes),
            Some(4)
        );
    }

    #[test]
    fn test_load_seed_file_errors() {
        let missing = load_seed_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::SeedRead { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let malformed = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(malformed, ConfigError::SeedParse { .. }));
    }

    #[test]
    fn test_engagement_skips_zero_counters() {
        assert!(default_resources()[0].engagement().is_none());
    }
}
