//! # Catalog Client
//!
//! Provides a high-level API for interacting with the `Resource` actor.
//! It wraps a `ResourceClient<Resource>` and turns "no such resource" into
//! `None`/`false` instead of an error.
use crate::model::{
    NewResource, Resource, ResourceCreate, ResourceFilter, ResourceId, ResourceUpdate,
};
use crate::resource_actor::{ResourceAction, ResourceError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Resource actor.
///
/// [`ActorClient::get`] is a plain read. [`CatalogClient::view_resource`] is the read
/// that counts a view.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Resource>,
}

#[async_trait]
impl ActorClient<Resource> for CatalogClient {
    type Error = ResourceError;

    fn inner(&self) -> &ResourceClient<Resource> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ResourceError::NotFound(id),
            e => e
                .into_entity_error::<ResourceError>()
                .unwrap_or_else(|e| ResourceError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Resource>) -> Self {
        Self { inner }
    }

    /// Lists resources matching `filter`, newest first.
    #[instrument(skip(self))]
    pub async fn list_resources(
        &self,
        filter: ResourceFilter,
    ) -> Result<Vec<Resource>, ResourceError> {
        self.list(filter).await
    }

    /// Published, featured resources, newest first, at most `limit` of them.
    #[instrument(skip(self))]
    pub async fn featured_resources(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<Resource>, ResourceError> {
        let mut resources = self.list(ResourceFilter::featured()).await?;
        if let Some(limit) = limit {
            resources.truncate(limit);
        }
        Ok(resources)
    }

    /// Everything by one author, drafts included, newest first.
    #[instrument(skip(self))]
    pub async fn resources_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<Resource>, ResourceError> {
        self.list(ResourceFilter::by_author(author_id)).await
    }

    /// Reads a resource and counts the read: the returned copy already includes this view.
    #[instrument(skip(self))]
    pub async fn view_resource(&self, id: ResourceId) -> Result<Option<Resource>, ResourceError> {
        debug!("Recording view");
        self.apply(id, ResourceAction::RecordView).await
    }

    #[instrument(skip(self, data, author_id, author_name), fields(title = %data.title))]
    pub async fn create_resource(
        &self,
        data: NewResource,
        author_id: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Result<Resource, ResourceError> {
        debug!("Sending request");
        let params = ResourceCreate {
            data,
            author_id: author_id.into(),
            author_name: author_name.into(),
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies a partial update. `Ok(None)` when the resource does not exist.
    #[instrument(skip(self))]
    pub async fn update_resource(
        &self,
        id: ResourceId,
        update: ResourceUpdate,
    ) -> Result<Option<Resource>, ResourceError> {
        debug!("Sending request");
        found(self.inner.update(id, update).await)
    }

    /// Removes a resource. `Ok(false)` when there was nothing to remove.
    #[instrument(skip(self))]
    pub async fn delete_resource(&self, id: ResourceId) -> Result<bool, ResourceError> {
        debug!("Sending request");
        Ok(found(self.inner.delete(id).await)?.is_some())
    }

    /// Adds one like and returns the updated resource.
    ///
    /// Calling it again adds another like; it never takes one away.
    #[instrument(skip(self))]
    pub async fn like_resource(&self, id: ResourceId) -> Result<Option<Resource>, ResourceError> {
        debug!("Sending request");
        self.apply(id, ResourceAction::Like).await
    }

    async fn apply(
        &self,
        id: ResourceId,
        action: ResourceAction,
    ) -> Result<Option<Resource>, ResourceError> {
        found(self.inner.perform_action(id, action).await)
    }
}

fn found<T>(result: Result<T, FrameworkError>) -> Result<Option<T>, ResourceError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(FrameworkError::NotFound(_)) => Ok(None),
        Err(e) => Err(CatalogClient::map_error(e)),
    }
}
