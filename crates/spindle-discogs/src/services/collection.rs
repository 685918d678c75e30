// SPDX-License-Identifier: GPL-3.0-or-later

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::with_username;
use crate::error::Result;
use crate::models::{CollectionFolders, CollectionItems, CollectionValue, Folder, Pagination};
use crate::transport::{Params, Transport};

#[derive(Serialize)]
struct FolderName<'a> {
    name: &'a str,
}

/// User collection endpoints, rooted at `/users`.
#[derive(Debug, Clone)]
pub struct CollectionService {
    transport: Transport,
    base: String,
}

impl CollectionService {
    pub(crate) fn new(transport: Transport, base: String) -> Self {
        Self { transport, base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn collection_path(&self, username: &str) -> Result<String> {
        Ok(format!("{}/collection", with_username(&self.base, username)?))
    }

    /// List the folders in a user's collection.
    ///
    /// Without a token for that user only folder 0 ("All") is returned, and
    /// only if the collection is public.
    #[instrument(skip(self))]
    pub async fn folders(&self, username: &str) -> Result<CollectionFolders> {
        let path = format!("{}/folders", self.collection_path(username)?);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn folder(&self, username: &str, folder_id: u64) -> Result<Folder> {
        let path = format!("{}/folders/{folder_id}", self.collection_path(username)?);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    /// Folders 0 and 1 cannot be renamed; Discogs rejects the request.
    #[instrument(skip(self))]
    pub async fn rename_folder(
        &self,
        username: &str,
        folder_id: u64,
        name: &str,
    ) -> Result<Folder> {
        let path = format!("{}/folders/{folder_id}", self.collection_path(username)?);
        Ok(self
            .transport
            .request_with_json_body(Method::POST, &path, &Params::new(), &FolderName { name })
            .await?
            .unwrap_or_default())
    }

    /// Delete an empty folder.
    #[instrument(skip(self))]
    pub async fn delete_folder(&self, username: &str, folder_id: u64) -> Result<()> {
        let path = format!("{}/folders/{folder_id}", self.collection_path(username)?);
        self.transport
            .request_with_method::<serde_json::Value>(Method::DELETE, &path, &Params::new())
            .await?;
        Ok(())
    }

    /// List the releases in a folder. Folder 0 lists the whole collection.
    #[instrument(skip(self))]
    pub async fn items_by_folder(
        &self,
        username: &str,
        folder_id: u64,
        pagination: Option<&Pagination>,
    ) -> Result<CollectionItems> {
        let path = format!(
            "{}/folders/{folder_id}/releases",
            self.collection_path(username)?
        );
        Ok(self
            .transport
            .get(&path, &Pagination::params(pagination))
            .await?
            .unwrap_or_default())
    }

    /// Find every instance of a release in a user's collection.
    #[instrument(skip(self))]
    pub async fn items_by_release(
        &self,
        username: &str,
        release_id: u64,
    ) -> Result<CollectionItems> {
        let path = format!("{}/releases/{release_id}", self.collection_path(username)?);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn remove_instance(
        &self,
        username: &str,
        folder_id: u64,
        release_id: u64,
        instance_id: u64,
    ) -> Result<()> {
        let path = format!(
            "{}/folders/{folder_id}/releases/{release_id}/instances/{instance_id}",
            self.collection_path(username)?
        );
        self.transport
            .request_with_method::<serde_json::Value>(Method::DELETE, &path, &Params::new())
            .await?;
        Ok(())
    }

    /// Estimated minimum, median and maximum value. Owner token required.
    #[instrument(skip(self))]
    pub async fn value(&self, username: &str) -> Result<CollectionValue> {
        let path = format!("{}/value", self.collection_path(username)?);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }
}
