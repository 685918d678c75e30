// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::instrument;

use super::with_username;
use crate::currency::Currency;
use crate::error::Result;
use crate::models::{
    Artist, ArtistReleases, Label, LabelReleases, Master, MasterVersions, Pagination, Release,
    ReleaseRating, ReleaseUserRating,
};
use crate::transport::{Params, Transport};

/// Catalog endpoints: releases, artists, labels, masters.
#[derive(Debug, Clone)]
pub struct DatabaseService {
    transport: Transport,
    base: String,
    currency: Currency,
}

impl DatabaseService {
    pub(crate) fn new(transport: Transport, base: String, currency: Currency) -> Self {
        Self {
            transport,
            base,
            currency,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fetch a release. Marketplace prices come back in the client's currency.
    #[instrument(skip(self))]
    pub async fn release(&self, release_id: u64) -> Result<Release> {
        let path = format!("{}/releases/{release_id}", self.base);
        let params: Params = vec![("curr_abbr", self.currency.to_string())];
        Ok(self.transport.get(&path, &params).await?.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn release_rating(&self, release_id: u64) -> Result<ReleaseRating> {
        let path = format!("{}/releases/{release_id}/rating", self.base);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn release_rating_by_user(
        &self,
        release_id: u64,
        username: &str,
    ) -> Result<ReleaseUserRating> {
        let base = format!("{}/releases/{release_id}/rating", self.base);
        let path = with_username(&base, username)?;
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn artist(&self, artist_id: u64) -> Result<Artist> {
        let path = format!("{}/artists/{artist_id}", self.base);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    /// Sortable by `year`, `title` or `format`.
    #[instrument(skip(self))]
    pub async fn artist_releases(
        &self,
        artist_id: u64,
        pagination: Option<&Pagination>,
    ) -> Result<ArtistReleases> {
        let path = format!("{}/artists/{artist_id}/releases", self.base);
        Ok(self
            .transport
            .get(&path, &Pagination::params(pagination))
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn label(&self, label_id: u64) -> Result<Label> {
        let path = format!("{}/labels/{label_id}", self.base);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn label_releases(
        &self,
        label_id: u64,
        pagination: Option<&Pagination>,
    ) -> Result<LabelReleases> {
        let path = format!("{}/labels/{label_id}/releases", self.base);
        Ok(self
            .transport
            .get(&path, &Pagination::params(pagination))
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn master(&self, master_id: u64) -> Result<Master> {
        let path = format!("{}/masters/{master_id}", self.base);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn master_versions(
        &self,
        master_id: u64,
        pagination: Option<&Pagination>,
    ) -> Result<MasterVersions> {
        let path = format!("{}/masters/{master_id}/versions", self.base);
        Ok(self
            .transport
            .get(&path, &Pagination::params(pagination))
            .await?
            .unwrap_or_default())
    }
}
