// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::instrument;

use crate::error::Result;
use crate::models::{Search, SearchRequest};
use crate::transport::Transport;

/// Database search, rooted at `/database/search`.
#[derive(Debug, Clone)]
pub struct SearchService {
    transport: Transport,
    base: String,
}

impl SearchService {
    pub(crate) fn new(transport: Transport, base: String) -> Self {
        Self { transport, base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Search releases, masters, artists and labels.
    ///
    /// Discogs only serves search to authenticated clients; without a token
    /// this fails with [`DiscogsError::Unauthorized`](crate::DiscogsError::Unauthorized).
    ///
    /// # Example
    /// ```no_run
    /// # use spindle_discogs::DiscogsClient;
    /// # use spindle_discogs::models::{SearchRequest, SearchType};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = DiscogsClient::builder()
    ///     .user_agent("MyCollectionApp/1.0")
    ///     .token("personal-access-token")
    ///     .build()?;
    /// let request = SearchRequest::new("Nevermind").search_type(SearchType::Release);
    /// let found = client.search().search(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn search(&self, request: &SearchRequest) -> Result<Search> {
        Ok(self
            .transport
            .get(&self.base, &request.params())
            .await?
            .unwrap_or_default())
    }
}
