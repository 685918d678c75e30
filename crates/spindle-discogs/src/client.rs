// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use spindle_config::{DiscogsConfig, DISCOGS_API_BASE};
use tracing::info;
use url::Url;

use crate::currency::Currency;
use crate::error::{DiscogsError, Result};
use crate::services::{
    cannot_be_a_base, CollectionService, DatabaseService, MarketplaceService, SearchService,
};
use crate::transport::{RequestContext, Transport};

/// Discogs API client.
///
/// Cloning is cheap; clones share the connection pool and the headers
/// computed at construction.
#[derive(Debug, Clone)]
pub struct DiscogsClient {
    currency: Currency,
    transport: Transport,
    collection: CollectionService,
    database: DatabaseService,
    marketplace: MarketplaceService,
    search: SearchService,
}

impl DiscogsClient {
    /// Build a client from loaded configuration.
    ///
    /// # Example
    /// ```no_run
    /// # use spindle_discogs::{DiscogsClient, DiscogsConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = DiscogsConfig::new("MyCollectionApp/1.0").currency("EUR");
    /// let client = DiscogsClient::new(&config)?;
    /// let release = client.database().release(249504).await?;
    /// println!("{}", release.title);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &DiscogsConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .user_agent(config.user_agent.as_str())
            .currency(config.currency.as_str())
            .base_url(config.base_url.as_str());
        if let Some(token) = config.token.as_deref() {
            builder = builder.token(token);
        }
        builder.build()
    }

    pub fn builder() -> DiscogsClientBuilder {
        DiscogsClientBuilder::default()
    }

    pub fn collection(&self) -> &CollectionService {
        &self.collection
    }

    pub fn database(&self) -> &DatabaseService {
        &self.database
    }

    pub fn marketplace(&self) -> &MarketplaceService {
        &self.marketplace
    }

    pub fn search(&self) -> &SearchService {
        &self.search
    }

    /// Currency used for marketplace prices.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whether requests carry an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.transport.context().headers().contains_key(AUTHORIZATION)
    }
}

/// Builder for configuring a Discogs client.
#[derive(Debug)]
pub struct DiscogsClientBuilder {
    base_url: String,
    currency: String,
    user_agent: String,
    token: Option<String>,
}

impl Default for DiscogsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DISCOGS_API_BASE.to_string(),
            currency: String::new(),
            user_agent: String::new(),
            token: None,
        }
    }
}

impl DiscogsClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    /// Trailing slashes are dropped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Currency code for marketplace data. Empty selects USD.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Personal access token. A blank token is treated as absent.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Validate the settings and build the client.
    pub fn build(self) -> Result<DiscogsClient> {
        // Blank values are rejected, but accepted ones are sent as given.
        if self.user_agent.trim().is_empty() {
            return Err(DiscogsError::UserAgentInvalid);
        }

        let currency: Currency = self.currency.parse()?;

        let token = self
            .token
            .as_deref()
            .filter(|token| !token.trim().is_empty());

        let base_url = if self.base_url.is_empty() {
            DISCOGS_API_BASE
        } else {
            self.base_url.trim_end_matches('/')
        };
        if Url::parse(base_url)?.cannot_be_a_base() {
            return Err(cannot_be_a_base());
        }

        let context = Arc::new(RequestContext::new(&self.user_agent, token)?);
        let transport = Transport::new(Client::new(), context);

        info!(
            target: "discogs",
            base_url,
            %currency,
            authenticated = token.is_some(),
            "initialized Discogs client"
        );

        Ok(DiscogsClient {
            currency,
            collection: CollectionService::new(transport.clone(), format!("{base_url}/users")),
            database: DatabaseService::new(transport.clone(), base_url.to_string(), currency),
            marketplace: MarketplaceService::new(
                transport.clone(),
                format!("{base_url}/marketplace"),
                currency,
            ),
            search: SearchService::new(transport.clone(), format!("{base_url}/database/search")),
            transport,
        })
    }
}
