// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::instrument;

use crate::currency::Currency;
use crate::error::Result;
use crate::models::{Listing, PriceSuggestions, Stats};
use crate::transport::{Params, Transport};

/// Marketplace endpoints, rooted at `/marketplace`.
#[derive(Debug, Clone)]
pub struct MarketplaceService {
    transport: Transport,
    base: String,
    currency: Currency,
}

impl MarketplaceService {
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

    fn currency_params(&self) -> Params {
        vec![("curr_abbr", self.currency.to_string())]
    }

    /// Suggested prices per condition. Needs a token with seller settings filled in.
    #[instrument(skip(self))]
    pub async fn price_suggestions(&self, release_id: u64) -> Result<PriceSuggestions> {
        let path = format!("{}/price_suggestions/{release_id}", self.base);
        Ok(self
            .transport
            .get(&path, &Params::new())
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn release_statistics(&self, release_id: u64) -> Result<Stats> {
        let path = format!("{}/stats/{release_id}", self.base);
        Ok(self
            .transport
            .get(&path, &self.currency_params())
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn listing(&self, listing_id: u64) -> Result<Listing> {
        let path = format!("{}/listings/{listing_id}", self.base);
        Ok(self
            .transport
            .get(&path, &self.currency_params())
            .await?
            .unwrap_or_default())
    }
}
