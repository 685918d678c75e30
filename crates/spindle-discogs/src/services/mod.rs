// SPDX-License-Identifier: GPL-3.0-or-later

//! Service handles, one per Discogs resource group.

mod collection;
mod database;
mod marketplace;
mod search;

pub use collection::CollectionService;
pub use database::DatabaseService;
pub use marketplace::MarketplaceService;
pub use search::SearchService;

use url::Url;

use crate::error::{DiscogsError, Result};

/// Append `username` to `base` as a single percent-encoded path segment.
fn with_username(base: &str, username: &str) -> Result<String> {
    if username.trim().is_empty() {
        return Err(DiscogsError::InvalidUsername);
    }

    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| cannot_be_a_base())?
        .pop_if_empty()
        .push(username);
    Ok(url.into())
}

pub(crate) fn cannot_be_a_base() -> DiscogsError {
    DiscogsError::InvalidBaseUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
}
