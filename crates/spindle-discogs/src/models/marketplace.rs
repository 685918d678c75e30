// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::common::Price;

/// Suggested prices keyed by media condition, e.g. "Near Mint (NM or M-)".
///
/// Requires an authenticated seller account.
pub type PriceSuggestions = std::collections::BTreeMap<String, Price>;

/// Marketplace statistics for a release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub lowest_price: Option<Price>,
    pub num_for_sale: u32,
    pub blocked_from_sale: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seller {
    pub id: u64,
    pub username: String,
    pub resource_url: String,
    pub url: String,
    pub rating: String,
    pub payment: String,
    pub shipping: String,
}

/// Release summary embedded in a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingRelease {
    pub id: u64,
    pub description: String,
    pub catalog_number: String,
    pub year: u32,
    pub thumbnail: String,
    pub resource_url: String,
}

/// A single item for sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub id: u64,
    pub status: String,
    pub condition: String,
    pub sleeve_condition: String,
    pub comments: String,
    pub ships_from: String,
    pub posted: String,
    pub allow_offers: bool,
    pub audio: bool,
    pub price: Price,
    pub original_price: Option<Price>,
    pub shipping_price: Option<Price>,
    pub seller: Seller,
    pub release: ListingRelease,
    pub resource_url: String,
    pub uri: String,
}
