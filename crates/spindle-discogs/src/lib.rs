// SPDX-License-Identifier: GPL-3.0-or-later

//! Discogs API client.
//!
//! A [`DiscogsClient`] is built once from a [`DiscogsConfig`] and exposes the
//! collection, database, marketplace, and search endpoints as separate
//! service handles. Every handle shares the same request pipeline and the
//! headers computed at construction.

pub mod client;
pub mod currency;
pub mod error;
pub mod models;
pub mod services;
mod transport;

pub use client::{DiscogsClient, DiscogsClientBuilder};
pub use currency::Currency;
pub use error::{DiscogsError, Result};
pub use models::{Page, PageUrls, Pagination, SortOrder};
pub use services::{CollectionService, DatabaseService, MarketplaceService, SearchService};
pub use spindle_config::DiscogsConfig;
