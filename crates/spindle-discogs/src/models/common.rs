// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use crate::transport::{push_opt, Params};

/// Direction for sorted list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Paging and sorting parameters for list endpoints.
///
/// Unset fields are left out of the query so Discogs applies its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Sort key, e.g. `year`, `title`, `added`. Valid keys vary per endpoint.
    pub sort: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    /// Items per page (Discogs caps this at 100).
    pub per_page: Option<u32>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, sort: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(sort.into());
        self.sort_order = Some(order);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub(crate) fn params(pagination: Option<&Pagination>) -> Params {
        let mut params = Params::new();
        if let Some(pagination) = pagination {
            push_opt(&mut params, "sort", pagination.sort.as_deref());
            push_opt(
                &mut params,
                "sort_order",
                pagination.sort_order.map(SortOrder::as_str),
            );
            push_opt(&mut params, "page", pagination.page);
            push_opt(&mut params, "per_page", pagination.per_page);
        }
        params
    }
}

/// Paging block returned alongside list results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub per_page: u32,
    pub items: u32,
    pub page: u32,
    pub urls: PageUrls,
    pub pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageUrls {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub height: u32,
    pub width: u32,
    #[serde(rename = "type")]
    pub image_type: String,
    pub resource_url: String,
    pub uri: String,
    pub uri150: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub description: String,
    pub duration: u32,
    pub embed: bool,
    pub title: String,
    pub uri: String,
}

/// Artist credit on a release, master or track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistSource {
    pub anv: String,
    pub id: u64,
    pub join: String,
    pub name: String,
    pub resource_url: String,
    pub role: String,
    pub tracks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSource {
    pub catno: String,
    pub entity_type: String,
    pub entity_type_name: String,
    pub id: u64,
    pub name: String,
    pub resource_url: String,
}

/// Company credited on a release (pressing plant, distributor, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub catno: String,
    pub entity_type: String,
    pub entity_type_name: String,
    pub id: u64,
    pub name: String,
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Format {
    pub descriptions: Vec<String>,
    pub name: String,
    pub qty: String,
    pub text: String,
}

/// Barcode, matrix number and similar printed identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifier {
    pub description: String,
    #[serde(rename = "type")]
    pub identifier_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    pub duration: String,
    pub position: String,
    pub title: String,
    #[serde(rename = "type_")]
    pub track_type: String,
    pub extraartists: Vec<ArtistSource>,
    pub artists: Vec<ArtistSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    pub average: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    pub resource_url: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Community {
    pub contributors: Vec<Contributor>,
    pub data_quality: String,
    pub have: u32,
    pub rating: Rating,
    pub status: String,
    pub submitter: Contributor,
    pub want: u32,
}

/// A monetary amount in a given currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    pub currency: String,
    pub value: f64,
}
