// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::common::Page;
use crate::transport::{push_opt, Params};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Release,
    Master,
    Artist,
    Label,
}

impl SearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Release => "release",
            SearchType::Master => "master",
            SearchType::Artist => "artist",
            SearchType::Label => "label",
        }
    }
}

/// Database search parameters. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query.
    pub q: Option<String>,
    pub search_type: Option<SearchType>,
    pub title: Option<String>,
    pub release_title: Option<String>,
    pub credit: Option<String>,
    pub artist: Option<String>,
    /// Artist name variation.
    pub anv: Option<String>,
    pub label: Option<String>,
    pub genre: Option<String>,
    pub style: Option<String>,
    pub country: Option<String>,
    pub year: Option<String>,
    pub format: Option<String>,
    pub catno: Option<String>,
    pub barcode: Option<String>,
    pub track: Option<String>,
    pub submitter: Option<String>,
    pub contributor: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn release_title(mut self, title: impl Into<String>) -> Self {
        self.release_title = Some(title.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
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

    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        push_opt(&mut params, "q", self.q.as_deref());
        push_opt(&mut params, "type", self.search_type.map(SearchType::as_str));
        push_opt(&mut params, "title", self.title.as_deref());
        push_opt(&mut params, "release_title", self.release_title.as_deref());
        push_opt(&mut params, "credit", self.credit.as_deref());
        push_opt(&mut params, "artist", self.artist.as_deref());
        push_opt(&mut params, "anv", self.anv.as_deref());
        push_opt(&mut params, "label", self.label.as_deref());
        push_opt(&mut params, "genre", self.genre.as_deref());
        push_opt(&mut params, "style", self.style.as_deref());
        push_opt(&mut params, "country", self.country.as_deref());
        push_opt(&mut params, "year", self.year.as_deref());
        push_opt(&mut params, "format", self.format.as_deref());
        push_opt(&mut params, "catno", self.catno.as_deref());
        push_opt(&mut params, "barcode", self.barcode.as_deref());
        push_opt(&mut params, "track", self.track.as_deref());
        push_opt(&mut params, "submitter", self.submitter.as_deref());
        push_opt(&mut params, "contributor", self.contributor.as_deref());
        push_opt(&mut params, "page", self.page);
        push_opt(&mut params, "per_page", self.per_page);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCommunity {
    pub want: u32,
    pub have: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub id: u64,
    #[serde(rename = "type")]
    pub result_type: String,
    pub title: String,
    pub thumb: String,
    pub cover_image: String,
    pub country: String,
    /// Discogs sends the year as a string.
    pub year: String,
    pub format: Vec<String>,
    pub label: Vec<String>,
    pub genre: Vec<String>,
    pub style: Vec<String>,
    pub barcode: Vec<String>,
    pub catno: String,
    pub master_id: Option<u64>,
    pub master_url: Option<String>,
    pub community: SearchCommunity,
    pub resource_url: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Search {
    pub pagination: Page,
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_contain_only_set_fields() {
        let request = SearchRequest::new("nevermind")
            .search_type(SearchType::Release)
            .artist("Nirvana")
            .per_page(5);
        assert_eq!(
            request.params(),
            vec![
                ("q", "nevermind".to_string()),
                ("type", "release".to_string()),
                ("artist", "Nirvana".to_string()),
                ("per_page", "5".to_string()),
            ]
        );
    }

    #[test]
    fn default_request_has_no_params() {
        assert!(SearchRequest::default().params().is_empty());
    }
}
