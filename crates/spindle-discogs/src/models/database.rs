// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::common::{
    ArtistSource, Community, Company, Format, Identifier, Image, LabelSource, Page, Rating, Track,
    Video,
};

/// A specific pressing or edition of a recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub id: u64,
    pub title: String,
    pub status: String,
    pub year: u32,
    pub resource_url: String,
    pub uri: String,
    pub artists: Vec<ArtistSource>,
    pub artists_sort: String,
    pub extraartists: Vec<ArtistSource>,
    pub labels: Vec<LabelSource>,
    pub series: Vec<LabelSource>,
    pub companies: Vec<Company>,
    pub formats: Vec<Format>,
    pub format_quantity: u32,
    pub data_quality: String,
    pub community: Community,
    pub date_added: String,
    pub date_changed: String,
    pub num_for_sale: u32,
    /// Lowest marketplace price in the client's currency, if anything is for sale.
    pub lowest_price: Option<f64>,
    pub master_id: u64,
    pub master_url: Option<String>,
    pub country: String,
    pub released: String,
    pub released_formatted: String,
    pub notes: String,
    pub identifiers: Vec<Identifier>,
    pub videos: Vec<Video>,
    pub genres: Vec<String>,
    pub styles: Vec<String>,
    pub tracklist: Vec<Track>,
    pub images: Vec<Image>,
    pub thumb: String,
    pub estimated_weight: Option<u32>,
}

/// Community rating of a release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseRating {
    pub release_id: u64,
    pub rating: Rating,
}

/// A single user's rating of a release, 0 meaning unrated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseUserRating {
    pub release_id: u64,
    pub username: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub active: bool,
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub realname: String,
    pub profile: String,
    pub namevariations: Vec<String>,
    pub urls: Vec<String>,
    pub members: Vec<Member>,
    pub images: Vec<Image>,
    pub data_quality: String,
    pub releases_url: String,
    pub resource_url: String,
    pub uri: String,
}

/// Entry in an artist or label discography.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSource {
    pub id: u64,
    pub artist: String,
    pub catno: String,
    pub format: String,
    pub label: String,
    pub main_release: Option<u64>,
    pub role: String,
    pub status: String,
    pub thumb: String,
    pub title: String,
    #[serde(rename = "type")]
    pub release_type: String,
    pub year: Option<u32>,
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistReleases {
    pub pagination: Page,
    pub releases: Vec<ReleaseSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sublabel {
    pub id: u64,
    pub name: String,
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub id: u64,
    pub name: String,
    pub profile: String,
    pub contact_info: String,
    pub parent_label: Option<Sublabel>,
    pub sublabels: Vec<Sublabel>,
    pub urls: Vec<String>,
    pub images: Vec<Image>,
    pub data_quality: String,
    pub releases_url: String,
    pub resource_url: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelReleases {
    pub pagination: Page,
    pub releases: Vec<ReleaseSource>,
}

/// The canonical work grouping every release of the same recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Master {
    pub id: u64,
    pub main_release: u64,
    pub main_release_url: String,
    pub most_recent_release: u64,
    pub most_recent_release_url: String,
    pub title: String,
    pub year: u32,
    pub artists: Vec<ArtistSource>,
    pub genres: Vec<String>,
    pub styles: Vec<String>,
    pub images: Vec<Image>,
    pub tracklist: Vec<Track>,
    pub videos: Vec<Video>,
    pub num_for_sale: u32,
    pub lowest_price: Option<f64>,
    pub data_quality: String,
    pub versions_url: String,
    pub resource_url: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    pub id: u64,
    pub title: String,
    pub label: String,
    pub country: String,
    pub catno: String,
    pub format: String,
    pub major_formats: Vec<String>,
    pub released: String,
    pub status: String,
    pub thumb: String,
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterVersions {
    pub pagination: Page,
    pub versions: Vec<Version>,
}
