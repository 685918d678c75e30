// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::common::{ArtistSource, Format, LabelSource, Page};

/// A folder in a user's collection. Folder 0 is "All", folder 1 is "Uncategorized".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    pub id: u64,
    pub count: u32,
    pub name: String,
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionFolders {
    pub folders: Vec<Folder>,
}

/// Summary of a release as embedded in collection listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInformation {
    pub id: u64,
    pub master_id: u64,
    pub master_url: Option<String>,
    pub resource_url: String,
    pub thumb: String,
    pub cover_image: String,
    pub title: String,
    pub year: u32,
    pub formats: Vec<Format>,
    pub labels: Vec<LabelSource>,
    pub artists: Vec<ArtistSource>,
    pub genres: Vec<String>,
    pub styles: Vec<String>,
}

/// User-defined field value attached to a collection instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub field_id: u64,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionItemSource {
    pub id: u64,
    pub instance_id: u64,
    pub folder_id: u64,
    pub date_added: String,
    pub rating: u8,
    pub basic_information: BasicInformation,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionItems {
    pub pagination: Page,
    pub releases: Vec<CollectionItemSource>,
}

/// Estimated value of a collection, formatted in the owner's currency (e.g. "$123.45").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionValue {
    pub minimum: String,
    pub median: String,
    pub maximum: String,
}
