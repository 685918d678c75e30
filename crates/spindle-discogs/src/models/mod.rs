// SPDX-License-Identifier: GPL-3.0-or-later

//! Response and request shapes for the Discogs endpoints.

mod collection;
mod common;
mod database;
mod marketplace;
mod search;

pub use collection::{
    BasicInformation, CollectionFolders, CollectionItemSource, CollectionItems, CollectionValue,
    Folder, Note,
};
pub use common::{
    ArtistSource, Community, Company, Contributor, Format, Identifier, Image, LabelSource, Page,
    PageUrls, Pagination, Price, Rating, SortOrder, Track, Video,
};
pub use database::{
    Artist, ArtistReleases, Label, LabelReleases, Master, MasterVersions, Member, Release,
    ReleaseRating, ReleaseSource, ReleaseUserRating, Sublabel, Version,
};
pub use marketplace::{Listing, ListingRelease, PriceSuggestions, Seller, Stats};
pub use search::{Search, SearchCommunity, SearchRequest, SearchResult, SearchType};
