//! Canonical book model and normalization of catalog payloads.

mod normalize;
mod raw;
mod types;

pub use normalize::normalize;
pub use raw::{RawIdentifier, RawImageLinks, RawSearchResponse, RawVolume, RawVolumeInfo};
pub use types::{BestsellerInfo, Book, UNKNOWN_AUTHOR, UNKNOWN_TITLE};
