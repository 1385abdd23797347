//! Types and constants describing OCI image manifests, as used by registry
//! clients to address, link, and classify artifacts.
//!
//! See https://github.com/opencontainers/image-spec/blob/main/manifest.md

#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod error;
pub mod v1;

pub use error::DecodeError;

/// Utility trait for associating Structs with media types
pub trait MediaType {
    /// OCI spec media type
    const MEDIA_TYPE: &'static str;
    /// Compatible media types (can be empty)
    const SIMILAR_MEDIA_TYPES: &'static [&'static str];

    /// Returns true if `media_type` is the OCI media type, or one of the
    /// compatible media types.
    fn accepts(media_type: &str) -> bool {
        media_type == Self::MEDIA_TYPE || Self::SIMILAR_MEDIA_TYPES.contains(&media_type)
    }
}
