//! Common digest package used across the OCI ecosystem, as described in the
//! oci-image spec.
//!
//! See https://github.com/opencontainers/image-spec/blob/master/descriptor.md#digests for details.
//!
//! Inspired by https://github.com/opencontainers/go-digest

#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod algorithms;
mod digest;
mod error;
mod validator;

#[cfg(feature = "serde")]
mod serde_impl;

pub use algorithms::Algorithm;
pub use digest::Digest;
pub use error::DigestParseError;
pub use validator::Validator;
