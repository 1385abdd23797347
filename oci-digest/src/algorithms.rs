use std::fmt;
use std::str::FromStr;

use sha2::digest::DynDigest;

use crate::error::DigestParseError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Return digest length (in bytes)
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha256 => 256 / 8,
            Algorithm::Sha384 => 384 / 8,
            Algorithm::Sha512 => 512 / 8,
        }
    }

    /// Return a new instance of a boxed digestor
    pub fn new_boxed_digest(self) -> Box<dyn DynDigest> {
        match self {
            Algorithm::Sha256 => Box::new(sha2::Sha256::default()),
            Algorithm::Sha384 => Box::new(sha2::Sha384::default()),
            Algorithm::Sha512 => Box::new(sha2::Sha512::default()),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Algorithm, Self::Err> {
        let algorithm = match s {
            "sha256" => Algorithm::Sha256,
            "sha384" => Algorithm::Sha384,
            "sha512" => Algorithm::Sha512,
            _ => return Err(DigestParseError::Unsupported),
        };
        Ok(algorithm)
    }
}
