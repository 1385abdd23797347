use std::fmt;
use std::str::FromStr;

use sha2::digest::DynDigest;

use crate::algorithms::Algorithm;
use crate::error::DigestParseError;
use crate::validator::Validator;

/// A cheap wrapper around a raw String that ensures it's contents is formatted
/// as a valid OCI digest string. i.e: the underlying string is guaranteed to
/// be of the form `<algorithm>:<hex-digest>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    string: String,
}

impl Digest {
    /// Digest `data` with the given algorithm.
    pub fn compute(algorithm: Algorithm, data: &[u8]) -> Digest {
        let mut digest = algorithm.new_boxed_digest();
        digest.update(data);
        Digest {
            algorithm,
            string: format!("{}:{}", algorithm, hex::encode(digest.finalize())),
        }
    }

    /// Return a new validator for this digest
    pub fn new_validator(&self) -> Validator {
        Validator::new(self)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The hex-encoded portion of the digest (i.e: everything after the `:`)
    pub fn hex(&self) -> &str {
        // the algorithm prefix is always ascii, and followed by a single ':'
        &self.string[self.algorithm.as_str().len() + 1..]
    }

    /// View the digest as a raw str
    pub fn as_str(&self) -> &str {
        &self.string
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.string
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Digest, Self::Err> {
        let (algorithm, digest_str) = s.split_once(':').ok_or(DigestParseError::InvalidFormat)?;
        let algorithm = algorithm.parse::<Algorithm>()?;

        if digest_str.is_empty()
            || digest_str
                .chars()
                .any(|c| !(c.is_ascii_digit() || ('a'..='f').contains(&c)))
        {
            return Err(DigestParseError::InvalidFormat);
        }

        // each byte takes 2 chars when represented in a hex string
        if digest_str.len() != algorithm.digest_len() * 2 {
            return Err(DigestParseError::InvalidLength);
        }

        Ok(Digest {
            algorithm,
            string: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use matches::assert_matches;
    use test_case::test_case;

    use super::*;

    const EMPTY_JSON: &str =
        "sha256:44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a";

    #[test]
    fn parse_valid() {
        let digest = EMPTY_JSON.parse::<Digest>().unwrap();
        assert_matches!(digest.algorithm(), Algorithm::Sha256);
        assert_eq!(
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a",
            digest.hex()
        );
        assert_eq!(EMPTY_JSON, digest.to_string());
    }

    #[test_case("", DigestParseError::InvalidFormat; "empty")]
    #[test_case("sha256", DigestParseError::InvalidFormat; "no separator")]
    #[test_case("sha256:", DigestParseError::InvalidFormat; "no hex")]
    #[test_case("md5:d41d8cd98f00b204e9800998ecf8427e", DigestParseError::Unsupported; "unsupported algorithm")]
    #[test_case("sha256:44136FA355B3678A1146AD16F7E8649E94FB4FC21FE77E8310C060F61CAAFF8A", DigestParseError::InvalidFormat; "uppercase hex")]
    #[test_case("sha256:44136fa355b3678a:1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a", DigestParseError::InvalidFormat; "extra separator")]
    #[test_case("sha256:abcd", DigestParseError::InvalidLength; "too short")]
    #[test_case("sha512:44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a", DigestParseError::InvalidLength; "wrong length for algorithm")]
    fn parse_invalid(input: &str, expected: DigestParseError) {
        assert_eq!(Err(expected), input.parse::<Digest>());
    }

    #[test]
    fn compute_empty_json_object() {
        let digest = Digest::compute(Algorithm::Sha256, b"{}");
        assert_eq!(EMPTY_JSON, digest.as_str());
        assert_eq!(digest, EMPTY_JSON.parse().unwrap());
    }

    #[test]
    fn compute_other_algorithms_round_trip() {
        for algorithm in [Algorithm::Sha384, Algorithm::Sha512] {
            let digest = Digest::compute(algorithm, b"hello");
            assert_eq!(algorithm.digest_len() * 2, digest.hex().len());
            assert_eq!(digest, digest.as_str().parse().unwrap());
        }
    }
}
