use oci_digest::{Algorithm, Digest};
use serde::{Deserialize, Serialize};

use super::annotations::Annotations;
use super::media_type;

/// Config references the configuration object of an artifact, by digest.
///
/// Unlike a plain [`Descriptor`](super::Descriptor), the media type of a
/// config is optional: older artifacts omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// MediaType is the media type of the config blob.
    #[serde(rename = "mediaType", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Digest is the digest of the config blob.
    #[serde(rename = "digest")]
    pub digest: Digest,

    /// Size specifies the size in bytes of the config blob.
    #[serde(rename = "size")]
    pub size: u64,

    /// Data is the base64 encoded config blob, embedded in the descriptor.
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Annotations contains arbitrary metadata relating to the config.
    #[serde(
        rename = "annotations",
        default,
        skip_serializing_if = "Annotations::is_empty"
    )]
    pub annotations: Annotations,
}

impl Config {
    pub fn new(media_type: impl Into<String>, digest: Digest, size: u64) -> Config {
        Config {
            media_type: Some(media_type.into()),
            digest,
            size,
            data: None,
            annotations: Annotations::new(),
        }
    }

    /// The config used by artifacts that have no configuration: the empty
    /// JSON object `{}`, embedded.
    pub fn empty() -> Config {
        Config {
            media_type: Some(media_type::EMPTY.to_string()),
            digest: media_type::empty_json_digest(),
            size: media_type::EMPTY_JSON_SIZE,
            data: Some(media_type::EMPTY_JSON_DATA.to_string()),
            annotations: Annotations::new(),
        }
    }

    /// Describe `content` (digested with sha256), embedding it in the config
    /// descriptor.
    pub fn from_content(media_type: impl Into<String>, content: &[u8]) -> Config {
        Config {
            data: Some(base64::encode(content)),
            ..Config::new(
                media_type,
                Digest::compute(Algorithm::Sha256, content),
                content.len() as u64,
            )
        }
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Decode the embedded config blob, if there is one.
    pub fn data_bytes(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.data.as_ref().map(base64::decode)
    }

    /// Returns true if the embedded config blob matches the config's size and
    /// digest. Returns false if there is no embedded blob.
    pub fn verify_data(&self) -> bool {
        match self.data_bytes() {
            Some(Ok(bytes)) => {
                let mut validator = self.digest.new_validator();
                validator.input(&bytes);
                bytes.len() as u64 == self.size && validator.validate()
            }
            Some(Err(_)) | None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_config() {
        let config = Config::empty();
        assert_eq!(Some(media_type::EMPTY), config.media_type());
        assert_eq!(b"{}".to_vec(), config.data_bytes().unwrap().unwrap());
        assert!(config.verify_data());
        assert_eq!(Config::from_content(media_type::EMPTY, b"{}"), config);
    }

    #[test]
    fn verify_data_detects_tampering() {
        let mut config = Config::from_content(media_type::IMAGE_CONFIG, br#"{"os":"linux"}"#);
        assert!(config.verify_data());

        config.data = Some(base64::encode(br#"{"os":"windows"}"#));
        assert!(!config.verify_data());

        config.data = Some("not base64!".to_string());
        assert!(!config.verify_data());

        config.data = None;
        assert!(!config.verify_data());
    }

    #[test]
    fn media_type_is_optional() {
        let config: Config = serde_json::from_value(json!({
            "digest": media_type::EMPTY_JSON_DIGEST,
            "size": 2,
        }))
        .unwrap();
        assert_eq!(None, config.media_type());
        assert_eq!(
            json!({ "digest": media_type::EMPTY_JSON_DIGEST, "size": 2 }),
            serde_json::to_value(&config).unwrap()
        );
    }
}
