use oci_digest::{Algorithm, Digest};
use serde::{Deserialize, Serialize};

use super::annotations::{key, Annotations};

/// Descriptor describes the disposition of targeted content.
/// This structure provides `application/vnd.oci.descriptor.v1+json` mediatype
/// when marshalled to JSON.
///
/// Used for the layers of a manifest, its subject, and the manifest's own
/// address once it has been pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// MediaType is the media type of the object this schema refers to.
    #[serde(rename = "mediaType")]
    pub media_type: String,

    /// ArtifactType is the IANA media type of the artifact this descriptor
    /// refers to, when it refers to a manifest.
    #[serde(
        rename = "artifactType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub artifact_type: Option<String>,

    /// Digest is the digest of the targeted content.
    #[serde(rename = "digest")]
    pub digest: Digest,

    /// Size specifies the size in bytes of the blob.
    #[serde(rename = "size")]
    pub size: u64,

    /// URLs specifies a list of URLs from which this object MAY be downloaded
    #[serde(rename = "urls", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,

    /// Annotations contains arbitrary metadata relating to the targeted
    /// content.
    #[serde(
        rename = "annotations",
        default,
        skip_serializing_if = "Annotations::is_empty"
    )]
    pub annotations: Annotations,

    /// Data is the base64 encoded content of the blob, embedded in the
    /// descriptor.
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl Descriptor {
    pub fn new(media_type: impl Into<String>, digest: Digest, size: u64) -> Descriptor {
        Descriptor {
            media_type: media_type.into(),
            artifact_type: None,
            digest,
            size,
            urls: Vec::new(),
            annotations: Annotations::new(),
            data: None,
        }
    }

    /// Describe `content` (digested with sha256).
    pub fn from_content(media_type: impl Into<String>, content: &[u8]) -> Descriptor {
        Descriptor::new(
            media_type,
            Digest::compute(Algorithm::Sha256, content),
            content.len() as u64,
        )
    }

    /// Add (or replace) an annotation
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), val.into());
        self
    }

    /// The file name the blob was pushed from, if any.
    pub fn title(&self) -> Option<&str> {
        self.annotations.get(key::TITLE).map(String::as_str)
    }
}
