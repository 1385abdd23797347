use std::fmt;

use super::config::Config;
use super::media_type;

/// The kind of artifact a manifest represents, identified by a media type
/// (e.g: `application/vnd.cncf.notary.signature`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactType(String);

impl ArtifactType {
    pub fn new(media_type: impl Into<String>) -> ArtifactType {
        ArtifactType(media_type.into())
    }

    /// The artifact type of artifacts that don't declare one.
    pub fn unknown() -> ArtifactType {
        ArtifactType::new(media_type::DEFAULT_ARTIFACT)
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == media_type::DEFAULT_ARTIFACT
    }

    pub fn media_type(&self) -> &str {
        &self.0
    }

    pub fn into_media_type(self) -> String {
        self.0
    }

    /// Resolve the effective artifact type of a manifest.
    ///
    /// An explicit `artifactType` always wins. Otherwise the config's media
    /// type is used, falling back to [`media_type::DEFAULT_ARTIFACT`] when
    /// the config doesn't declare one. The empty config says nothing about
    /// the artifact, and neither does a missing config: both are unknown.
    pub(crate) fn resolve(explicit: Option<&str>, config: Option<&Config>) -> ArtifactType {
        if let Some(explicit) = explicit {
            return ArtifactType::new(explicit);
        }

        match config.map(Config::media_type) {
            Some(Some(media_type::EMPTY)) | None => ArtifactType::unknown(),
            Some(Some(config_type)) => ArtifactType::new(config_type),
            Some(None) => ArtifactType::new(media_type::DEFAULT_ARTIFACT),
        }
    }
}

impl Default for ArtifactType {
    fn default() -> Self {
        ArtifactType::unknown()
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArtifactType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtifactType {
    fn from(media_type: &str) -> Self {
        ArtifactType::new(media_type)
    }
}

impl From<String> for ArtifactType {
    fn from(media_type: String) -> Self {
        ArtifactType(media_type)
    }
}

impl PartialEq<str> for ArtifactType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ArtifactType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
