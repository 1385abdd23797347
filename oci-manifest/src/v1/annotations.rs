use std::collections::BTreeMap;

/// A JSON field that contains arbitrary metadata.
///
/// Both keys and values are strings, keys are unique, and the value MAY be an
/// empty string. An empty map is equivalent to an absent one.
///
/// Backed by a [`BTreeMap`] so keys are always emitted in the same order,
/// which keeps encoded manifests (and therefore their digests) stable.
pub type Annotations = BTreeMap<String, String>;

/// Copies caller-provided key/value pairs into a new, owned map.
pub(crate) fn collect<I, K, V>(annotations: I) -> Annotations
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    annotations
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

pub mod key {
    /// The date and time on which the artifact was built (date-time string as
    /// defined by RFC 3339).
    pub const CREATED: &str = "org.opencontainers.image.created";

    /// The contact details of the people or organization responsible for the
    /// artifact (freeform string).
    pub const AUTHORS: &str = "org.opencontainers.image.authors";

    /// The URL to get source code for building the artifact.
    pub const SOURCE: &str = "org.opencontainers.image.source";

    /// The source control revision identifier for the packaged software.
    pub const REVISION: &str = "org.opencontainers.image.revision";

    /// The version of the packaged software.
    pub const VERSION: &str = "org.opencontainers.image.version";

    /// The human-readable title of the artifact. On layers, the file name the
    /// blob was pushed from.
    pub const TITLE: &str = "org.opencontainers.image.title";

    /// The human-readable description of the software packaged in the
    /// artifact.
    pub const DESCRIPTION: &str = "org.opencontainers.image.description";
}
