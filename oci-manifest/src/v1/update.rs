use super::annotations::{self, Annotations};
use super::{ArtifactType, Config, Descriptor};

/// A sparse set of field overrides, applied to an existing manifest with
/// [`Manifest::update`](super::Manifest::update).
///
/// Fields that aren't set are carried over from the manifest being updated.
/// For the optional fields, setting `None` clears the field.
///
/// ```
/// use oci_manifest::v1::{ArtifactType, Manifest, ManifestUpdate};
///
/// let manifest = Manifest::empty().update(
///     ManifestUpdate::new()
///         .artifact_type(ArtifactType::from("application/vnd.example.sbom"))
///         .annotations([("org.opencontainers.image.title", "sbom")]),
/// );
/// assert_eq!(manifest.artifact_type(), "application/vnd.example.sbom");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ManifestUpdate {
    pub(super) artifact_type: Option<Option<ArtifactType>>,
    pub(super) descriptor: Option<Option<Descriptor>>,
    pub(super) config: Option<Option<Config>>,
    pub(super) subject: Option<Option<Descriptor>>,
    pub(super) layers: Option<Vec<Descriptor>>,
    pub(super) annotations: Option<Annotations>,
}

impl ManifestUpdate {
    pub fn new() -> ManifestUpdate {
        ManifestUpdate::default()
    }

    /// Set (or clear) the explicit artifact type
    #[must_use]
    pub fn artifact_type(mut self, artifact_type: impl Into<Option<ArtifactType>>) -> Self {
        self.artifact_type = Some(artifact_type.into());
        self
    }

    /// Set (or clear) the descriptor of the manifest itself
    #[must_use]
    pub fn descriptor(mut self, descriptor: impl Into<Option<Descriptor>>) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }

    #[must_use]
    pub fn config(mut self, config: impl Into<Option<Config>>) -> Self {
        self.config = Some(config.into());
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<Option<Descriptor>>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Replace the layers. Order is preserved.
    #[must_use]
    pub fn layers(mut self, layers: impl IntoIterator<Item = Descriptor>) -> Self {
        self.layers = Some(layers.into_iter().collect());
        self
    }

    /// Replace the annotations. The pairs are copied into a map owned by the
    /// update.
    #[must_use]
    pub fn annotations<I, K, V>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.annotations = Some(annotations::collect(annotations));
        self
    }

    /// Names (as they appear in JSON) of the fields this update overrides.
    pub fn fields(&self) -> Vec<&'static str> {
        [
            ("artifactType", self.artifact_type.is_some()),
            ("descriptor", self.descriptor.is_some()),
            ("config", self.config.is_some()),
            ("subject", self.subject.is_some()),
            ("layers", self.layers.is_some()),
            ("annotations", self.annotations.is_some()),
        ]
        .iter()
        .filter_map(|&(name, set)| if set { Some(name) } else { None })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update() {
        let update = ManifestUpdate::new();
        assert!(update.is_empty());
        assert!(update.fields().is_empty());
    }

    #[test]
    fn clearing_counts_as_an_override() {
        let update = ManifestUpdate::new().subject(None).artifact_type(None);
        assert!(!update.is_empty());
        assert_eq!(vec!["artifactType", "subject"], update.fields());
        assert_eq!(Some(None), update.subject);
    }

    #[test]
    fn annotations_are_copied() {
        let mut source = vec![("k".to_string(), "v".to_string())];
        let update = ManifestUpdate::new().annotations(source.iter().cloned());
        source[0].1 = "changed".to_string();

        assert_eq!(
            Some("v"),
            update
                .annotations
                .as_ref()
                .and_then(|a| a.get("k"))
                .map(String::as_str)
        );
    }
}
