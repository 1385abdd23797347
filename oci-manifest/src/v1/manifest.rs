use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::annotations::Annotations;
use super::media_type;
use super::{ArtifactType, Config, Descriptor, ManifestUpdate, SCHEMA_VERSION};
use crate::error::DecodeError;
use crate::MediaType;

/// Manifest provides `application/vnd.oci.image.manifest.v1+json` mediatype
/// structure when marshalled to JSON.
///
/// Manifests are immutable values: every `with_*` method (and
/// [`Manifest::update`]) returns a new manifest, leaving the original as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    #[serde(rename = "schemaVersion")]
    schema_version: i32,

    #[serde(rename = "mediaType")]
    media_type: String,

    /// Explicit artifact type, as it appears on the wire.
    #[serde(rename = "artifactType", skip_serializing_if = "Option::is_none")]
    artifact_type: Option<String>,

    /// Address of the manifest itself. Only known once the manifest has been
    /// pushed, and never part of the manifest's content.
    #[serde(skip)]
    descriptor: Option<Descriptor>,

    #[serde(rename = "config", skip_serializing_if = "Option::is_none")]
    config: Option<Config>,

    #[serde(rename = "subject", skip_serializing_if = "Option::is_none")]
    subject: Option<Descriptor>,

    #[serde(rename = "layers")]
    layers: Vec<Descriptor>,

    #[serde(rename = "annotations", skip_serializing_if = "Annotations::is_empty")]
    annotations: Annotations,
}

impl MediaType for Manifest {
    const MEDIA_TYPE: &'static str = media_type::IMAGE_MANIFEST;
    const SIMILAR_MEDIA_TYPES: &'static [&'static str] = &[
        media_type::DOCKER_MANIFEST_V2,
        media_type::ARTIFACT_MANIFEST,
    ];
}

impl Manifest {
    /// The canonical empty manifest: no layers, the empty config, and the
    /// descriptor of the empty JSON object.
    pub fn empty() -> Manifest {
        Manifest {
            schema_version: SCHEMA_VERSION,
            media_type: media_type::IMAGE_MANIFEST.to_string(),
            artifact_type: None,
            descriptor: Some(Descriptor::new(
                media_type::EMPTY,
                media_type::empty_json_digest(),
                media_type::EMPTY_JSON_SIZE,
            )),
            config: Some(Config::empty()),
            subject: None,
            layers: Vec::new(),
            annotations: Annotations::new(),
        }
    }

    pub fn schema_version(&self) -> i32 {
        self.schema_version
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The effective artifact type of the manifest: the explicit
    /// `artifactType` if set, otherwise one inferred from the config.
    ///
    /// Re-derived on every call.
    pub fn artifact_type(&self) -> ArtifactType {
        ArtifactType::resolve(self.artifact_type.as_deref(), self.config.as_ref())
    }

    /// The `artifactType` field, if it was set explicitly.
    pub fn explicit_artifact_type(&self) -> Option<&str> {
        self.artifact_type.as_deref()
    }

    pub fn descriptor(&self) -> Option<&Descriptor> {
        self.descriptor.as_ref()
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn subject(&self) -> Option<&Descriptor> {
        self.subject.as_ref()
    }

    pub fn layers(&self) -> &[Descriptor] {
        &self.layers
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Return a new manifest with the fields in `update` replaced.
    ///
    /// Unless the update sets the artifact type, the new manifest keeps the
    /// explicit `artifactType` of this one (and nothing else: an artifact type
    /// inferred from the config is never written back as explicit).
    pub fn update(&self, update: ManifestUpdate) -> Manifest {
        trace!("updating manifest fields {:?}", update.fields());

        let ManifestUpdate {
            artifact_type,
            descriptor,
            config,
            subject,
            layers,
            annotations,
        } = update;

        Manifest {
            schema_version: self.schema_version,
            media_type: self.media_type.clone(),
            artifact_type: match artifact_type {
                Some(artifact_type) => artifact_type.map(ArtifactType::into_media_type),
                None => self.top_level_artifact_type(),
            },
            descriptor: descriptor.unwrap_or_else(|| self.descriptor.clone()),
            config: config.unwrap_or_else(|| self.config.clone()),
            subject: subject.unwrap_or_else(|| self.subject.clone()),
            layers: layers.unwrap_or_else(|| self.layers.clone()),
            annotations: annotations.unwrap_or_else(|| self.annotations.clone()),
        }
    }

    pub fn with_artifact_type(&self, artifact_type: impl Into<Option<ArtifactType>>) -> Manifest {
        self.update(ManifestUpdate::new().artifact_type(artifact_type))
    }

    pub fn with_layers(&self, layers: impl IntoIterator<Item = Descriptor>) -> Manifest {
        self.update(ManifestUpdate::new().layers(layers))
    }

    pub fn with_config(&self, config: impl Into<Option<Config>>) -> Manifest {
        self.update(ManifestUpdate::new().config(config))
    }

    pub fn with_subject(&self, subject: impl Into<Option<Descriptor>>) -> Manifest {
        self.update(ManifestUpdate::new().subject(subject))
    }

    pub fn with_annotations<I, K, V>(&self, annotations: I) -> Manifest
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.update(ManifestUpdate::new().annotations(annotations))
    }

    pub fn with_descriptor(&self, descriptor: impl Into<Option<Descriptor>>) -> Manifest {
        self.update(ManifestUpdate::new().descriptor(descriptor))
    }

    fn top_level_artifact_type(&self) -> Option<String> {
        self.artifact_type.clone()
    }

    /// Encode the manifest as compact JSON. The same manifest always encodes
    /// to the same string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Encode the manifest as compact JSON bytes, e.g: for digesting or
    /// pushing to a registry.
    pub fn to_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_json(json: &str) -> Result<Manifest, DecodeError> {
        let value = serde_json::from_str(json).map_err(DecodeError::Malformed)?;
        Manifest::from_value(value)
    }

    pub fn from_slice(json: &[u8]) -> Result<Manifest, DecodeError> {
        let value = serde_json::from_slice(json).map_err(DecodeError::Malformed)?;
        Manifest::from_value(value)
    }

    /// Decode a manifest from a parsed JSON document.
    ///
    /// Unknown fields are ignored, and `null` is treated as absent for every
    /// optional field. The decoded manifest has no descriptor.
    pub fn from_value(value: Value) -> Result<Manifest, DecodeError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => return Err(DecodeError::NotAnObject),
        };

        let schema_version = optional_field(&mut fields, "schemaVersion")?
            .ok_or(DecodeError::MissingField("schemaVersion"))?;
        let media_type = optional_field::<String>(&mut fields, "mediaType")?
            .unwrap_or_else(|| media_type::IMAGE_MANIFEST.to_string());
        let artifact_type = optional_field(&mut fields, "artifactType")?;
        let config = optional_field(&mut fields, "config")?;
        let subject = optional_field(&mut fields, "subject")?;
        let layers = layers_field(&mut fields)?;
        let annotations = optional_field(&mut fields, "annotations")?.unwrap_or_default();

        if !Manifest::accepts(&media_type) {
            debug!("decoding manifest with unrecognized media type {}", media_type);
        }
        if !fields.is_empty() {
            trace!(
                "ignoring unknown manifest fields {:?}",
                fields.keys().collect::<Vec<_>>()
            );
        }

        let manifest = Manifest {
            schema_version,
            media_type,
            artifact_type,
            descriptor: None,
            config,
            subject,
            layers,
            annotations,
        };
        debug!(
            "decoded manifest with {} layer(s), artifact type {}",
            manifest.layers.len(),
            manifest.artifact_type()
        );
        Ok(manifest)
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Manifest::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn optional_field<T>(fields: &mut Map<String, Value>, name: &str) -> Result<Option<T>, DecodeError>
where
    T: DeserializeOwned,
{
    match fields.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| DecodeError::InvalidField {
                field: name.to_string(),
                source,
            }),
    }
}

/// Layers are decoded one at a time, so errors can point at the offending
/// layer.
fn layers_field(fields: &mut Map<String, Value>) -> Result<Vec<Descriptor>, DecodeError> {
    let layers = match optional_field::<Vec<Value>>(fields, "layers")? {
        Some(layers) => layers,
        None => return Ok(Vec::new()),
    };

    layers
        .into_iter()
        .enumerate()
        .map(|(i, layer)| {
            serde_json::from_value(layer).map_err(|source| DecodeError::InvalidField {
                field: format!("layers[{}]", i),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn layer(content: &str) -> Descriptor {
        Descriptor::from_content(media_type::IMAGE_LAYER, content.as_bytes())
    }

    #[test]
    fn empty_manifest() {
        let manifest = Manifest::empty();
        assert_eq!(2, manifest.schema_version());
        assert_eq!(media_type::IMAGE_MANIFEST, manifest.media_type());
        assert_eq!(None, manifest.explicit_artifact_type());
        assert_eq!(Some(&Config::empty()), manifest.config());
        assert_eq!(None, manifest.subject());
        assert!(manifest.layers().is_empty());
        assert!(manifest.annotations().is_empty());

        let descriptor = manifest.descriptor().unwrap();
        assert_eq!(media_type::EMPTY, descriptor.media_type);
        assert_eq!(media_type::EMPTY_JSON_DIGEST, descriptor.digest.as_str());
        assert_eq!(2, descriptor.size);
    }

    #[test]
    fn update_without_overrides_is_identity() {
        let manifest = Manifest::empty()
            .with_artifact_type(ArtifactType::from("application/x.test"))
            .with_layers(vec![layer("a")]);
        assert_eq!(manifest, manifest.update(ManifestUpdate::new()));
    }

    #[test]
    fn update_can_clear_fields() {
        let manifest = Manifest::empty()
            .with_subject(layer("subject"))
            .update(ManifestUpdate::new().config(None).subject(None).descriptor(None));
        assert_eq!(None, manifest.config());
        assert_eq!(None, manifest.subject());
        assert_eq!(None, manifest.descriptor());
        assert!(manifest.artifact_type().is_unknown());
    }

    #[test]
    fn update_several_fields_at_once() {
        let manifest = Manifest::empty().update(
            ManifestUpdate::new()
                .layers(vec![layer("a"), layer("b")])
                .annotations([("k", "v")]),
        );
        assert_eq!(vec![layer("a"), layer("b")], manifest.layers());
        assert_eq!(Some("v"), manifest.annotation("k"));
        assert_eq!(Manifest::empty().descriptor(), manifest.descriptor());
    }

    #[test]
    fn null_optional_fields_are_absent() {
        let manifest = Manifest::from_value(json!({
            "schemaVersion": 2,
            "mediaType": null,
            "artifactType": null,
            "config": null,
            "subject": null,
            "layers": null,
            "annotations": null,
        }))
        .unwrap();
        assert_eq!(media_type::IMAGE_MANIFEST, manifest.media_type());
        assert_eq!(None, manifest.explicit_artifact_type());
        assert_eq!(None, manifest.config());
        assert!(manifest.layers().is_empty());
        assert!(manifest.annotations().is_empty());
    }

    #[test]
    fn invalid_layer_is_named() {
        let err = Manifest::from_value(json!({
            "schemaVersion": 2,
            "layers": [
                { "mediaType": media_type::IMAGE_LAYER, "digest": media_type::EMPTY_JSON_DIGEST, "size": 2 },
                { "mediaType": media_type::IMAGE_LAYER, "digest": "sha256:bad", "size": 2 },
            ],
        }))
        .unwrap_err();
        assert_matches!(err, DecodeError::InvalidField { .. });
        assert_eq!(Some("layers[1]"), err.field());
    }

    #[test]
    fn accepts_compatible_media_types() {
        assert!(Manifest::accepts(media_type::IMAGE_MANIFEST));
        assert!(Manifest::accepts(media_type::DOCKER_MANIFEST_V2));
        assert!(Manifest::accepts(media_type::ARTIFACT_MANIFEST));
        assert!(!Manifest::accepts(media_type::IMAGE_CONFIG));
    }
}
