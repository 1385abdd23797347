#![allow(dead_code)]

use oci_manifest::v1::annotations::key;
use oci_manifest::v1::{media_type, ArtifactType, Config, Descriptor, Manifest};

pub const SIGNATURE_TYPE: &str = "application/vnd.cncf.notary.signature";
pub const SBOM_CONFIG_TYPE: &str = "application/vnd.example.sbom.config.v1+json";

/// A file layer, as pushed by `oras push <name>`
pub fn file_layer(name: &str, content: &str) -> Descriptor {
    Descriptor::from_content(media_type::IMAGE_LAYER, content.as_bytes())
        .with_annotation(key::TITLE, name)
}

pub fn sbom_config() -> Config {
    Config::from_content(SBOM_CONFIG_TYPE, br#"{"format":"spdx"}"#)
}

pub fn image_subject() -> Descriptor {
    Descriptor::from_content(media_type::IMAGE_MANIFEST, br#"{"schemaVersion":2}"#)
}

/// A manifest with every field populated (except the descriptor)
pub fn signature_manifest() -> Manifest {
    Manifest::empty()
        .with_descriptor(None)
        .with_artifact_type(ArtifactType::from(SIGNATURE_TYPE))
        .with_subject(image_subject())
        .with_layers(vec![
            file_layer("sig-1", "first"),
            file_layer("sig-2", "second"),
        ])
        .with_annotations([(key::CREATED, "2024-01-01T00:00:00Z")])
}
