//! Media types referenced by OCI manifests.

use oci_digest::Digest;

/// Media type of an OCI image manifest.
pub const IMAGE_MANIFEST: &str = "application/vnd.oci.image.manifest.v1+json";

/// Media type of the (withdrawn) OCI artifact manifest. Registries may still
/// serve documents labelled with it.
pub const ARTIFACT_MANIFEST: &str = "application/vnd.oci.artifact.manifest.v1+json";

/// Docker's manifest media type, structurally compatible with
/// [`IMAGE_MANIFEST`].
pub const DOCKER_MANIFEST_V2: &str = "application/vnd.docker.distribution.manifest.v2+json";

/// Media type of an OCI image config blob.
pub const IMAGE_CONFIG: &str = "application/vnd.oci.image.config.v1+json";

/// Media type of an uncompressed layer tarball.
pub const IMAGE_LAYER: &str = "application/vnd.oci.image.layer.v1.tar";

/// Media type of a gzip compressed layer tarball.
pub const IMAGE_LAYER_GZIP: &str = "application/vnd.oci.image.layer.v1.tar+gzip";

/// Media type of the empty JSON object `{}`. Used as the config of artifacts
/// which have no configuration.
pub const EMPTY: &str = "application/vnd.oci.empty.v1+json";

/// Artifact type reported for artifacts that don't declare one.
pub const DEFAULT_ARTIFACT: &str = "application/vnd.unknown.artifact.v1";

/// Digest of the empty JSON object `{}`, as defined by the OCI image spec.
pub const EMPTY_JSON_DIGEST: &str =
    "sha256:44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a";

/// Size (in bytes) of the empty JSON object `{}`.
pub const EMPTY_JSON_SIZE: u64 = 2;

/// Base64 encoding of the empty JSON object `{}`.
pub const EMPTY_JSON_DATA: &str = "e30=";

pub(crate) fn empty_json_digest() -> Digest {
    EMPTY_JSON_DIGEST
        .parse()
        .expect("EMPTY_JSON_DIGEST should always be a well-formed sha256 digest")
}
