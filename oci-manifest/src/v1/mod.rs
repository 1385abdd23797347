pub mod annotations;
pub mod media_type;

mod artifact_type;
mod config;
mod descriptor;
mod manifest;
mod update;

pub use annotations::Annotations;
pub use artifact_type::ArtifactType;
pub use config::Config;
pub use descriptor::Descriptor;
pub use manifest::Manifest;
pub use update::ManifestUpdate;

/// Every manifest produced by this crate carries `.schemaVersion = 2`
pub const SCHEMA_VERSION: i32 = 2;
