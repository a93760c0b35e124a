//! Utility helpers: JSON/YAML serializers and document loading.
pub mod serialization;

pub use serialization::{
    DocumentFormat, FileSerializer, FileUtils, JsonSerializer, Serializer, YamlSerializer,
};
