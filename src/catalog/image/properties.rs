use serde::{Deserialize, Serialize};

/// Compression applied to an image set. Leaving it unset inherits the
/// catalog default, which is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compression {
    Automatic,
    Lossless,
    Lossy,
    #[serde(rename = "gpu-optimized-best")]
    GpuOptimizedBest,
    #[serde(rename = "gpu-optimized-smallest")]
    GpuOptimizedSmallest,
}

/// How the image is rendered. Unset lets Xcode decide from the asset name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderingIntent {
    Original,
    Template,
}

/// `properties` block of an image set. Omitted entirely when empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetProperties {
    #[serde(
        rename = "compression-type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    compression: Option<Compression>,
    #[serde(
        rename = "preserves-vector-representation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    preserves_vector: Option<bool>,
    #[serde(
        rename = "template-rendering-intent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    rendering: Option<RenderingIntent>,
}

impl AssetProperties {
    /// `None` inherits the compression from the catalog.
    pub fn compression(&mut self, compression: Option<Compression>) -> &mut Self {
        self.compression = compression;
        self
    }

    /// Keeps the vector data of PDF sources.
    pub fn preserve_vector_data(&mut self, preserve: bool) -> &mut Self {
        self.preserves_vector = Some(preserve);
        self
    }

    /// `None` restores the default behavior.
    pub fn rendering(&mut self, intent: Option<RenderingIntent>) -> &mut Self {
        self.rendering = intent;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.compression.is_none() && self.preserves_vector.is_none() && self.rendering.is_none()
    }
}
