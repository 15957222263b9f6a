use super::source::SourceConfig;
use super::{appearance_from, devices_from};
use crate::catalog::{Compression, Gamut, ImageDefinition, ImageSetBuilder, RenderingIntent};
use crate::error::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `[[image]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImageSetConfig {
    /// Set name, used as `<name>.imageset` and as the file name prefix
    pub name: String,
    #[serde(default)]
    pub gamut: Option<String>,
    #[serde(default)]
    pub compression: Option<Compression>,
    #[serde(default)]
    pub rendering: Option<RenderingIntent>,
    #[serde(default)]
    pub preserve_vector_data: Option<bool>,
    #[serde(default, rename = "variant")]
    pub variants: Vec<ImageVariantConfig>,
}

/// `[[image.variant]]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImageVariantConfig {
    /// Replaces the `universal` default when not empty
    #[serde(default)]
    pub devices: Vec<String>,
    #[serde(default)]
    pub appearances: Vec<String>,
    #[serde(flatten)]
    pub source: SourceConfig,
}

impl ImageSetConfig {
    pub fn to_builder(&self, base: &Path) -> Result<ImageSetBuilder> {
        let mut builder = ImageSetBuilder::new(&self.name);
        if let Some(gamut) = &self.gamut {
            builder.gamut(Gamut::from_token(gamut)?);
        }
        let properties = builder.properties();
        properties.compression(self.compression).rendering(self.rendering);
        if let Some(preserve) = self.preserve_vector_data {
            properties.preserve_vector_data(preserve);
        }

        for (index, variant) in self.variants.iter().enumerate() {
            variant
                .apply(builder.asset(), base)
                .with_context(|| format!("image set {} variant #{}", self.name, index))?;
        }
        Ok(builder)
    }
}

impl ImageVariantConfig {
    fn apply(&self, definition: &mut ImageDefinition, base: &Path) -> Result<()> {
        if !self.devices.is_empty() {
            definition.devices = devices_from(&self.devices)?;
        }
        if !self.appearances.is_empty() {
            definition.appearance = appearance_from(&self.appearances)?;
        }
        self.source.apply_to(&mut definition.source, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SourceLocation;
    use std::path::PathBuf;

    #[test]
    fn test_variants_and_properties() {
        let config: ImageSetConfig = toml::from_str(
            r#"
            name = "Logo"
            compression = "gpu-optimized-best"
            rendering = "template"

            [[variant]]
            devices = ["iphone", "ipad"]
            file = "art/logo.png"
            size = [120, 40]

            [[variant]]
            devices = ["iphone", "ipad"]
            appearances = ["dark"]
            url = "https://example.com/logo-dark.png"
            size = [120, 40]
            "#,
        )
        .unwrap();

        let builder = config.to_builder(Path::new("/assets")).unwrap();
        let definitions = builder.definitions();

        assert_eq!(definitions.len(), 2);
        assert_eq!(
            definitions[0].source.location(),
            Some(&SourceLocation::File(PathBuf::from("/assets/art/logo.png")))
        );
        assert_eq!(definitions[1].source.desired_size(), Some((120, 40)));
        assert_eq!(definitions[1].appearance.build().len(), 2);
    }

    #[test]
    fn test_unknown_device_names_variant() {
        let config: ImageSetConfig = toml::from_str(
            r#"
            name = "Logo"
            [[variant]]
            devices = ["toaster"]
            file = "logo.png"
            "#,
        )
        .unwrap();

        let err = config.to_builder(Path::new(".")).unwrap_err();
        assert!(err.to_string().starts_with("image set Logo variant #0: "));
    }
}
