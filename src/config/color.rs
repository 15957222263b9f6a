use super::{appearance_from, devices_from};
use crate::catalog::{ColorSetBuilder, ColorSpace, Gamut};
use crate::error::{Context, Result};
use serde::{Deserialize, Serialize};

/// `[[color]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColorSetConfig {
    /// Set name, used as `<name>.colorset`
    pub name: String,
    /// `any` or `srgb-and-display-p3`
    #[serde(default)]
    pub gamut: Option<String>,
    /// Color variants
    #[serde(default, rename = "variant")]
    pub variants: Vec<ColorVariantConfig>,
}

/// `[[color.variant]]` table. Exactly one of `hex`, `rgb`, `rgb-float` or
/// `white` gives the color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColorVariantConfig {
    /// Replaces the `universal` default when not empty
    #[serde(default)]
    pub devices: Vec<String>,
    #[serde(default)]
    pub appearances: Vec<String>,
    pub color_space: Option<String>,
    pub hex: Option<String>,
    pub rgb: Option<[i32; 3]>,
    pub rgb_float: Option<[f64; 3]>,
    pub white: Option<f64>,
    pub alpha: Option<f64>,
}

impl ColorSetConfig {
    pub fn to_builder(&self) -> Result<ColorSetBuilder> {
        let mut builder = ColorSetBuilder::new(&self.name);
        if let Some(gamut) = &self.gamut {
            builder.gamut(Gamut::from_token(gamut)?);
        }

        for (index, variant) in self.variants.iter().enumerate() {
            variant
                .apply(&mut builder)
                .with_context(|| format!("color set {} variant #{}", self.name, index))?;
        }
        Ok(builder)
    }
}

impl ColorVariantConfig {
    fn apply(&self, builder: &mut ColorSetBuilder) -> Result<()> {
        let given = [
            self.hex.is_some(),
            self.rgb.is_some(),
            self.rgb_float.is_some(),
            self.white.is_some(),
        ];
        if given.iter().filter(|set| **set).count() > 1 {
            crate::bail!("only one of hex, rgb, rgb-float or white may be given");
        }

        let definition = builder.color();
        if !self.devices.is_empty() {
            definition.devices = devices_from(&self.devices)?;
        }
        if !self.appearances.is_empty() {
            definition.appearance = appearance_from(&self.appearances)?;
        }
        if let Some(space) = &self.color_space {
            definition.color_space(ColorSpace::from_tag(space)?);
        }

        if let Some(hex) = &self.hex {
            definition.hex(hex.as_str())?;
        } else if let Some([red, green, blue]) = self.rgb {
            definition.rgb(red, green, blue)?;
        } else if let Some([red, green, blue]) = self.rgb_float {
            definition.rgb_float(red, green, blue)?;
        } else if let Some(white) = self.white {
            definition.white(white)?;
        }

        if let Some(alpha) = self.alpha {
            definition.alpha(alpha)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorValue;

    fn parse(text: &str) -> ColorSetConfig {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_variants_map_onto_definitions() {
        let config = parse(
            r##"
            name = "Brand"
            gamut = "srgb-and-display-p3"

            [[variant]]
            devices = ["universal"]
            hex = "#FF8000"

            [[variant]]
            devices = ["universal"]
            appearances = ["dark"]
            rgb-float = [0.1, 0.2, 0.3]
            alpha = 0.5
            "##,
        );

        let builder = config.to_builder().unwrap();
        let definitions = builder.definitions();
        assert_eq!(definitions.len(), 2);
        assert!(matches!(definitions[0].value(), Some(ColorValue::Hex(_))));
        assert!(matches!(
            definitions[1].value(),
            Some(ColorValue::RgbFloat { .. })
        ));
    }

    #[test]
    fn test_two_representations_rejected() {
        let config = parse(
            r#"
            name = "Brand"
            [[variant]]
            devices = ["iphone"]
            rgb = [1, 2, 3]
            white = 0.5
            "#,
        );

        let err = config.to_builder().unwrap_err();
        assert!(err.to_string().contains("variant #0"));
    }

    #[test]
    fn test_grayscale_white() {
        let config = parse(
            r#"
            name = "Gray"
            [[variant]]
            devices = ["mac"]
            color-space = "gray-gamma-22"
            white = 0.25
            "#,
        );

        let builder = config.to_builder().unwrap();
        let contents = builder.build().unwrap();
        assert_eq!(contents.colors.len(), 1);
    }

    #[test]
    fn test_devices_default_to_universal() {
        let config = parse(
            r##"
            name = "Brand"
            [[variant]]
            hex = "#FF8000"
            [[variant]]
            devices = ["iphone"]
            appearances = ["light"]
            hex = "#000000"
            "##,
        );

        let builder = config.to_builder().unwrap();
        let definitions = builder.definitions();
        assert_eq!(definitions[0].devices.idioms(), vec!["universal"]);
        assert_eq!(definitions[1].devices.idioms(), vec!["iphone"]);
        assert!(builder.validate().is_ok());
    }
}
