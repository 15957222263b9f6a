//! Named color sets (`.colorset`).
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_assets::catalog::{ColorSetBuilder, Gamut};
//!
//! # async fn example() -> kodegen_bundler_assets::Result<()> {
//! let mut builder = ColorSetBuilder::new("SplashScreenColor");
//! builder.gamut(Gamut::SrgbAndDisplayP3);
//!
//! builder.color().hex("#262D44")?;
//!
//! let dark = builder.color();
//! dark.devices.clear().iphone();
//! dark.appearance.dark();
//! dark.rgb_float(0.1, 0.1, 0.1)?.alpha(0.9)?;
//!
//! builder.save_to("Assets.xcassets", true).await?;
//! # Ok(())
//! # }
//! ```

mod definition;
mod value;

pub use definition::ColorDefinition;
pub use value::{ColorValue, parse_hex};

use super::contents::{ColorSetContents, ColorSetProperties, Info};
use super::{Gamut, fs, validate_unique};
use crate::error::{Context, Error, Result};
use std::path::{Path, PathBuf};

/// Builder for one named color with any number of variants.
#[derive(Debug, Clone)]
pub struct ColorSetBuilder {
    name: String,
    gamut: Gamut,
    definitions: Vec<ColorDefinition>,
}

impl ColorSetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gamut: Gamut::default(),
            definitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gamut(&mut self, gamut: Gamut) -> &mut Self {
        self.gamut = gamut;
        self
    }

    /// Appends a new definition with the `any` appearance and returns it for
    /// configuration.
    pub fn color(&mut self) -> &mut ColorDefinition {
        self.definitions.push(ColorDefinition::new());
        let last = self.definitions.len() - 1;
        &mut self.definitions[last]
    }

    /// Appends an already configured definition.
    pub fn push(&mut self, definition: ColorDefinition) -> &mut Self {
        self.definitions.push(definition);
        self
    }

    pub fn definitions(&self) -> &[ColorDefinition] {
        &self.definitions
    }

    /// Validates every definition and checks that no two overlap.
    pub fn validate(&self) -> Result<()> {
        if self.definitions.is_empty() {
            return Err(Error::NoDefinitions {
                kind: "colors",
                name: self.name.clone(),
            });
        }

        for (index, definition) in self.definitions.iter().enumerate() {
            definition
                .validate()
                .with_context(|| format!("invalid color definition #{index}"))?;
        }

        validate_unique(&self.definitions, ColorDefinition::overlap)
    }

    /// Validates and expands the definitions into a Contents.json document.
    pub fn build(&self) -> Result<ColorSetContents> {
        self.validate()?;

        let gamuts = self.gamut.values();
        let mut colors = Vec::new();
        for definition in &self.definitions {
            colors.extend(definition.build(gamuts)?);
        }

        log::debug!("Color set {} expanded to {} entries", self.name, colors.len());

        Ok(ColorSetContents {
            colors,
            info: Info::default(),
            properties: ColorSetProperties { localizable: true },
        })
    }

    /// Builds and serializes Contents.json.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.build()?)?)
    }

    /// Writes `<name>.colorset/Contents.json` under `destination`.
    ///
    /// `destination` must be an existing directory. An existing color set is
    /// only replaced when `overwrite` is set.
    pub async fn save_to(&self, destination: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        let contents = self.build()?;
        let dir = fs::prepare_set_dir(
            destination.as_ref(),
            &format!("{}.colorset", self.name),
            overwrite,
        )
        .await?;

        fs::write_contents(&dir, &contents).await?;
        log::info!("Wrote color set {}", dir.display());
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_fails() {
        let err = ColorSetBuilder::new("Accent").build().unwrap_err();
        assert!(matches!(err, Error::NoDefinitions { kind: "colors", .. }));
        assert_eq!(err.to_string(), "no colors defined for Accent");
    }

    #[test]
    fn test_two_default_definitions_overlap() {
        let mut builder = ColorSetBuilder::new("Accent");
        builder.color().hex("#fff").unwrap();
        builder.color().hex("#000").unwrap();

        match builder.validate() {
            Err(Error::Overlap {
                first,
                second,
                devices,
                appearances,
            }) => {
                assert_eq!((first, second), (0, 1));
                assert_eq!(devices, vec!["universal"]);
                assert_eq!(appearances, vec!["Any"]);
            }
            other => panic!("expected overlap, got {other:?}"),
        }
    }

    #[test]
    fn test_rgb_float_red_in_srgb() {
        let mut builder = ColorSetBuilder::new("Red");
        let definition = builder.color();
        definition.devices.universal();
        definition.rgb_float(1.0, 0.0, 0.0).unwrap();

        let contents = builder.build().unwrap();
        assert_eq!(contents.colors.len(), 1);

        let color = &contents.colors[0];
        assert_eq!(color.idiom, "universal");
        assert!(color.appearances.is_empty());
        assert_eq!(color.color.color_space, "srgb");
        assert_eq!(color.color.components.alpha, "1.000");
        assert_eq!(color.color.components.red.as_deref(), Some("1.000"));
        assert_eq!(color.color.components.green.as_deref(), Some("0.000"));
        assert_eq!(color.color.components.blue.as_deref(), Some("0.000"));
        assert!(contents.properties.localizable);
        assert_eq!(contents.info.author, "xcode");
    }

    #[test]
    fn test_display_p3_gamut_doubles_entries() {
        let mut builder = ColorSetBuilder::new("Accent");
        let definition = builder.color();
        definition.devices.universal().iphone();
        definition.appearance.dark();
        definition.hex("#262D44").unwrap();

        let plain = builder.build().unwrap().colors.len();
        builder.gamut(Gamut::SrgbAndDisplayP3);
        let wide = builder.build().unwrap().colors.len();

        assert_eq!(plain, 4);
        assert_eq!(wide, plain * 2);
    }

    #[test]
    fn test_disjoint_definitions_validate() {
        let mut builder = ColorSetBuilder::new("Accent");
        let phone = builder.color();
        phone.devices.clear().iphone();
        phone.hex("#fff").unwrap();
        let tv = builder.color();
        tv.devices.clear().apple_tv();
        tv.hex("#000").unwrap();

        assert!(builder.validate().is_ok());
    }

    #[test]
    fn test_json_shape() {
        let mut builder = ColorSetBuilder::new("Accent");
        let definition = builder.color();
        definition.devices.universal();
        definition.appearance.dark();
        definition.rgb(255, 0, 0).unwrap();

        let json: serde_json::Value = serde_json::from_str(&builder.to_json().unwrap()).unwrap();

        assert_eq!(json["info"]["version"], 1);
        assert_eq!(json["properties"]["localizable"], true);
        assert!(json["colors"][0].get("appearances").is_none());
        assert_eq!(json["colors"][1]["appearances"][0]["value"], "dark");
        assert_eq!(json["colors"][1]["color"]["components"]["red"], "255");
    }
}
