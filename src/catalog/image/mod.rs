//! Image sets (`.imageset`).
//!
//! Each definition names a source image and its size at 1x. Building expands
//! the definitions over every idiom, appearance, gamut and legal scale
//! factor; saving resamples the source once per output record.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_assets::catalog::ImageSetBuilder;
//!
//! # async fn example() -> kodegen_bundler_assets::Result<()> {
//! let mut builder = ImageSetBuilder::new("Logo");
//! let definition = builder.asset();
//! definition.source.file("art/logo.png").size(256, 256);
//!
//! builder.save_to("Assets.xcassets", false).await?;
//! # Ok(())
//! # }
//! ```

mod definition;
mod properties;

pub use definition::{ImageDefinition, ImageRecord, scales_for};
pub use properties::{AssetProperties, Compression, RenderingIntent};

use super::contents::{ImageSetContents, Info};
use super::raster::{self, ImageLoader, LanczosResampler, Resampler, SourceLoader};
use super::{Gamut, fs, validate_unique};
use crate::error::{Context, Error, Result};
use std::path::{Path, PathBuf};

/// Expanded image set: the Contents.json document plus the records that
/// drive raster generation.
#[derive(Debug, Clone)]
pub struct ImageSetOutput {
    pub contents: ImageSetContents,
    pub records: Vec<ImageRecord>,
}

/// Builder for one named image set.
#[derive(Debug, Clone)]
pub struct ImageSetBuilder<L = SourceLoader, R = LanczosResampler> {
    name: String,
    gamut: Gamut,
    properties: AssetProperties,
    definitions: Vec<ImageDefinition>,
    loader: L,
    resampler: R,
}

impl ImageSetBuilder {
    /// Builder that reads files and URLs and resamples with Lanczos3.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_backend(name, SourceLoader::new(), LanczosResampler)
    }
}

impl<L: ImageLoader, R: Resampler> ImageSetBuilder<L, R> {
    pub fn with_backend(name: impl Into<String>, loader: L, resampler: R) -> Self {
        Self {
            name: name.into(),
            gamut: Gamut::default(),
            properties: AssetProperties::default(),
            definitions: Vec::new(),
            loader,
            resampler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gamut(&mut self, gamut: Gamut) -> &mut Self {
        self.gamut = gamut;
        self
    }

    pub fn properties(&mut self) -> &mut AssetProperties {
        &mut self.properties
    }

    /// Appends a new definition with the `any` appearance and returns it for
    /// configuration.
    pub fn asset(&mut self) -> &mut ImageDefinition {
        self.definitions.push(ImageDefinition::new());
        let last = self.definitions.len() - 1;
        &mut self.definitions[last]
    }

    pub fn push(&mut self, definition: ImageDefinition) -> &mut Self {
        self.definitions.push(definition);
        self
    }

    pub fn definitions(&self) -> &[ImageDefinition] {
        &self.definitions
    }

    /// Validates each definition (sources included) and checks that no two
    /// overlap. Source validation is cached until the source changes.
    pub async fn validate(&mut self) -> Result<()> {
        if self.definitions.is_empty() {
            return Err(Error::NoDefinitions {
                kind: "assets",
                name: self.name.clone(),
            });
        }

        for (index, definition) in self.definitions.iter_mut().enumerate() {
            definition
                .validate(&self.loader)
                .await
                .with_context(|| format!("invalid asset definition #{index}"))?;
        }

        validate_unique(&self.definitions, ImageDefinition::overlap)
    }

    /// Validates and expands the definitions.
    pub async fn build(&mut self) -> Result<ImageSetOutput> {
        self.validate().await?;

        let gamuts = self.gamut.values();
        let records: Vec<ImageRecord> = self
            .definitions
            .iter()
            .flat_map(|definition| definition.build(&self.name, gamuts))
            .collect();

        log::debug!("Image set {} expanded to {} images", self.name, records.len());

        Ok(ImageSetOutput {
            contents: ImageSetContents {
                images: records.iter().map(ImageRecord::descriptor).collect(),
                info: Info::default(),
                properties: (!self.properties.is_empty()).then_some(self.properties),
            },
            records,
        })
    }

    /// Writes `<name>.imageset/` with Contents.json and every PNG.
    ///
    /// `destination` must be an existing directory. An existing image set is
    /// only replaced when `overwrite` is set.
    pub async fn save_to(&mut self, destination: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        let output = self.build().await?;
        let dir = fs::prepare_set_dir(
            destination.as_ref(),
            &format!("{}.imageset", self.name),
            overwrite,
        )
        .await?;

        fs::write_contents(&dir, &output.contents).await?;
        let written = raster::write_rasters(
            &self.loader,
            &self.resampler,
            output.records.iter().map(ImageRecord::target),
            &dir,
        )
        .await
        .context("writing image set images")?;

        log::info!("Wrote image set {} ({} images)", dir.display(), written);
        Ok(dir)
    }
}
