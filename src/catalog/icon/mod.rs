//! App icon sets (`.appiconset`).
//!
//! Icons are declared per platform. Every slot of an enabled platform uses,
//! in order of preference, its own override, the platform source, or the
//! parent icon source.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_assets::catalog::AppIconBuilder;
//!
//! # async fn example() -> kodegen_bundler_assets::Result<()> {
//! let mut icon = AppIconBuilder::new("AppIcon");
//! icon.source().file("art/icon-1024.png");
//! icon.phone();
//! icon.tablet().slot("pro")?.file("art/icon-pro.png");
//! icon.app_store();
//!
//! icon.save_to("Assets.xcassets", true).await?;
//! # Ok(())
//! # }
//! ```

mod slots;

pub use slots::{IconPlatform, IconSlot};

use super::contents::{AppIconContents, IconDescriptor, Info, format_dimension};
use super::raster::{self, ImageLoader, LanczosResampler, RasterTarget, Resampler, SourceLoader};
use super::source::{AssetSource, ICON_MIN_DIMENSION};
use super::fs;
use crate::bail;
use crate::error::{Context, Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Source configuration for one platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformIcons {
    platform: Option<IconPlatform>,
    enabled: bool,
    source: AssetSource,
    overrides: BTreeMap<&'static str, AssetSource>,
}

impl PlatformIcons {
    fn new(platform: IconPlatform) -> Self {
        let mut source = AssetSource::new();
        source.min_dimension(ICON_MIN_DIMENSION);

        Self {
            platform: Some(platform),
            source,
            ..Self::default()
        }
    }

    /// Source used for slots without an override: this platform's own
    /// artwork, or `parent` while it has none.
    fn resolve(&self, parent: &AssetSource) -> AssetSource {
        let mut source = self.source.clone();
        if source.is_empty() {
            source.apply(parent);
        }
        source
    }

    /// Artwork for every slot of this platform without an override. Falls
    /// back to the parent icon source when empty. Must be at least 1024px
    /// unless a smaller minimum is set.
    pub fn source(&mut self) -> &mut AssetSource {
        &mut self.source
    }

    /// Override for one slot field (e.g. `notification`, `pro`,
    /// `size-16`). Its minimum dimension defaults to the largest pixel size
    /// the field is rendered at.
    pub fn slot(&mut self, field: &str) -> Result<&mut AssetSource> {
        let platform = self.platform.context("platform not set")?;
        let Some(field) = platform.field(field) else {
            bail!("{} icons have no {:?} slot", platform.name(), field);
        };

        Ok(self.overrides.entry(field).or_insert_with(|| {
            let mut source = AssetSource::new();
            source.min_dimension(platform.max_pixels(field));
            source
        }))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn disable(&mut self) -> &mut Self {
        self.enabled = false;
        self
    }
}

/// One expanded icon image.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRecord {
    pub slot: IconSlot,
    /// File name without the `.png` extension.
    pub filename: String,
    pub source: AssetSource,
}

impl IconRecord {
    pub fn descriptor(&self) -> IconDescriptor {
        let size = format_dimension(self.slot.size);
        IconDescriptor {
            size: format!("{size}x{size}"),
            idiom: self.slot.idiom.to_string(),
            filename: format!("{}.png", self.filename),
            scale: format!("{}x", self.slot.scale),
            role: self.slot.role.map(str::to_string),
            subtype: self.slot.subtype.map(str::to_string),
        }
    }

    pub fn target(&self) -> RasterTarget<'_> {
        let pixels = self.slot.pixels();
        RasterTarget {
            source: &self.source,
            width: pixels,
            height: pixels,
            filename: &self.filename,
        }
    }
}

/// Expanded icon set: Contents.json plus the records to render.
#[derive(Debug, Clone)]
pub struct AppIconOutput {
    pub contents: AppIconContents,
    pub records: Vec<IconRecord>,
}

/// Builder for an app icon set.
#[derive(Debug, Clone)]
pub struct AppIconBuilder<L = SourceLoader, R = LanczosResampler> {
    name: String,
    source: AssetSource,
    platforms: BTreeMap<IconPlatform, PlatformIcons>,
    loader: L,
    resampler: R,
}

impl AppIconBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_backend(name, SourceLoader::new(), LanczosResampler)
    }
}

impl<L: ImageLoader, R: Resampler> AppIconBuilder<L, R> {
    pub fn with_backend(name: impl Into<String>, loader: L, resampler: R) -> Self {
        let mut source = AssetSource::new();
        source.min_dimension(ICON_MIN_DIMENSION);

        Self {
            name: name.into(),
            source,
            platforms: IconPlatform::ALL
                .into_iter()
                .map(|platform| (platform, PlatformIcons::new(platform)))
                .collect(),
            loader,
            resampler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent artwork shared by every platform. Must be at least 1024px.
    pub fn source(&mut self) -> &mut AssetSource {
        &mut self.source
    }

    /// Enables `platform` and returns its configuration.
    pub fn platform(&mut self, platform: IconPlatform) -> &mut PlatformIcons {
        let icons = self
            .platforms
            .entry(platform)
            .or_insert_with(|| PlatformIcons::new(platform));
        icons.enabled = true;
        icons
    }

    pub fn phone(&mut self) -> &mut PlatformIcons {
        self.platform(IconPlatform::Phone)
    }

    pub fn tablet(&mut self) -> &mut PlatformIcons {
        self.platform(IconPlatform::Tablet)
    }

    pub fn watch(&mut self) -> &mut PlatformIcons {
        self.platform(IconPlatform::Watch)
    }

    pub fn car_play(&mut self) -> &mut PlatformIcons {
        self.platform(IconPlatform::CarPlay)
    }

    pub fn mac(&mut self) -> &mut PlatformIcons {
        self.platform(IconPlatform::Mac)
    }

    pub fn app_store(&mut self) -> &mut PlatformIcons {
        self.platform(IconPlatform::AppStore)
    }

    pub fn enabled_platforms(&self) -> Vec<IconPlatform> {
        self.platforms
            .iter()
            .filter(|(_, icons)| icons.enabled)
            .map(|(platform, _)| *platform)
            .collect()
    }

    /// Validates the parent source, then resolves and validates the sources
    /// of every enabled platform.
    pub async fn validate(&mut self) -> Result<()> {
        if !self.source.is_empty() {
            self.source
                .validate(&self.loader)
                .await
                .context("icon source is invalid")?;
        }

        for (platform, icons) in self.platforms.iter_mut() {
            if !icons.enabled {
                continue;
            }

            if !icons.source.is_empty() {
                icons
                    .source
                    .validate(&self.loader)
                    .await
                    .with_context(|| format!("failed to validate {} icons", platform.name()))?;
            } else if self.source.is_empty() {
                let unresolved = platform
                    .slots()
                    .iter()
                    .find(|slot| !icons.overrides.contains_key(slot.field));
                if let Some(slot) = unresolved {
                    return Err(Error::MissingSource(format!(
                        "{} icon {}",
                        platform.name(),
                        slot.field
                    )));
                }
            } else {
                icons
                    .resolve(&self.source)
                    .validate(&self.loader)
                    .await
                    .with_context(|| format!("failed to validate {} icons", platform.name()))?;
            }

            for (field, source) in icons.overrides.iter_mut() {
                source
                    .validate(&self.loader)
                    .await
                    .with_context(|| format!("failed to validate {} {} icon", platform.name(), field))?;
            }
        }

        Ok(())
    }

    /// Validates and expands every enabled platform's slot table.
    pub async fn build(&mut self) -> Result<AppIconOutput> {
        self.validate().await?;

        let mut records = Vec::new();
        for icons in self.platforms.values().filter(|icons| icons.enabled) {
            let resolved = icons.resolve(&self.source);
            for slot in icons.platform.map(IconPlatform::slots).unwrap_or_default() {
                let source = icons.overrides.get(slot.field).unwrap_or(&resolved);
                let size = format_dimension(slot.size);
                records.push(IconRecord {
                    slot: *slot,
                    filename: format!("{}-{}-{size}x{size}@{}x", self.name, slot.idiom, slot.scale),
                    source: source.clone(),
                });
            }
        }

        if records.is_empty() {
            bail!("no platforms enabled for {}", self.name);
        }

        log::debug!("App icon {} expanded to {} images", self.name, records.len());

        Ok(AppIconOutput {
            contents: AppIconContents {
                images: records.iter().map(IconRecord::descriptor).collect(),
                info: Info::default(),
            },
            records,
        })
    }

    /// Writes `<name>.appiconset/` with Contents.json and every PNG.
    pub async fn save_to(&mut self, destination: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        let output = self.build().await?;
        let dir = fs::prepare_set_dir(
            destination.as_ref(),
            &format!("{}.appiconset", self.name),
            overwrite,
        )
        .await?;

        fs::write_contents(&dir, &output.contents).await?;
        let written = raster::write_rasters(
            &self.loader,
            &self.resampler,
            output.records.iter().map(IconRecord::target),
            &dir,
        )
        .await
        .context("writing app icon images")?;

        log::info!("Wrote app icon {} ({} images)", dir.display(), written);
        Ok(dir)
    }
}
