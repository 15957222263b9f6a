//! TOML asset manifest.
//!
//! A manifest describes every set to generate. Each table maps onto one
//! builder:
//!
//! ```toml
//! [[color]]
//! name = "Accent"
//! [[color.variant]]
//! devices = ["universal"]
//! hex = "#FF9500"
//!
//! [[image]]
//! name = "Logo"
//! [[image.variant]]
//! devices = ["iphone", "ipad"]
//! file = "art/logo.png"
//! size = [120, 40]
//!
//! [icon]
//! file = "art/icon.png"
//! platforms = ["phone", "tablet", "app-store"]
//! ```
//!
//! Relative file paths resolve against the manifest's directory.

mod bundle;
mod color;
mod icon;
mod image;
mod source;

pub use bundle::{EntitlementsConfig, InfoPlistConfig, SceneConfig, plist_value};
pub use color::{ColorSetConfig, ColorVariantConfig};
pub use icon::{IconConfig, PlatformConfig};
pub use image::{ImageSetConfig, ImageVariantConfig};
pub use source::SourceConfig;

use crate::catalog::{Appearance, Devices};
use crate::error::{Context, ErrorExt, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parsed asset manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
    #[serde(default)]
    pub color: Vec<ColorSetConfig>,
    #[serde(default)]
    pub image: Vec<ImageSetConfig>,
    pub icon: Option<IconConfig>,
    pub info_plist: Option<InfoPlistConfig>,
    pub entitlements: Option<EntitlementsConfig>,
    /// Directory relative paths resolve against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Manifest {
    /// Parses manifest text. Relative paths resolve against `base_dir`.
    pub fn parse(text: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut manifest: Manifest = toml::from_str(text)?;
        manifest.base_dir = base_dir.into();
        Ok(manifest)
    }

    /// Reads and parses the manifest at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .fs_context("reading manifest", path)?;

        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        log::debug!("Loaded manifest {}", path.display());
        Self::parse(&text, base_dir).with_context(|| format!("invalid manifest {}", path.display()))
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
            && self.image.is_empty()
            && self.icon.is_none()
            && self.info_plist.is_none()
            && self.entitlements.is_none()
    }
}

/// Builds a device set from manifest tokens.
pub(crate) fn devices_from(tokens: &[String]) -> Result<Devices> {
    let mut devices = Devices::new();
    for token in tokens {
        devices.enable(token)?;
    }
    Ok(devices)
}

/// Builds an appearance set from manifest tokens, replacing the default
/// `any`.
pub(crate) fn appearance_from(tokens: &[String]) -> Result<Appearance> {
    let mut appearance = Appearance::new();
    for token in tokens {
        appearance.enable(token)?;
    }
    Ok(appearance)
}
