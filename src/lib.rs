//! # Kodegen Bundler Assets
//!
//! Generates the Apple bundle artifacts that usually get hand-edited in
//! Xcode: asset catalog color sets, image sets and app icons, plus
//! `Info.plist` and entitlements property lists.
//!
//! ## Features
//!
//! - **Color sets**: sRGB and Display P3 colors with appearance and device variants
//! - **Image sets**: 1x/2x/3x rendering from one high resolution source
//! - **App icons**: every slot for phone, tablet, watch, CarPlay, Mac and App Store
//! - **Remote sources**: images can be fetched from a URL
//! - **Property lists**: Info.plist and entitlements with validation
//!
//! ## Usage
//!
//! ```bash
//! kodegen_bundler_assets validate assets.toml
//! kodegen_bundler_assets generate assets.toml --out App/Assets.xcassets
//! ```
//!
//! ```no_run
//! use kodegen_bundler_assets::ColorSetBuilder;
//!
//! # async fn run() -> kodegen_bundler_assets::Result<()> {
//! let mut set = ColorSetBuilder::new("Brand");
//! set.color().hex("#FF6600")?;
//! set.save_to("App/Assets.xcassets", false).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod entitlements;
pub mod error;
pub mod info_plist;

pub use catalog::{
    AppIconBuilder, Appearance, AssetSource, ColorDefinition, ColorSetBuilder, ColorSpace,
    Devices, Gamut, IconPlatform, ImageDefinition, ImageSetBuilder,
};
pub use cli::Args;
pub use config::Manifest;
pub use entitlements::Entitlements;
pub use error::{Error, Result};
pub use info_plist::{InfoPlist, Platform};
