//! Asset catalog (`.xcassets`) set generation.
//!
//! Three kinds of sets are supported:
//!
//! - [`ColorSetBuilder`] writes `<name>.colorset/Contents.json`
//! - [`ImageSetBuilder`] writes `<name>.imageset/` with resampled PNGs
//! - [`AppIconBuilder`] writes `<name>.appiconset/` for the enabled platforms
//!
//! Every builder validates its definitions before anything is written. Two
//! definitions of one set may not claim the same device and appearance.

pub mod appearance;
pub mod color;
pub mod color_space;
pub mod contents;
pub mod devices;
pub mod fs;
pub mod gamut;
pub mod icon;
pub mod image;
pub mod raster;
pub mod source;

pub use appearance::Appearance;
pub use color::{ColorDefinition, ColorSetBuilder, ColorValue, parse_hex};
pub use color_space::ColorSpace;
pub use contents::{
    AppIconContents, AppearanceTag, ColorDescriptor, ColorSetContents, IconDescriptor,
    ImageDescriptor, ImageSetContents, Info,
};
pub use devices::Devices;
pub use gamut::Gamut;
pub use icon::{AppIconBuilder, AppIconOutput, IconPlatform, IconSlot, PlatformIcons};
pub use image::{
    AssetProperties, Compression, ImageDefinition, ImageSetBuilder, ImageSetOutput,
    RenderingIntent,
};
pub use raster::{ImageLoader, LanczosResampler, Resampler, SourceLoader};
pub use source::{AssetSource, SourceLocation};

use crate::error::{Error, Result};

/// Shared device and appearance tags between two definitions, if any.
pub(crate) type Overlap = Option<(Vec<&'static str>, Vec<&'static str>)>;

/// Fails on the first pair of definitions that claim the same slot.
pub(crate) fn validate_unique<T>(definitions: &[T], overlap: impl Fn(&T, &T) -> Overlap) -> Result<()> {
    for (first, definition) in definitions.iter().enumerate() {
        for (second, other) in definitions.iter().enumerate().skip(first + 1) {
            if let Some((devices, appearances)) = overlap(definition, other) {
                return Err(Error::Overlap {
                    first,
                    second,
                    devices: devices.into_iter().map(str::to_string).collect(),
                    appearances: appearances.into_iter().map(str::to_string).collect(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_parity(a: &u32, b: &u32) -> Overlap {
        (a % 2 == b % 2).then(|| (vec!["universal"], vec!["Any"]))
    }

    #[test]
    fn test_validate_unique_reports_first_pair() {
        let err = validate_unique(&[1, 2, 4, 3], same_parity).unwrap_err();
        match err {
            Error::Overlap {
                first,
                second,
                devices,
                appearances,
            } => {
                assert_eq!((first, second), (0, 3));
                assert_eq!(devices, vec!["universal".to_string()]);
                assert_eq!(appearances, vec!["Any".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_unique_accepts_disjoint() {
        assert!(validate_unique(&[1, 2], same_parity).is_ok());
        assert!(validate_unique::<u32>(&[], same_parity).is_ok());
    }
}
