//! `Contents.json` document models.
//!
//! Field presence follows Xcode: optional keys are omitted rather than
//! written as `null`, and empty appearance lists are dropped.

use super::image::AssetProperties;
use serde::{Deserialize, Serialize};

/// File name of the manifest inside every set directory.
pub const CONTENTS_FILE: &str = "Contents.json";

/// `info` block shared by every Contents.json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// One qualifier inside an appearance group, e.g. `luminosity: dark`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceTag {
    pub appearance: String,
    pub value: String,
}

impl AppearanceTag {
    pub fn luminosity(value: &str) -> Self {
        Self {
            appearance: "luminosity".to_string(),
            value: value.to_string(),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            appearance: "contrast".to_string(),
            value: "high".to_string(),
        }
    }
}

/// Color components as Xcode writes them: every value is a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorComponents {
    pub alpha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    #[serde(rename = "color-space")]
    pub color_space: String,
    pub components: ColorComponents,
}

/// Entry of the `colors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDescriptor {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appearances: Vec<AppearanceTag>,
    pub color: ColorSpec,
    pub idiom: String,
    #[serde(
        rename = "display-gamut",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_gamut: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSetProperties {
    pub localizable: bool,
}

/// Contents.json of a `.colorset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSetContents {
    pub colors: Vec<ColorDescriptor>,
    pub info: Info,
    pub properties: ColorSetProperties,
}

/// Entry of the `images` array of an image set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appearances: Vec<AppearanceTag>,
    #[serde(
        rename = "display-gamut",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_gamut: Option<String>,
}

/// Contents.json of an `.imageset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSetContents {
    pub images: Vec<ImageDescriptor>,
    pub info: Info,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<AssetProperties>,
}

/// Entry of the `images` array of an app icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

/// Contents.json of an `.appiconset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIconContents {
    pub images: Vec<IconDescriptor>,
    pub info: Info,
}

/// Formats a point size or scale: no decimals when integral, one otherwise.
pub(crate) fn format_dimension(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
