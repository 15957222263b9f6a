use crate::bail;
use crate::error::Result;

/// Color space of a color definition. sRGB when unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorSpace {
    #[default]
    Srgb,
    DisplayP3,
    ExtendedSrgb,
    ExtendedLinearSrgb,
    GrayGamma22,
    ExtendedGray,
}

impl ColorSpace {
    /// Tag written to `color-space` in Contents.json.
    pub fn tag(self) -> &'static str {
        match self {
            ColorSpace::Srgb => "srgb",
            ColorSpace::DisplayP3 => "display-p3",
            ColorSpace::ExtendedSrgb => "extended-srgb",
            ColorSpace::ExtendedLinearSrgb => "extended-linear-srgb",
            ColorSpace::GrayGamma22 => "gray-gamma-22",
            ColorSpace::ExtendedGray => "extended-gray",
        }
    }

    /// Grayscale spaces take a `white` component instead of red/green/blue.
    pub fn is_grayscale(self) -> bool {
        matches!(self, ColorSpace::GrayGamma22 | ColorSpace::ExtendedGray)
    }

    /// Parses a Contents.json tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(match tag {
            "srgb" => ColorSpace::Srgb,
            "display-p3" => ColorSpace::DisplayP3,
            "extended-srgb" => ColorSpace::ExtendedSrgb,
            "extended-linear-srgb" => ColorSpace::ExtendedLinearSrgb,
            "gray-gamma-22" => ColorSpace::GrayGamma22,
            "extended-gray" => ColorSpace::ExtendedGray,
            other => bail!("unknown color space {:?}", other),
        })
    }
}
