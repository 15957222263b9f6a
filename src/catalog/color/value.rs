//! Color value representations and their Contents.json formatting.

use crate::catalog::contents::ColorComponents;
use crate::error::{Error, Result};

/// The single active color representation of a definition.
///
/// Values are stored as given, even when out of range, so that validation
/// can report them again later.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// `#RGB` or `#RRGGBB`, kept verbatim and parsed on use.
    Hex(String),
    /// 8-bit channels, each 0..=255.
    Rgb8 { red: i32, green: i32, blue: i32 },
    /// Floating point channels, each 0..=1.
    RgbFloat { red: f64, green: f64, blue: f64 },
    /// White level for grayscale color spaces, 0..=1.
    Grayscale { white: f64 },
}

impl ColorValue {
    /// Checks channel ranges and hex syntax.
    pub fn validate(&self) -> Result<()> {
        match self {
            ColorValue::Hex(raw) => parse_hex(raw).map(|_| ()),
            ColorValue::Rgb8 { red, green, blue } => {
                check_range("RGB.red", f64::from(*red), 0.0, 255.0)?;
                check_range("RGB.green", f64::from(*green), 0.0, 255.0)?;
                check_range("RGB.blue", f64::from(*blue), 0.0, 255.0)
            }
            ColorValue::RgbFloat { red, green, blue } => {
                check_range("RGBFloat.red", *red, 0.0, 1.0)?;
                check_range("RGBFloat.green", *green, 0.0, 1.0)?;
                check_range("RGBFloat.blue", *blue, 0.0, 1.0)
            }
            ColorValue::Grayscale { white } => check_range("White", *white, 0.0, 1.0),
        }
    }

    pub fn is_grayscale(&self) -> bool {
        matches!(self, ColorValue::Grayscale { .. })
    }

    /// Formats the channels with the given alpha.
    pub fn components(&self, alpha: f64) -> Result<ColorComponents> {
        self.validate()?;

        let mut components = ColorComponents {
            alpha: format!("{alpha:.3}"),
            ..Default::default()
        };

        match self {
            ColorValue::Hex(raw) => {
                // Digits are copied as written; validate() already checked them.
                let digits = expand_hex(raw)?;
                components.red = Some(format!("0x{}", &digits[0..2]));
                components.green = Some(format!("0x{}", &digits[2..4]));
                components.blue = Some(format!("0x{}", &digits[4..6]));
            }
            ColorValue::Rgb8 { red, green, blue } => {
                components.red = Some(red.to_string());
                components.green = Some(green.to_string());
                components.blue = Some(blue.to_string());
            }
            ColorValue::RgbFloat { red, green, blue } => {
                components.red = Some(format!("{red:.3}"));
                components.green = Some(format!("{green:.3}"));
                components.blue = Some(format!("{blue:.3}"));
            }
            ColorValue::Grayscale { white } => {
                components.white = Some(format!("{white:.3}"));
            }
        }

        Ok(components)
    }
}

/// Strips the `#` and expands `RGB` to `RRGGBB`, keeping the digit case.
fn expand_hex(raw: &str) -> Result<String> {
    let digits = raw.trim().trim_start_matches('#');
    match digits.len() {
        3 => Ok(digits.chars().flat_map(|c| [c, c]).collect()),
        6 => Ok(digits.to_string()),
        _ => Err(Error::InvalidHex(raw.to_string())),
    }
}

/// Parses `#RGB`, `#RRGGBB` (leading `#` optional) into 8-bit channels.
pub fn parse_hex(raw: &str) -> Result<[u8; 3]> {
    let expanded = expand_hex(raw)?;

    let mut channels = [0u8; 3];
    hex::decode_to_slice(&expanded, &mut channels)
        .map_err(|_| Error::InvalidHex(raw.to_string()))?;
    Ok(channels)
}

pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_long_and_short() {
        assert_eq!(parse_hex("#262D44").unwrap(), [0x26, 0x2D, 0x44]);
        assert_eq!(parse_hex("262d44").unwrap(), [0x26, 0x2D, 0x44]);
        assert_eq!(parse_hex("#fa0").unwrap(), [0xFF, 0xAA, 0x00]);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(parse_hex("#12345"), Err(Error::InvalidHex(_))));
        assert!(matches!(parse_hex("#GGGGGG"), Err(Error::InvalidHex(_))));
        assert!(matches!(parse_hex(""), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_hex_components() {
        let components = ColorValue::Hex("#262d44".into()).components(0.4).unwrap();

        assert_eq!(components.alpha, "0.400");
        assert_eq!(components.red.as_deref(), Some("0x26"));
        assert_eq!(components.green.as_deref(), Some("0x2d"));
        assert_eq!(components.blue.as_deref(), Some("0x44"));
        assert!(components.white.is_none());

        let upper = ColorValue::Hex("#262D44".into()).components(1.0).unwrap();
        assert_eq!(upper.green.as_deref(), Some("0x2D"));

        let short = ColorValue::Hex("#fA0".into()).components(1.0).unwrap();
        assert_eq!(short.red.as_deref(), Some("0xff"));
        assert_eq!(short.green.as_deref(), Some("0xAA"));
        assert_eq!(short.blue.as_deref(), Some("0x00"));
    }

    #[test]
    fn test_rgb8_components_are_decimal() {
        let value = ColorValue::Rgb8 {
            red: 146,
            green: 144,
            blue: 0,
        };
        let components = value.components(1.0).unwrap();

        assert_eq!(components.red.as_deref(), Some("146"));
        assert_eq!(components.green.as_deref(), Some("144"));
        assert_eq!(components.blue.as_deref(), Some("0"));
    }

    #[test]
    fn test_float_components_have_three_decimals() {
        let value = ColorValue::RgbFloat {
            red: 1.0,
            green: 0.0,
            blue: 0.682,
        };
        let components = value.components(1.0).unwrap();

        assert_eq!(components.alpha, "1.000");
        assert_eq!(components.red.as_deref(), Some("1.000"));
        assert_eq!(components.green.as_deref(), Some("0.000"));
        assert_eq!(components.blue.as_deref(), Some("0.682"));
    }

    #[test]
    fn test_out_of_range_channel_names_the_field() {
        let value = ColorValue::Rgb8 {
            red: 0,
            green: 256,
            blue: 0,
        };

        match value.validate() {
            Err(Error::OutOfRange { field, .. }) => assert_eq!(field, "RGB.green"),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}
