use super::value::{ColorValue, check_range, parse_hex};
use crate::bail;
use crate::catalog::contents::{ColorComponents, ColorDescriptor, ColorSpec};
use crate::catalog::{Appearance, ColorSpace, Devices};
use crate::error::Result;

/// One color variant tagged with devices and appearances.
///
/// Value setters store what they are given and return an error when it is
/// out of range; [`ColorDefinition::validate`] reports the same problem again.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDefinition {
    pub devices: Devices,
    pub appearance: Appearance,
    color_space: ColorSpace,
    value: Option<ColorValue>,
    alpha: f64,
}

impl Default for ColorDefinition {
    fn default() -> Self {
        let mut appearance = Appearance::new();
        appearance.any();
        let mut devices = Devices::new();
        devices.universal();

        Self {
            devices,
            appearance,
            color_space: ColorSpace::default(),
            value: None,
            alpha: 1.0,
        }
    }
}

impl ColorDefinition {
    /// New definition for `universal` devices with the `any` appearance,
    /// sRGB and an opaque alpha. Device setters add to `universal`; call
    /// [`Devices::clear`] first to target specific devices only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_space(&mut self, space: ColorSpace) -> &mut Self {
        self.color_space = space;
        self
    }

    /// Hexadecimal color, `#RRGGBB` or `#RGB`.
    pub fn hex(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let raw = value.into();
        let parsed = parse_hex(&raw);
        self.value = Some(ColorValue::Hex(raw));
        parsed?;
        Ok(self)
    }

    /// 8-bit RGB color, each channel between 0 and 255.
    pub fn rgb(&mut self, red: i32, green: i32, blue: i32) -> Result<&mut Self> {
        let value = ColorValue::Rgb8 { red, green, blue };
        let checked = value.validate();
        self.value = Some(value);
        checked?;
        Ok(self)
    }

    /// Floating point RGB color, each channel between 0 and 1.
    pub fn rgb_float(&mut self, red: f64, green: f64, blue: f64) -> Result<&mut Self> {
        let value = ColorValue::RgbFloat { red, green, blue };
        let checked = value.validate();
        self.value = Some(value);
        checked?;
        Ok(self)
    }

    /// White level for grayscale color spaces. Select the color space first.
    pub fn white(&mut self, white: f64) -> Result<&mut Self> {
        if !self.color_space.is_grayscale() {
            bail!("white can only be used with grayscale color spaces");
        }

        let value = ColorValue::Grayscale { white };
        let checked = value.validate();
        self.value = Some(value);
        checked?;
        Ok(self)
    }

    /// Opacity between 0 and 1. Defaults to 1.
    pub fn alpha(&mut self, alpha: f64) -> Result<&mut Self> {
        self.alpha = alpha;
        check_range("Alpha", alpha, 0.0, 1.0)?;
        Ok(self)
    }

    pub fn value(&self) -> Option<&ColorValue> {
        self.value.as_ref()
    }

    pub fn space(&self) -> ColorSpace {
        self.color_space
    }

    /// Checks that a color is present and consistent with the color space,
    /// that every range holds and that at least one device is selected.
    pub fn validate(&self) -> Result<()> {
        let Some(value) = &self.value else {
            bail!("no color present - please specify a color");
        };

        self.devices.validate()?;

        if value.is_grayscale() != self.color_space.is_grayscale() {
            if self.color_space.is_grayscale() {
                bail!(
                    "color space {} requires a white value",
                    self.color_space.tag()
                );
            }
            bail!("white can only be used with grayscale color spaces");
        }

        value.validate()?;
        check_range("Alpha", self.alpha, 0.0, 1.0)
    }

    /// Shared device and appearance tags, if this definition collides with
    /// `other`. Both intersections must be non-empty to collide.
    pub fn overlap(&self, other: &ColorDefinition) -> Option<(Vec<&'static str>, Vec<&'static str>)> {
        let devices = self.devices.intersects(&other.devices);
        let appearances = self.appearance.intersects(&other.appearance);
        (!devices.is_empty() && !appearances.is_empty()).then_some((devices, appearances))
    }

    fn components(&self) -> Result<ColorComponents> {
        match &self.value {
            Some(value) => value.components(self.alpha),
            None => bail!("no color present - please specify a color"),
        }
    }

    /// Expands into idiom × appearance × gamut descriptors.
    pub(crate) fn build(&self, gamuts: &[&'static str]) -> Result<Vec<ColorDescriptor>> {
        let components = self.components()?;
        let groups = self.appearance.build();
        let mut descriptors = Vec::new();

        for idiom in self.devices.idioms() {
            for group in &groups {
                let variant = |color_space: String, display_gamut: Option<String>| ColorDescriptor {
                    appearances: group.clone(),
                    color: ColorSpec {
                        color_space,
                        components: components.clone(),
                    },
                    idiom: idiom.to_string(),
                    display_gamut,
                };

                if gamuts.is_empty() {
                    descriptors.push(variant(self.color_space.tag().to_string(), None));
                } else {
                    for gamut in gamuts {
                        descriptors.push(variant(gamut.to_lowercase(), Some(gamut.to_string())));
                    }
                }
            }
        }

        Ok(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn universal() -> ColorDefinition {
        let mut definition = ColorDefinition::new();
        definition.devices.universal();
        definition
    }

    #[test]
    fn test_defaults() {
        let definition = ColorDefinition::new();

        assert!(definition.appearance.effective_any());
        assert_eq!(definition.space(), ColorSpace::Srgb);
        assert!(definition.value().is_none());
    }

    #[test]
    fn test_last_setter_wins() {
        let mut definition = universal();
        definition.hex("#262D44").unwrap();
        definition.rgb(146, 144, 0).unwrap();
        definition.rgb_float(0.5, 0.5, 0.5).unwrap();

        assert!(matches!(definition.value(), Some(ColorValue::RgbFloat { .. })));
    }

    #[test]
    fn test_out_of_range_is_stored_and_reported_again() {
        let mut definition = universal();
        assert!(definition.rgb(300, 0, 0).is_err());

        assert!(matches!(
            definition.value(),
            Some(ColorValue::Rgb8 { red: 300, .. })
        ));
        assert!(matches!(definition.validate(), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_alpha_out_of_range() {
        let mut definition = universal();
        definition.rgb_float(1.0, 1.0, 1.0).unwrap();

        assert!(definition.alpha(1.5).is_err());
        assert!(definition.validate().is_err());
        definition.alpha(0.4).unwrap();
        assert!(definition.validate().is_ok());
    }

    #[test]
    fn test_white_requires_grayscale_space() {
        let mut definition = universal();
        assert!(definition.white(0.5).is_err());
        assert!(definition.value().is_none());

        definition.color_space(ColorSpace::GrayGamma22);
        definition.white(0.5).unwrap();
        assert!(definition.validate().is_ok());
    }

    #[test]
    fn test_grayscale_space_requires_white() {
        let mut definition = universal();
        definition.color_space(ColorSpace::ExtendedGray);
        definition.rgb(1, 2, 3).unwrap();

        assert!(definition.validate().is_err());
    }

    #[test]
    fn test_missing_color_or_devices_fail() {
        assert!(universal().validate().is_err());

        let mut no_devices = ColorDefinition::new();
        no_devices.devices.clear();
        no_devices.hex("#fff").unwrap();
        assert!(no_devices.validate().is_err());
    }

    #[test]
    fn test_overlap_requires_devices_and_appearances() {
        let mut a = universal();
        a.hex("#fff").unwrap();
        let mut b = universal();
        b.hex("#000").unwrap();

        let (devices, appearances) = a.overlap(&b).unwrap();
        assert_eq!(devices, vec!["universal"]);
        assert_eq!(appearances, vec!["Any"]);

        let mut light = ColorDefinition {
            appearance: Appearance::new(),
            ..universal()
        };
        light.appearance.light();
        assert!(a.overlap(&light).is_none());

        let mut phone = ColorDefinition::new();
        phone.devices.clear().iphone();
        assert!(a.overlap(&phone).is_none());
    }

    #[test]
    fn test_gamut_overrides_color_space_tag() {
        let mut definition = universal();
        definition.rgb_float(1.0, 0.0, 0.0).unwrap();

        let plain = definition.build(&[]).unwrap();
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].color.color_space, "srgb");
        assert!(plain[0].display_gamut.is_none());

        let wide = definition.build(&["display-P3", "sRGB"]).unwrap();
        assert_eq!(wide.len(), 2);
        assert_eq!(wide[0].color.color_space, "display-p3");
        assert_eq!(wide[0].display_gamut.as_deref(), Some("display-P3"));
        assert_eq!(wide[1].color.color_space, "srgb");
    }
}
