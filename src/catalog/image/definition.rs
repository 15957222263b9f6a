use crate::bail;
use crate::catalog::contents::{AppearanceTag, ImageDescriptor, format_dimension};
use crate::catalog::raster::{ImageLoader, RasterTarget};
use crate::catalog::{Appearance, AssetSource, Devices};
use crate::error::{Error, Result};

/// Legal scale factors per idiom.
pub fn scales_for(idiom: &str) -> &'static [f64] {
    match idiom {
        "universal" | "iphone" => &[1.0, 2.0, 3.0],
        "car" => &[2.0, 3.0],
        "watch" => &[2.0],
        "ipad" | "tv" | "mac" => &[1.0, 2.0],
        _ => &[1.0],
    }
}

/// One image variant tagged with devices and appearances.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDefinition {
    pub devices: Devices,
    pub appearance: Appearance,
    pub source: AssetSource,
}

impl Default for ImageDefinition {
    fn default() -> Self {
        let mut appearance = Appearance::new();
        appearance.any();
        let mut devices = Devices::new();
        devices.universal();

        Self {
            devices,
            appearance,
            source: AssetSource::new(),
        }
    }
}

/// One expanded output image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub idiom: &'static str,
    pub subtype: Option<&'static str>,
    pub scale: f64,
    pub width: u32,
    pub height: u32,
    pub appearances: Vec<AppearanceTag>,
    pub display_gamut: Option<&'static str>,
    /// File name without the `.png` extension.
    pub filename: String,
    pub source: AssetSource,
}

impl ImageRecord {
    pub fn descriptor(&self) -> ImageDescriptor {
        ImageDescriptor {
            filename: format!("{}.png", self.filename),
            idiom: self.idiom.to_string(),
            scale: format!("{}x", format_dimension(self.scale)),
            subtype: self.subtype.map(str::to_string),
            appearances: self.appearances.clone(),
            display_gamut: self.display_gamut.map(str::to_string),
        }
    }

    pub fn target(&self) -> RasterTarget<'_> {
        RasterTarget {
            source: &self.source,
            width: self.width,
            height: self.height,
            filename: &self.filename,
        }
    }
}

impl ImageDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks devices and the source, decoding the source header once.
    pub async fn validate<L: ImageLoader>(&mut self, loader: &L) -> Result<()> {
        self.devices.validate()?;

        if self.source.is_empty() {
            return Err(Error::MissingSource("asset".to_string()));
        }
        if self.source.desired_size().is_none() {
            bail!("no 1x size specified for {}", self.source.display_name());
        }

        self.source.validate(loader).await
    }

    /// Shared device and appearance tags, if this definition collides with
    /// `other`.
    pub fn overlap(&self, other: &ImageDefinition) -> Option<(Vec<&'static str>, Vec<&'static str>)> {
        let devices = self.devices.intersects(&other.devices);
        let appearances = self.appearance.intersects(&other.appearance);
        (!devices.is_empty() && !appearances.is_empty()).then_some((devices, appearances))
    }

    /// Expands into idiom × appearance × gamut × scale records.
    pub(crate) fn build(&self, name: &str, gamuts: &[&'static str]) -> Vec<ImageRecord> {
        let Some((width, height)) = self.source.desired_size() else {
            return Vec::new();
        };

        let gamut_passes: Vec<Option<&'static str>> = if gamuts.is_empty() {
            vec![None]
        } else {
            gamuts.iter().copied().map(Some).collect()
        };

        let mut records = Vec::new();
        for (idiom, subtype) in self.devices.slots() {
            for group in self.appearance.build() {
                for display_gamut in &gamut_passes {
                    for &scale in scales_for(idiom) {
                        let pixel_width = f64::from(width) * scale;
                        let pixel_height = f64::from(height) * scale;
                        let slot = match subtype {
                            Some(subtype) => format!("{idiom}-{subtype}"),
                            None => idiom.to_string(),
                        };

                        records.push(ImageRecord {
                            idiom,
                            subtype,
                            scale,
                            width: pixel_width.round() as u32,
                            height: pixel_height.round() as u32,
                            appearances: group.clone(),
                            display_gamut: *display_gamut,
                            filename: format!(
                                "{name}-{slot}-{}x{}@{}x",
                                format_dimension(pixel_width),
                                format_dimension(pixel_height),
                                format_dimension(scale)
                            ),
                            source: self.source.clone(),
                        });
                    }
                }
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo(width: u32, height: u32) -> ImageDefinition {
        let mut definition = ImageDefinition::new();
        definition.devices.universal();
        definition.source.file("logo.png").size(width, height);
        definition
    }

    #[test]
    fn test_universal_256_expands_to_three_scales() {
        let records = logo(256, 256).build("logo", &[]);
        let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "logo-universal-256x256@1x",
                "logo-universal-512x512@2x",
                "logo-universal-768x768@3x",
            ]
        );
        assert_eq!((records[2].width, records[2].height), (768, 768));
        assert_eq!(records[1].descriptor().scale, "2x");
        assert_eq!(records[1].descriptor().filename, "logo-universal-512x512@2x.png");
    }

    #[test]
    fn test_scale_table_per_idiom() {
        assert_eq!(scales_for("iphone"), &[1.0, 2.0, 3.0]);
        assert_eq!(scales_for("ipad"), &[1.0, 2.0]);
        assert_eq!(scales_for("car"), &[2.0, 3.0]);
        assert_eq!(scales_for("watch"), &[2.0]);
        assert_eq!(scales_for("tv"), &[1.0, 2.0]);
        assert_eq!(scales_for("mac"), &[1.0, 2.0]);
    }

    #[test]
    fn test_gamut_doubles_records() {
        let definition = logo(10, 10);
        let plain = definition.build("logo", &[]);
        let wide = definition.build("logo", &["display-P3", "sRGB"]);

        assert_eq!(wide.len(), plain.len() * 2);
        assert_eq!(wide[0].display_gamut, Some("display-P3"));
        assert_eq!(wide[0].descriptor().display_gamut.as_deref(), Some("display-P3"));
        assert_eq!(wide[3].display_gamut, Some("sRGB"));
    }

    #[test]
    fn test_catalyst_records_carry_subtype() {
        let mut definition = ImageDefinition::new();
        definition.devices.clear().catalyst();
        definition.source.file("logo.png").size(20, 10);

        let records = definition.build("logo", &[]);
        assert_eq!(records.len(), 4);
        assert_eq!(records[2].subtype, Some("mac-catalyst"));
        assert_eq!(records[2].filename, "logo-ipad-mac-catalyst-20x10@1x");
        assert_eq!(records[2].descriptor().subtype.as_deref(), Some("mac-catalyst"));
        assert!(records[0].descriptor().subtype.is_none());
    }

    #[test]
    fn test_appearance_groups_in_records() {
        let mut definition = logo(10, 10);
        definition.appearance.dark();

        let records = definition.build("logo", &[]);
        assert_eq!(records.len(), 6);
        assert!(records[0].descriptor().appearances.is_empty());
        assert_eq!(records[3].appearances[0].value, "dark");
    }
}
