//! Raster source locations and their validation state.

use super::raster::ImageLoader;
use crate::bail;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Minimum source dimension, in pixels, for app icon artwork.
pub const ICON_MIN_DIMENSION: u32 = 1024;

/// Largest scale factor an image set is rendered at. Sources sized with
/// [`AssetSource::size`] must provide this much headroom.
pub const SOURCE_HEADROOM: u32 = 3;

/// Largest accepted difference between desired and actual aspect ratios.
pub const ASPECT_TOLERANCE: f64 = 0.05;

/// Where a source image lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceLocation {
    File(PathBuf),
    Url(String),
}

/// A source image plus the constraints it must satisfy.
///
/// Validation decodes the image header once and is cached; any setter resets
/// the cache. Failed validations are not cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetSource {
    location: Option<SourceLocation>,
    min_dimension: u32,
    size: Option<(u32, u32)>,
    validated: bool,
}

impl AssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the image from a local file. Replaces any URL.
    pub fn file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.location = Some(SourceLocation::File(path.into()));
        self.validated = false;
        self
    }

    /// Downloads the image from an HTTP(S) URL. Replaces any file path.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.location = Some(SourceLocation::Url(url.into()));
        self.validated = false;
        self
    }

    /// Minimum width and height of the source, in pixels.
    pub fn min_dimension(&mut self, dimension: u32) -> &mut Self {
        self.min_dimension = dimension;
        self.validated = false;
        self
    }

    /// Size of the asset at 1x, in points.
    pub fn size(&mut self, width: u32, height: u32) -> &mut Self {
        self.size = Some((width, height));
        self.validated = false;
        self
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn desired_size(&self) -> Option<(u32, u32)> {
        self.size
    }

    pub fn minimum_dimension(&self) -> u32 {
        self.min_dimension
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none()
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Cache key: the file path or URL, empty for an empty source.
    pub fn key(&self) -> String {
        match &self.location {
            Some(SourceLocation::File(path)) => path.to_string_lossy().into_owned(),
            Some(SourceLocation::Url(url)) => url.clone(),
            None => String::new(),
        }
    }

    /// Short name used in error messages.
    pub fn display_name(&self) -> String {
        match &self.location {
            Some(SourceLocation::File(path)) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned()),
            Some(SourceLocation::Url(url)) => url.clone(),
            None => "<empty source>".to_string(),
        }
    }

    /// Takes over the location and validation state of `from`, keeping this
    /// source's own constraints.
    pub fn apply(&mut self, from: &AssetSource) {
        self.location = from.location.clone();
        self.validated = from.validated && self.min_dimension <= from.min_dimension;
    }

    /// Resolves a relative file path against `base`.
    pub fn resolve_relative(&mut self, base: &Path) {
        if let Some(SourceLocation::File(path)) = &mut self.location
            && path.is_relative()
        {
            *path = base.join(&*path);
        }
    }

    /// Checks decoded dimensions against the configured constraints.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if let Some((desired_width, desired_height)) = self.size {
            let desired = f64::from(desired_width) / f64::from(desired_height);
            let actual = f64::from(width) / f64::from(height);

            if (actual - desired).abs() > ASPECT_TOLERANCE {
                return Err(Error::AspectRatioMismatch {
                    source_name: self.display_name(),
                    desired_width,
                    desired_height,
                    width,
                    height,
                });
            }

            // Saturates so an oversized request fails as too small.
            let (min_width, min_height) = (
                desired_width.saturating_mul(SOURCE_HEADROOM),
                desired_height.saturating_mul(SOURCE_HEADROOM),
            );
            if width < min_width || height < min_height {
                return Err(self.too_small(width, height, min_width, min_height));
            }
        }

        if width < self.min_dimension || height < self.min_dimension {
            return Err(self.too_small(width, height, self.min_dimension, self.min_dimension));
        }

        Ok(())
    }

    fn too_small(&self, width: u32, height: u32, min_width: u32, min_height: u32) -> Error {
        Error::SourceTooSmall {
            source_name: self.display_name(),
            width,
            height,
            min_width,
            min_height,
        }
    }

    /// Validates the source through `loader`, reusing a previous success.
    pub async fn validate<L: ImageLoader>(&mut self, loader: &L) -> Result<()> {
        if self.validated {
            return Ok(());
        }

        if self.is_empty() {
            return Err(Error::MissingSource("asset source".to_string()));
        }

        if self.min_dimension == 0 && self.size.is_none() {
            bail!(
                "minimum dimension or size not specified for {}",
                self.display_name()
            );
        }

        if let Some((width, height)) = self.size
            && (width == 0 || height == 0)
        {
            bail!("size of {} must be non-zero ({}x{})", self.display_name(), width, height);
        }

        loader.validate(self).await?;
        log::debug!("Validated source {}", self.key());
        self.validated = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_location_wins() {
        let mut source = AssetSource::new();
        source.file("icon.png").url("https://example.com/icon.png");

        assert_eq!(
            source.location(),
            Some(&SourceLocation::Url("https://example.com/icon.png".into()))
        );
        assert_eq!(source.key(), "https://example.com/icon.png");
    }

    #[test]
    fn test_empty_key() {
        let source = AssetSource::new();
        assert!(source.is_empty());
        assert_eq!(source.key(), "");
    }

    #[test]
    fn test_min_dimension_check() {
        let mut source = AssetSource::new();
        source.file("icon.png").min_dimension(1024);

        assert!(source.check_dimensions(1024, 1024).is_ok());
        assert!(matches!(
            source.check_dimensions(512, 1024),
            Err(Error::SourceTooSmall { min_width: 1024, .. })
        ));
    }

    #[test]
    fn test_size_requires_headroom() {
        let mut source = AssetSource::new();
        source.file("logo.png").size(100, 50);

        assert!(source.check_dimensions(300, 150).is_ok());
        assert!(matches!(
            source.check_dimensions(200, 100),
            Err(Error::SourceTooSmall {
                min_width: 300,
                min_height: 150,
                ..
            })
        ));
    }

    #[test]
    fn test_huge_size_reports_too_small() {
        let mut source = AssetSource::new();
        source.file("logo.png").size(u32::MAX / 2, u32::MAX / 2);

        assert!(matches!(
            source.check_dimensions(4096, 4096),
            Err(Error::SourceTooSmall {
                min_width: u32::MAX,
                min_height: u32::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_aspect_tolerance() {
        let mut source = AssetSource::new();
        source.file("logo.png").size(100, 100);

        // 1.04 is inside the tolerance, 1.1 is not
        assert!(source.check_dimensions(312, 300).is_ok());
        assert!(matches!(
            source.check_dimensions(330, 300),
            Err(Error::AspectRatioMismatch { .. })
        ));
    }

    #[test]
    fn test_setters_reset_validation() {
        let mut source = AssetSource::new();
        source.file("a.png").min_dimension(16);
        source.validated = true;

        source.min_dimension(32);
        assert!(!source.is_validated());
    }

    #[test]
    fn test_apply_copies_location_and_state() {
        let mut parent = AssetSource::new();
        parent.file("parent.png").min_dimension(1024);
        parent.validated = true;

        let mut child = AssetSource::new();
        child.min_dimension(1024);
        child.apply(&parent);

        assert_eq!(child.key(), "parent.png");
        assert!(child.is_validated());
        assert_eq!(child.minimum_dimension(), 1024);
    }

    #[test]
    fn test_apply_does_not_trust_weaker_validation() {
        let mut parent = AssetSource::new();
        parent.file("parent.png").min_dimension(16);
        parent.validated = true;

        let mut child = AssetSource::new();
        child.min_dimension(1024);
        child.apply(&parent);

        assert!(!child.is_validated());
    }

    #[test]
    fn test_resolve_relative() {
        let mut source = AssetSource::new();
        source.file("art/icon.png");
        source.resolve_relative(Path::new("/project"));

        assert_eq!(source.key(), Path::new("/project/art/icon.png").to_string_lossy());
    }
}
