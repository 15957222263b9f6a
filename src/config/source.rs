use crate::catalog::AssetSource;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Image source fields shared by image variants and icons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceConfig {
    /// Local image path, relative to the manifest directory
    pub file: Option<PathBuf>,
    /// HTTP(S) image URL
    pub url: Option<String>,
    /// Size at 1x in points, `[width, height]`
    pub size: Option<[u32; 2]>,
    /// Minimum pixel edge the source must have
    pub min_dimension: Option<u32>,
}

impl SourceConfig {
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.url.is_none()
    }

    /// Copies the configured fields onto `source`.
    pub fn apply_to(&self, source: &mut AssetSource, base: &Path) -> Result<()> {
        match (&self.file, &self.url) {
            (Some(_), Some(_)) => {
                return Err(Error::GenericError(
                    "specify either file or url for an image source, not both".into(),
                ));
            }
            (Some(file), None) => {
                source.file(file.clone());
                source.resolve_relative(base);
            }
            (None, Some(url)) => {
                url::Url::parse(url)?;
                source.url(url.clone());
            }
            (None, None) => {}
        }

        if let Some(dimension) = self.min_dimension {
            source.min_dimension(dimension);
        }
        if let Some([width, height]) = self.size {
            source.size(width, height);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SourceLocation;

    #[test]
    fn test_relative_file_resolves_against_base() {
        let config = SourceConfig {
            file: Some("art/logo.png".into()),
            size: Some([64, 32]),
            ..Default::default()
        };

        let mut source = AssetSource::new();
        config.apply_to(&mut source, Path::new("/project")).unwrap();

        assert_eq!(
            source.location(),
            Some(&SourceLocation::File(PathBuf::from("/project/art/logo.png")))
        );
        assert_eq!(source.desired_size(), Some((64, 32)));
    }

    #[test]
    fn test_file_and_url_conflict() {
        let config = SourceConfig {
            file: Some("logo.png".into()),
            url: Some("https://example.com/logo.png".into()),
            ..Default::default()
        };

        assert!(config.apply_to(&mut AssetSource::new(), Path::new(".")).is_err());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = SourceConfig {
            url: Some("not a url".into()),
            ..Default::default()
        };

        assert!(matches!(
            config.apply_to(&mut AssetSource::new(), Path::new(".")),
            Err(Error::UrlParse(_))
        ));
    }
}
