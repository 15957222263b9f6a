//! Source image loading from local files and HTTP(S) URLs.
//!
//! Remote sources are downloaded into a [`tempfile::NamedTempFile`] before
//! decoding. The temporary file is owned by the decoding task and removed
//! when it finishes, whether decoding succeeded or not.

use crate::bail;
use crate::catalog::source::{AssetSource, SourceLocation};
use crate::error::{Error, ErrorExt, Result};
use image::{DynamicImage, ImageReader};
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Loads and inspects source images.
///
/// Implementations decide how sources are fetched; the default
/// [`ImageLoader::validate`] checks the decoded dimensions against the
/// source's constraints.
pub trait ImageLoader: Send + Sync {
    /// Cache key for the source. Empty for an empty source.
    fn key(&self, source: &AssetSource) -> String {
        source.key()
    }

    /// Reads only the image header and returns `(width, height)`.
    fn dimensions(&self, source: &AssetSource) -> impl Future<Output = Result<(u32, u32)>> + Send;

    /// Fully decodes the image.
    fn load(&self, source: &AssetSource) -> impl Future<Output = Result<DynamicImage>> + Send;

    /// Dimension and aspect ratio checks.
    fn validate(&self, source: &AssetSource) -> impl Future<Output = Result<()>> + Send {
        async move {
            let (width, height) = self.dimensions(source).await?;
            source.check_dimensions(width, height)
        }
    }
}

/// Loader for file paths and HTTP(S) URLs.
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    client: reqwest::Client,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured HTTP client (proxies, timeouts, user agent).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Downloads `url` into a temporary file named after its last path segment.
    async fn download(&self, url: &str) -> Result<NamedTempFile> {
        let parsed = url::Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("unsupported URL scheme '{}' for {}", parsed.scheme(), url);
        }
        log::info!("Downloading {}", parsed);

        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;

        let suffix = parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|name| !name.is_empty())
            .map(|name| format!("_{name}"))
            .unwrap_or_default();

        let mut file = tempfile::Builder::new()
            .prefix("asset_")
            .suffix(&suffix)
            .tempfile()?;
        file.write_all(&bytes)
            .fs_context("writing downloaded image", file.path())?;
        file.flush()?;

        log::debug!("Downloaded {} bytes to {}", bytes.len(), file.path().display());
        Ok(file)
    }

    async fn fetch(&self, source: &AssetSource) -> Result<Fetched> {
        match source.location() {
            Some(SourceLocation::File(path)) => Ok(Fetched::Local(path.clone())),
            Some(SourceLocation::Url(url)) => Ok(Fetched::Remote(self.download(url).await?)),
            None => Err(Error::MissingSource("image source".to_string())),
        }
    }
}

/// A source made available on the local filesystem.
enum Fetched {
    Local(PathBuf),
    Remote(NamedTempFile),
}

impl Fetched {
    fn path(&self) -> &Path {
        match self {
            Fetched::Local(path) => path,
            Fetched::Remote(file) => file.path(),
        }
    }
}

fn open(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>> {
    ImageReader::open(path)
        .fs_context("opening image", path)?
        .with_guessed_format()
        .fs_context("reading image header", path)
}

impl ImageLoader for SourceLoader {
    async fn dimensions(&self, source: &AssetSource) -> Result<(u32, u32)> {
        let fetched = self.fetch(source).await?;

        tokio::task::spawn_blocking(move || -> Result<(u32, u32)> {
            Ok(open(fetched.path())?.into_dimensions()?)
        })
        .await
        .map_err(|e| Error::GenericError(format!("Image inspection task failed: {}", e)))?
    }

    async fn load(&self, source: &AssetSource) -> Result<DynamicImage> {
        let fetched = self.fetch(source).await?;

        tokio::task::spawn_blocking(move || -> Result<DynamicImage> {
            let image = open(fetched.path())?.decode()?;
            log::debug!(
                "Decoded {}x{} image from {}",
                image.width(),
                image.height(),
                fetched.path().display()
            );
            Ok(image)
        })
        .await
        .map_err(|e| Error::GenericError(format!("Image decode task failed: {}", e)))?
    }
}
