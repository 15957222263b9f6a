//! Raster generation for image sets and app icons.
//!
//! Every output record names a source, a pixel size and a file name. Sources
//! are decoded once per call no matter how many records use them, then each
//! record is resampled, encoded as PNG and written in production order.

mod loader;
mod resample;

pub use loader::{ImageLoader, SourceLoader};
pub use resample::{LanczosResampler, Resampler};

use crate::catalog::source::AssetSource;
use crate::error::{Context, Error, ErrorExt, Result};
use image::DynamicImage;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// One PNG to produce.
#[derive(Debug, Clone, Copy)]
pub struct RasterTarget<'a> {
    pub source: &'a AssetSource,
    pub width: u32,
    pub height: u32,
    /// File name without the `.png` extension.
    pub filename: &'a str,
}

/// Decodes, resamples and writes every target into `dir`.
///
/// Returns the number of files written.
pub async fn write_rasters<'a, L, R>(
    loader: &L,
    resampler: &R,
    targets: impl IntoIterator<Item = RasterTarget<'a>>,
    dir: &Path,
) -> Result<usize>
where
    L: ImageLoader,
    R: Resampler,
{
    let mut cache: HashMap<String, Arc<DynamicImage>> = HashMap::new();
    let mut written = 0;

    for target in targets {
        let key = loader.key(target.source);
        let image = match cache.get(&key) {
            Some(image) => Arc::clone(image),
            None => {
                let image = Arc::new(
                    loader
                        .load(target.source)
                        .await
                        .with_context(|| format!("loading image source {}", target.source.display_name()))?,
                );
                cache.insert(key, Arc::clone(&image));
                image
            }
        };

        let resampler = resampler.clone();
        let (width, height) = (target.width, target.height);
        let png = tokio::task::spawn_blocking(move || {
            let resized = resampler.resize(&image, width, height);
            resampler.encode_png(&resized)
        })
        .await
        .map_err(|e| Error::GenericError(format!("Resampling task failed: {}", e)))??;

        let path = dir.join(format!("{}.png", target.filename));
        tokio::fs::write(&path, png)
            .await
            .fs_context("writing image", &path)?;
        log::debug!("Wrote {}x{} {}", width, height, path.display());
        written += 1;
    }

    log::debug!("Decoded {} unique sources for {} images", cache.len(), written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Loader that synthesizes a solid image and counts decodes.
    #[derive(Default)]
    struct CountingLoader {
        loads: AtomicUsize,
    }

    impl ImageLoader for CountingLoader {
        async fn dimensions(&self, _source: &AssetSource) -> Result<(u32, u32)> {
            Ok((300, 300))
        }

        async fn load(&self, _source: &AssetSource) -> Result<DynamicImage> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(DynamicImage::new_rgba8(300, 300))
        }
    }

    #[tokio::test]
    async fn test_each_source_decodes_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = AssetSource::new();
        a.file("a.png");
        let mut b = AssetSource::new();
        b.file("b.png");

        let targets = [
            RasterTarget { source: &a, width: 10, height: 10, filename: "a-1" },
            RasterTarget { source: &a, width: 20, height: 20, filename: "a-2" },
            RasterTarget { source: &b, width: 30, height: 15, filename: "b-1" },
        ];

        let loader = CountingLoader::default();
        let written = write_rasters(&loader, &LanczosResampler, targets, dir.path())
            .await
            .unwrap();

        assert_eq!(written, 3);
        assert_eq!(loader.loads.load(Ordering::SeqCst), 2);

        let b1 = image::open(dir.path().join("b-1.png")).unwrap();
        assert_eq!((b1.width(), b1.height()), (30, 15));
    }
}
