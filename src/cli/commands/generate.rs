//! Generate command implementation.
//!
//! Writes every set in the manifest into the output catalog, then the
//! Info.plist and entitlements files when the manifest has those tables.

use crate::cli::RuntimeConfig;
use crate::config::Manifest;
use crate::error::{Context, Error, ErrorExt, Result};
use std::path::{Path, PathBuf};

/// Refuses to replace an existing file unless `overwrite` is set.
async fn check_target(path: &Path, overwrite: bool) -> Result<()> {
    let exists = tokio::fs::try_exists(path)
        .await
        .fs_context("checking output file", path)?;
    if exists && !overwrite {
        return Err(Error::DestinationExists(path.to_path_buf()));
    }
    Ok(())
}

/// Execute generate command
pub(super) async fn execute_generate(
    manifest_path: &Path,
    out: &Path,
    overwrite: bool,
    config: &RuntimeConfig,
) -> Result<i32> {
    let manifest = Manifest::load(manifest_path).await?;
    if manifest.is_empty() {
        config.warning_println(&format!(
            "{} does not describe any assets",
            manifest_path.display()
        ));
        return Ok(0);
    }

    tokio::fs::create_dir_all(out)
        .await
        .fs_context("creating output directory", out)?;

    let mut written: Vec<PathBuf> = Vec::new();

    if !manifest.color.is_empty() {
        config.section("Color sets");
    }
    for color in &manifest.color {
        let builder = color.to_builder()?;
        let dir = builder.save_to(out, overwrite).await?;
        config.success_println(&format!("{}.colorset", builder.name()));
        written.push(dir);
    }

    if !manifest.image.is_empty() {
        config.section("Image sets");
    }
    for image in &manifest.image {
        let mut builder = image.to_builder(&manifest.base_dir)?;
        config.progress(&format!("Rendering {}.imageset", builder.name()));
        let dir = builder.save_to(out, overwrite).await?;
        config.success_println(&format!("{}.imageset", builder.name()));
        written.push(dir);
    }

    if let Some(icon) = &manifest.icon {
        config.section("App icon");
        let mut builder = icon.to_builder(&manifest.base_dir)?;
        for platform in builder.enabled_platforms() {
            config.verbose_println(&format!("{} icons enabled", platform.name()));
        }
        config.progress(&format!("Rendering {}.appiconset", builder.name()));
        let dir = builder.save_to(out, overwrite).await?;
        config.success_println(&format!("{}.appiconset", builder.name()));
        written.push(dir);
    }

    if manifest.info_plist.is_some() || manifest.entitlements.is_some() {
        config.section("Bundle files");
    }
    if let Some(plist) = &manifest.info_plist {
        let path = plist.output_path(&manifest.base_dir);
        check_target(&path, overwrite).await?;
        plist
            .to_builder()?
            .write(&path)
            .await
            .context("generating Info.plist")?;
        config.success_println(&path.display().to_string());
        written.push(path);
    }
    if let Some(entitlements) = &manifest.entitlements {
        let path = entitlements.output_path(&manifest.base_dir);
        check_target(&path, overwrite).await?;
        entitlements
            .to_builder()?
            .write(&path)
            .await
            .context("generating entitlements")?;
        config.success_println(&path.display().to_string());
        written.push(path);
    }

    config.println("");
    config.success_println(&format!(
        "Generated {} artifacts in {}",
        written.len(),
        out.display()
    ));
    for path in &written {
        config.verbose_println(&path.display().to_string());
    }

    Ok(0)
}
