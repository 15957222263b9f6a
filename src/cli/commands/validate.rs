//! Validate command implementation.
//!
//! Runs every builder's validation and expansion without writing files.
//! Every failure is reported, not only the first.

use crate::cli::RuntimeConfig;
use crate::config::Manifest;
use crate::error::Result;

/// Prints one check result and returns whether it passed.
fn report<T>(config: &RuntimeConfig, label: &str, result: Result<T>, summary: impl Fn(&T) -> String) -> bool {
    match result {
        Ok(value) => {
            config.success_println(&format!("{label} ({})", summary(&value)));
            true
        }
        Err(e) => {
            config.error_println(&format!("{label}: {e}"));
            for suggestion in e.recovery_suggestions() {
                config.indent(&format!("• {suggestion}"));
            }
            false
        }
    }
}

/// Execute validate command
pub(super) async fn execute_validate(manifest_path: &std::path::Path, config: &RuntimeConfig) -> Result<i32> {
    config.verbose_println(&format!("Validating {}...", manifest_path.display()));

    let manifest = Manifest::load(manifest_path).await?;
    let mut checked = 0usize;
    let mut failed = 0usize;

    for color in &manifest.color {
        let result = color.to_builder().and_then(|builder| builder.build());
        checked += 1;
        if !report(config, &format!("{}.colorset", color.name), result, |c| {
            format!("{} colors", c.colors.len())
        }) {
            failed += 1;
        }
    }

    for image in &manifest.image {
        let result = match image.to_builder(&manifest.base_dir) {
            Ok(mut builder) => builder.build().await,
            Err(e) => Err(e),
        };
        checked += 1;
        if !report(config, &format!("{}.imageset", image.name), result, |o| {
            format!("{} images", o.records.len())
        }) {
            failed += 1;
        }
    }

    if let Some(icon) = &manifest.icon {
        let result = match icon.to_builder(&manifest.base_dir) {
            Ok(mut builder) => builder.build().await,
            Err(e) => Err(e),
        };
        checked += 1;
        if !report(config, &format!("{}.appiconset", icon.name), result, |o| {
            format!("{} images", o.records.len())
        }) {
            failed += 1;
        }
    }

    if let Some(plist) = &manifest.info_plist {
        let result = plist.to_builder().and_then(|builder| builder.build());
        checked += 1;
        if !report(config, "Info.plist", result, |xml| format!("{} bytes", xml.len())) {
            failed += 1;
        }
    }

    if let Some(entitlements) = &manifest.entitlements {
        let result = entitlements.to_builder().and_then(|builder| builder.build());
        checked += 1;
        if !report(config, "entitlements", result, |xml| format!("{} bytes", xml.len())) {
            failed += 1;
        }
    }

    config.println("");
    if failed > 0 {
        config.error_println(&format!("{failed} of {checked} checks failed"));
        return Ok(1);
    }

    if checked == 0 {
        config.warning_println("Manifest does not describe any assets");
    } else {
        config.success_println(&format!("All {checked} checks passed"));
    }
    Ok(0)
}
