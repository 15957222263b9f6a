use super::source::SourceConfig;
use crate::bail;
use crate::catalog::{AppIconBuilder, AssetSource, IconPlatform};
use crate::error::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn default_icon_name() -> String {
    "AppIcon".to_string()
}

/// `[icon]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IconConfig {
    /// Set name, used as `<name>.appiconset`
    #[serde(default = "default_icon_name")]
    pub name: String,
    /// Parent artwork used by every platform without its own source
    #[serde(flatten)]
    pub source: SourceConfig,
    /// Enabled platforms (`phone`, `tablet`, `watch`, `car`, `mac`, `app-store`)
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Per-platform sources, `[icon.platform.<name>]`. Listing a platform
    /// here also enables it.
    #[serde(default, rename = "platform")]
    pub overrides: BTreeMap<String, PlatformConfig>,
}

/// `[icon.platform.<name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatformConfig {
    #[serde(flatten)]
    pub source: SourceConfig,
    /// Slot field to source, e.g. `pro = { file = "icon-pro.png" }`
    #[serde(default)]
    pub slots: BTreeMap<String, SourceConfig>,
}

fn apply_icon_source(config: &SourceConfig, source: &mut AssetSource, base: &Path) -> Result<()> {
    if config.size.is_some() {
        bail!("icon sources take min-dimension, not size");
    }
    config.apply_to(source, base)
}

fn platform_from(token: &str) -> Result<IconPlatform> {
    match IconPlatform::from_token(token) {
        Some(platform) => Ok(platform),
        None => bail!("unknown icon platform {:?}", token),
    }
}

impl IconConfig {
    pub fn to_builder(&self, base: &Path) -> Result<AppIconBuilder> {
        let mut builder = AppIconBuilder::new(&self.name);
        apply_icon_source(&self.source, builder.source(), base).context("icon source")?;

        for token in &self.platforms {
            builder.platform(platform_from(token)?);
        }

        for (token, config) in &self.overrides {
            let icons = builder.platform(platform_from(token)?);
            apply_icon_source(&config.source, icons.source(), base)
                .with_context(|| format!("{} icon source", token))?;

            for (field, slot) in &config.slots {
                apply_icon_source(slot, icons.slot(field)?, base)
                    .with_context(|| format!("{} {} icon source", token, field))?;
            }
        }

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> IconConfig {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_platforms_enabled() {
        let config = parse(
            r#"
            file = "icon.png"
            platforms = ["phone", "app-store"]

            [platform.tablet.slots]
            pro = { file = "icon-pro.png" }
            "#,
        );

        let builder = config.to_builder(Path::new("/art")).unwrap();
        assert_eq!(builder.name(), "AppIcon");
        assert_eq!(
            builder.enabled_platforms(),
            vec![
                IconPlatform::Phone,
                IconPlatform::Tablet,
                IconPlatform::AppStore
            ]
        );
    }

    #[test]
    fn test_unknown_platform() {
        let config = parse(
            r#"
            file = "icon.png"
            platforms = ["fridge"]
            "#,
        );
        assert!(config.to_builder(Path::new(".")).is_err());
    }

    #[test]
    fn test_unknown_slot() {
        let config = parse(
            r#"
            [platform.phone.slots]
            pro = { file = "icon-pro.png" }
            "#,
        );
        assert!(config.to_builder(Path::new(".")).is_err());
    }

    #[test]
    fn test_size_rejected() {
        let config = parse(
            r#"
            file = "icon.png"
            size = [1024, 1024]
            "#,
        );
        assert!(config.to_builder(Path::new(".")).is_err());
    }
}
