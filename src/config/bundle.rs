//! `[info-plist]` and `[entitlements]` manifest tables.

use crate::bail;
use crate::entitlements::{ApsEnvironment, DataProtection, Entitlements};
use crate::error::Result;
use crate::info_plist::{Capability, InfoPlist, Orientation, Orientations, Permission, Platform, StatusBarStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Converts a TOML value into the equivalent property list value.
/// Datetimes are written as strings.
pub fn plist_value(value: &toml::Value) -> plist::Value {
    match value {
        toml::Value::String(s) => plist::Value::String(s.clone()),
        toml::Value::Integer(i) => plist::Value::Integer((*i).into()),
        toml::Value::Float(f) => plist::Value::Real(*f),
        toml::Value::Boolean(b) => plist::Value::Boolean(*b),
        toml::Value::Datetime(d) => plist::Value::String(d.to_string()),
        toml::Value::Array(items) => plist::Value::Array(items.iter().map(plist_value).collect()),
        toml::Value::Table(table) => {
            let mut dict = plist::Dictionary::new();
            for (key, value) in table {
                dict.insert(key.clone(), plist_value(value));
            }
            plist::Value::Dictionary(dict)
        }
    }
}

/// `[info-plist.scene]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneConfig {
    pub name: String,
    pub class_name: Option<String>,
    pub delegate: Option<String>,
    pub storyboard: Option<String>,
    #[serde(default)]
    pub multiple_windows: bool,
}

/// `[info-plist]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InfoPlistConfig {
    /// Output path, relative to the manifest directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// `ios` (default) or `mac`
    pub platform: Option<String>,
    /// Start from the Xcode app template values
    #[serde(default)]
    pub defaults: bool,
    #[serde(default)]
    pub skip_validation: bool,

    pub bundle_id: Option<String>,
    pub bundle_name: Option<String>,
    pub display_name: Option<String>,
    pub development_region: Option<String>,
    pub executable: Option<String>,
    pub package_type: Option<String>,
    pub version: Option<String>,
    pub version_short: Option<String>,
    pub launch_storyboard: Option<String>,
    pub main_storyboard: Option<String>,

    /// `default`, `light-content` or `dark-content`
    pub status_bar_style: Option<String>,
    pub status_bar_hidden: Option<bool>,
    pub allow_arbitrary_loads: Option<bool>,

    #[serde(default)]
    pub orientations: Vec<String>,
    #[serde(default)]
    pub tablet_orientations: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Permission token to usage description
    #[serde(default)]
    pub privacy: BTreeMap<String, String>,
    pub scene: Option<SceneConfig>,

    /// Raw keys applied after everything else
    #[serde(default)]
    pub set: BTreeMap<String, toml::Value>,
}

fn orientations_from(tokens: &[String], orientations: &mut Orientations) -> Result<()> {
    for token in tokens {
        orientations.add(Orientation::from_token(token)?);
    }
    Ok(())
}

impl InfoPlistConfig {
    pub fn output_path(&self, base: &Path) -> PathBuf {
        base.join(self.path.as_deref().unwrap_or(Path::new("Info.plist")))
    }

    pub fn to_builder(&self) -> Result<InfoPlist> {
        let platform = match self.platform.as_deref() {
            None | Some("ios") => Platform::Ios,
            Some("mac") | Some("macos") => Platform::Mac,
            Some(other) => bail!("unknown plist platform {:?}", other),
        };

        let mut plist = InfoPlist::new(platform);
        if self.defaults {
            plist.defaults();
        }
        if self.skip_validation {
            plist.skip_validation();
        }

        if let Some(id) = &self.bundle_id {
            plist.bundle_id(id.clone());
        }
        if let Some(name) = &self.bundle_name {
            plist.bundle_name(name.clone());
        }
        if let Some(name) = &self.display_name {
            plist.display_name(name.clone());
        }
        if let Some(region) = &self.development_region {
            plist.development_region(region.clone());
        }
        if let Some(executable) = &self.executable {
            plist.executable_file(executable.clone());
        }
        if let Some(package_type) = &self.package_type {
            plist.package_type(package_type.clone());
        }
        if let Some(version) = &self.version {
            plist.version(version.clone());
        }
        if let Some(version) = &self.version_short {
            plist.version_short(version.clone());
        }
        if let Some(storyboard) = &self.launch_storyboard {
            plist.launch_storyboard(storyboard.clone());
        }
        if let Some(storyboard) = &self.main_storyboard {
            plist.main_storyboard(storyboard.clone());
        }

        if let Some(style) = &self.status_bar_style {
            plist.status_bar_style(match style.as_str() {
                "default" => StatusBarStyle::Default,
                "light-content" => StatusBarStyle::LightContent,
                "dark-content" => StatusBarStyle::DarkContent,
                other => bail!("unknown status bar style {:?}", other),
            });
        }
        if let Some(hidden) = self.status_bar_hidden {
            plist.status_bar_hidden(hidden);
        }
        if let Some(allow) = self.allow_arbitrary_loads {
            plist.ats().allow_arbitrary_loads(allow);
        }

        orientations_from(&self.orientations, plist.orientations())?;
        orientations_from(&self.tablet_orientations, plist.tablet_orientations())?;
        for token in &self.capabilities {
            plist.capabilities().require(Capability::from_token(token)?);
        }
        for (token, description) in &self.privacy {
            let Some(permission) = Permission::from_token(token) else {
                bail!("unknown privacy permission {:?}", token);
            };
            plist.privacy().describe(permission, description.clone());
        }

        if let Some(scene) = &self.scene {
            let manifest = plist.scene_manifest();
            manifest.multiple_windows(scene.multiple_windows);
            let application = manifest.application();
            application.name(scene.name.clone());
            if let Some(class_name) = &scene.class_name {
                application.class_name(class_name.clone());
            }
            if let Some(delegate) = &scene.delegate {
                application.delegate_class_name(delegate.clone());
            }
            if let Some(storyboard) = &scene.storyboard {
                application.storyboard(storyboard.clone());
            }
        }

        for (key, value) in &self.set {
            plist.set(key.clone(), plist_value(value));
        }
        Ok(plist)
    }
}

/// `[entitlements]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EntitlementsConfig {
    /// Output path, relative to the manifest directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// `development` or `production`
    pub aps: Option<String>,
    /// `complete`, `complete-unless-open`,
    /// `complete-until-first-user-authentication` or `none`
    pub data_protection: Option<String>,
    #[serde(default)]
    pub set: BTreeMap<String, toml::Value>,
}

impl EntitlementsConfig {
    pub fn output_path(&self, base: &Path) -> PathBuf {
        base.join(self.path.as_deref().unwrap_or(Path::new("App.entitlements")))
    }

    pub fn to_builder(&self) -> Result<Entitlements> {
        let mut entitlements = Entitlements::new();
        if let Some(aps) = &self.aps {
            entitlements.aps(ApsEnvironment::from_token(aps)?);
        }
        if let Some(level) = &self.data_protection {
            entitlements.data_protection(DataProtection::from_token(level)?);
        }
        for (key, value) in &self.set {
            entitlements.set(key.clone(), plist_value(value));
        }
        Ok(entitlements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_plist_config() {
        let config: InfoPlistConfig = toml::from_str(
            r#"
            defaults = true
            bundle-name = "Example"
            display-name = "Example"
            status-bar-style = "light-content"
            orientations = ["landscape-left"]
            capabilities = ["metal"]

            [privacy]
            camera = "Scan documents"

            [scene]
            name = "Default Configuration"
            delegate = "SceneDelegate"

            [set]
            ITSAppUsesNonExemptEncryption = false
            "#,
        )
        .unwrap();

        let xml = config.to_builder().unwrap().build().unwrap();
        assert!(xml.contains("UIStatusBarStyleLightContent"));
        assert!(xml.contains("UIInterfaceOrientationLandscapeLeft"));
        assert!(xml.contains("<string>metal</string>"));
        assert!(xml.contains("NSCameraUsageDescription"));
        assert!(xml.contains("SceneDelegate"));
        assert!(xml.contains("ITSAppUsesNonExemptEncryption"));
        assert_eq!(config.output_path(Path::new("/app")), PathBuf::from("/app/Info.plist"));
    }

    #[test]
    fn test_unknown_privacy_token() {
        let config: InfoPlistConfig = toml::from_str(
            r#"
            [privacy]
            telepathy = "Read minds"
            "#,
        )
        .unwrap();
        assert!(config.to_builder().is_err());
    }

    #[test]
    fn test_entitlements_config() {
        let config: EntitlementsConfig = toml::from_str(
            r#"
            path = "Example.entitlements"
            aps = "production"
            data-protection = "complete"

            [set]
            "com.apple.security.application-groups" = ["group.example"]
            "#,
        )
        .unwrap();

        let xml = config.to_builder().unwrap().build().unwrap();
        assert!(xml.contains("<string>production</string>"));
        assert!(xml.contains("NSFileProtectionComplete"));
        assert!(xml.contains("<string>group.example</string>"));
        assert_eq!(
            config.output_path(Path::new("/app")),
            PathBuf::from("/app/Example.entitlements")
        );
    }

    #[test]
    fn test_plist_value_nested() {
        let value: toml::Value = toml::from_str("a = { b = [1, 2.5, true] }").unwrap();
        let converted = plist_value(&value);
        let inner = converted
            .as_dictionary()
            .and_then(|d| d.get("a"))
            .and_then(plist::Value::as_dictionary)
            .and_then(|d| d.get("b"))
            .and_then(plist::Value::as_array)
            .unwrap();

        assert_eq!(inner.len(), 3);
        assert_eq!(inner[1].as_real(), Some(2.5));
        assert_eq!(inner[2].as_boolean(), Some(true));
    }
}
