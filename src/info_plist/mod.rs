//! Info.plist builder.
//!
//! [`InfoPlist`] collects the core bundle keys plus optional sections (App
//! Transport Security, orientations, privacy descriptions, device
//! capabilities and the scene manifest) and serializes them as an XML
//! property list. Values given to [`InfoPlist::set`] are applied last and
//! override anything the typed setters produced.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_assets::info_plist::{InfoPlist, Platform};
//!
//! # async fn example() -> kodegen_bundler_assets::Result<()> {
//! let mut plist = InfoPlist::new(Platform::Ios);
//! plist.defaults();
//! plist.bundle_name("Example").display_name("Example");
//! plist.scene_manifest().application().name("Default Configuration");
//! plist.privacy().camera("Scan documents");
//!
//! plist.write("Info.plist").await?;
//! # Ok(())
//! # }
//! ```

mod ats;
mod capabilities;
pub mod keys;
mod orientations;
mod privacy;
mod scene;

pub use ats::{AppTransportSecurity, ExceptionDomain};
pub use capabilities::{Capability, DeviceCapabilities};
pub use orientations::{Orientation, Orientations};
pub use privacy::{Permission, Privacy};
pub use scene::{SceneConfiguration, SceneManifest};

use crate::error::{Error, ErrorExt, Result};
use plist::{Dictionary, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Platform the property list targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Ios,
    Mac,
}

/// `UIStatusBarStyle` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Dark status bar for light backgrounds.
    Default,
    /// Light status bar for dark backgrounds.
    LightContent,
    DarkContent,
}

impl StatusBarStyle {
    pub fn value(self) -> &'static str {
        match self {
            StatusBarStyle::Default => "UIStatusBarStyleDefault",
            StatusBarStyle::LightContent => "UIStatusBarStyleLightContent",
            StatusBarStyle::DarkContent => "UIStatusBarStyleDarkContent",
        }
    }
}

/// Builder for an app's Info.plist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoPlist {
    platform: Platform,
    skip_validation: bool,

    bundle_identifier: String,
    bundle_name: String,
    display_name: String,
    development_region: String,
    executable_file: String,
    info_dictionary_version: String,
    package_type: String,
    version_short: String,
    version: String,

    requires_ios: Option<bool>,
    status_bar_style: Option<StatusBarStyle>,
    status_bar_hidden: Option<bool>,
    view_controller_based_status_bar: Option<bool>,
    launch_storyboard: Option<String>,
    main_storyboard: Option<String>,

    ats: Option<AppTransportSecurity>,
    orientations: Orientations,
    tablet_orientations: Orientations,
    privacy: Privacy,
    capabilities: DeviceCapabilities,
    scene: Option<SceneManifest>,

    custom: BTreeMap<String, Value>,
}

impl InfoPlist {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Default::default()
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Populates the values Xcode's app template starts from: build-setting
    /// placeholders for identifiers, version `1`, the `Main` storyboard,
    /// the default status bar, portrait orientation, `armv7` and arbitrary
    /// loads allowed.
    pub fn defaults(&mut self) -> &mut Self {
        self.development_region("$(DEVELOPMENT_LANGUAGE)")
            .bundle_id("$(PRODUCT_BUNDLE_IDENTIFIER)")
            .executable_file("$(EXECUTABLE_NAME)")
            .info_dictionary_version("6.0")
            .package_type("APPL")
            .version_short("$(MARKETING_VERSION)")
            .version("1")
            .requires_ios()
            .main_storyboard("Main")
            .view_controller_based_status_bar_appearance(true)
            .status_bar_style(StatusBarStyle::Default)
            .status_bar_hidden(false);
        self.capabilities().armv7();
        self.ats().allow_arbitrary_loads(true);
        self.orientations().portrait();
        self
    }

    /// Builds without checking required properties.
    pub fn skip_validation(&mut self) -> &mut Self {
        self.skip_validation = true;
        self
    }

    /// Reverse-DNS bundle identifier (`CFBundleIdentifier`).
    pub fn bundle_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.bundle_identifier = id.into();
        self
    }

    pub fn bundle_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.bundle_name = name.into();
        self
    }

    /// User-visible name on the Home screen.
    pub fn display_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.display_name = name.into();
        self
    }

    pub fn development_region(&mut self, region: impl Into<String>) -> &mut Self {
        self.development_region = region.into();
        self
    }

    pub fn executable_file(&mut self, file: impl Into<String>) -> &mut Self {
        self.executable_file = file.into();
        self
    }

    pub fn info_dictionary_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.info_dictionary_version = version.into();
        self
    }

    pub fn package_type(&mut self, package_type: impl Into<String>) -> &mut Self {
        self.package_type = package_type.into();
        self
    }

    /// Marketing version (`CFBundleShortVersionString`).
    pub fn version_short(&mut self, version: impl Into<String>) -> &mut Self {
        self.version_short = version.into();
        self
    }

    /// Build number (`CFBundleVersion`).
    pub fn version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = version.into();
        self
    }

    pub fn requires_ios(&mut self) -> &mut Self {
        self.requires_ios = Some(true);
        self
    }

    pub fn status_bar_style(&mut self, style: StatusBarStyle) -> &mut Self {
        self.status_bar_style = Some(style);
        self
    }

    pub fn status_bar_hidden(&mut self, hidden: bool) -> &mut Self {
        self.status_bar_hidden = Some(hidden);
        self
    }

    pub fn view_controller_based_status_bar_appearance(&mut self, value: bool) -> &mut Self {
        self.view_controller_based_status_bar = Some(value);
        self
    }

    pub fn launch_storyboard(&mut self, storyboard: impl Into<String>) -> &mut Self {
        self.launch_storyboard = Some(storyboard.into());
        self
    }

    pub fn main_storyboard(&mut self, storyboard: impl Into<String>) -> &mut Self {
        self.main_storyboard = Some(storyboard.into());
        self
    }

    pub fn ats(&mut self) -> &mut AppTransportSecurity {
        self.ats.get_or_insert_with(AppTransportSecurity::new)
    }

    pub fn orientations(&mut self) -> &mut Orientations {
        &mut self.orientations
    }

    /// Orientations used on iPad (`~ipad` key).
    pub fn tablet_orientations(&mut self) -> &mut Orientations {
        &mut self.tablet_orientations
    }

    pub fn privacy(&mut self) -> &mut Privacy {
        &mut self.privacy
    }

    pub fn capabilities(&mut self) -> &mut DeviceCapabilities {
        &mut self.capabilities
    }

    pub fn scene_manifest(&mut self) -> &mut SceneManifest {
        self.scene.get_or_insert_with(SceneManifest::new)
    }

    /// Sets an arbitrary key. Custom keys override builder-produced keys.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Reports the first missing required property.
    ///
    /// Status bar style and the scene manifest are only required on iOS.
    pub fn validate(&self) -> Result<()> {
        let ios = self.platform == Platform::Ios;
        let checks = [
            (self.bundle_identifier.is_empty(), "BundleID (CFBundleIdentifier)"),
            (self.bundle_name.is_empty(), "BundleName (CFBundleName)"),
            (
                ios && self.status_bar_style.is_none(),
                "StatusBarStyle (UIStatusBarStyle)",
            ),
            (self.display_name.is_empty(), "DisplayName (CFBundleDisplayName)"),
            (
                self.development_region.is_empty(),
                "DevelopmentRegion (CFBundleDevelopmentRegion)",
            ),
            (self.executable_file.is_empty(), "ExecutableFile (CFBundleExecutable)"),
            (
                self.info_dictionary_version.is_empty(),
                "InfoDictionaryVersion (CFBundleInfoDictionaryVersion)",
            ),
            (self.package_type.is_empty(), "PackageType (CFBundlePackageType)"),
            (
                self.version_short.is_empty(),
                "VersionShort (CFBundleShortVersionString)",
            ),
            (self.version.is_empty(), "Version (CFBundleVersion)"),
            (
                self.ats.is_none(),
                "AppTransportSecurity (NSAppTransportSecurity)",
            ),
            (
                ios && self.scene.is_none(),
                "SceneManifest (UIApplicationSceneManifest)",
            ),
        ];

        if let Some((_, property)) = checks.iter().find(|(missing, _)| *missing) {
            return Err(Error::MissingProperty(property.to_string()));
        }

        if let Some(scene) = &self.scene {
            scene.validate()?;
        }
        Ok(())
    }

    fn entries(&self) -> BTreeMap<String, Value> {
        let mut data = BTreeMap::new();

        let strings = [
            (keys::CF_BUNDLE_IDENTIFIER, &self.bundle_identifier),
            (keys::CF_BUNDLE_DISPLAY_NAME, &self.display_name),
            (keys::CF_BUNDLE_DEVELOPMENT_REGION, &self.development_region),
            (keys::CF_BUNDLE_EXECUTABLE, &self.executable_file),
            (
                keys::CF_BUNDLE_INFO_DICTIONARY_VERSION,
                &self.info_dictionary_version,
            ),
            (keys::CF_BUNDLE_NAME, &self.bundle_name),
            (keys::CF_BUNDLE_PACKAGE_TYPE, &self.package_type),
            (keys::CF_BUNDLE_SHORT_VERSION_STRING, &self.version_short),
            (keys::CF_BUNDLE_VERSION, &self.version),
        ];
        for (key, value) in strings {
            if !value.is_empty() {
                data.insert(key.to_string(), Value::from(value.clone()));
            }
        }

        if self.platform == Platform::Ios
            && let Some(requires) = self.requires_ios
        {
            data.insert(keys::LS_REQUIRES_IPHONE_OS.into(), requires.into());
        }
        if let Some(style) = self.status_bar_style {
            data.insert(keys::UI_STATUS_BAR_STYLE.into(), style.value().into());
        }
        if let Some(hidden) = self.status_bar_hidden {
            data.insert(keys::UI_STATUS_BAR_HIDDEN.into(), hidden.into());
        }
        if let Some(value) = self.view_controller_based_status_bar {
            data.insert(
                keys::UI_VIEW_CONTROLLER_BASED_STATUS_BAR_APPEARANCE.into(),
                value.into(),
            );
        }
        if let Some(storyboard) = &self.launch_storyboard {
            data.insert(keys::UI_LAUNCH_STORYBOARD_NAME.into(), storyboard.clone().into());
        }
        if let Some(storyboard) = &self.main_storyboard {
            data.insert(keys::UI_MAIN_STORYBOARD_FILE.into(), storyboard.clone().into());
        }

        if let Some(ats) = &self.ats {
            data.insert(keys::NS_APP_TRANSPORT_SECURITY.into(), ats.build());
        }
        if !self.orientations.is_empty() {
            data.insert(
                keys::UI_SUPPORTED_INTERFACE_ORIENTATIONS.into(),
                self.orientations.build(),
            );
        }
        if !self.tablet_orientations.is_empty() {
            data.insert(
                keys::UI_SUPPORTED_INTERFACE_ORIENTATIONS_IPAD.into(),
                self.tablet_orientations.build(),
            );
        }
        data.extend(self.privacy.entries());
        if !self.capabilities.is_empty() {
            data.insert(
                keys::UI_REQUIRED_DEVICE_CAPABILITIES.into(),
                self.capabilities.build(),
            );
        }
        if let Some(scene) = &self.scene {
            data.insert(keys::UI_APPLICATION_SCENE_MANIFEST.into(), scene.build());
        }

        for (key, value) in &self.custom {
            data.insert(key.clone(), value.clone());
        }
        data
    }

    /// Validates (unless skipped) and serializes to an XML property list.
    pub fn build(&self) -> Result<String> {
        if !self.skip_validation {
            self.validate()?;
        }

        let data = self.entries();
        if data.is_empty() {
            return Err(Error::GenericError("No Info.plist properties found".into()));
        }
        encode_xml(data)
    }

    /// Builds and writes the property list to `path`.
    pub async fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let xml = self.build()?;
        tokio::fs::write(path, xml)
            .await
            .fs_context("writing Info.plist", path)?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Serializes a sorted key/value map as an XML property list dictionary.
pub(crate) fn encode_xml(data: BTreeMap<String, Value>) -> Result<String> {
    let mut dict = Dictionary::new();
    for (key, value) in data {
        dict.insert(key, value);
    }

    let mut buffer = Vec::new();
    Value::Dictionary(dict).to_writer_xml(&mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| Error::GenericError(format!("property list is not valid UTF-8: {e}")))
}
