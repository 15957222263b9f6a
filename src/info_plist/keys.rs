//! Info.plist key names.

pub const CF_BUNDLE_DEVELOPMENT_REGION: &str = "CFBundleDevelopmentRegion";
pub const CF_BUNDLE_DISPLAY_NAME: &str = "CFBundleDisplayName";
pub const CF_BUNDLE_EXECUTABLE: &str = "CFBundleExecutable";
pub const CF_BUNDLE_IDENTIFIER: &str = "CFBundleIdentifier";
pub const CF_BUNDLE_INFO_DICTIONARY_VERSION: &str = "CFBundleInfoDictionaryVersion";
pub const CF_BUNDLE_NAME: &str = "CFBundleName";
pub const CF_BUNDLE_PACKAGE_TYPE: &str = "CFBundlePackageType";
pub const CF_BUNDLE_SHORT_VERSION_STRING: &str = "CFBundleShortVersionString";
pub const CF_BUNDLE_VERSION: &str = "CFBundleVersion";

pub const LS_REQUIRES_IPHONE_OS: &str = "LSRequiresIPhoneOS";
pub const NS_APP_TRANSPORT_SECURITY: &str = "NSAppTransportSecurity";

pub const UI_APPLICATION_SCENE_MANIFEST: &str = "UIApplicationSceneManifest";
pub const UI_LAUNCH_STORYBOARD_NAME: &str = "UILaunchStoryboardName";
pub const UI_MAIN_STORYBOARD_FILE: &str = "UIMainStoryboardFile";
pub const UI_REQUIRED_DEVICE_CAPABILITIES: &str = "UIRequiredDeviceCapabilities";
pub const UI_STATUS_BAR_HIDDEN: &str = "UIStatusBarHidden";
pub const UI_STATUS_BAR_STYLE: &str = "UIStatusBarStyle";
pub const UI_SUPPORTED_INTERFACE_ORIENTATIONS: &str = "UISupportedInterfaceOrientations";
pub const UI_SUPPORTED_INTERFACE_ORIENTATIONS_IPAD: &str = "UISupportedInterfaceOrientations~ipad";
pub const UI_VIEW_CONTROLLER_BASED_STATUS_BAR_APPEARANCE: &str =
    "UIViewControllerBasedStatusBarAppearance";

// App Transport Security
pub const ATS_ALLOWS_ARBITRARY_LOADS: &str = "NSAllowsArbitraryLoads";
pub const ATS_ALLOWS_ARBITRARY_LOADS_FOR_MEDIA: &str = "NSAllowsArbitraryLoadsForMedia";
pub const ATS_ALLOWS_ARBITRARY_LOADS_IN_WEB_CONTENT: &str = "NSAllowsArbitraryLoadsInWebContent";
pub const ATS_ALLOWS_LOCAL_NETWORKING: &str = "NSAllowsLocalNetworking";
pub const ATS_EXCEPTION_DOMAINS: &str = "NSExceptionDomains";
