//! Privacy usage descriptions.
//!
//! Each [`Permission`] maps to the usage-description key the OS reads when
//! prompting the user.

use plist::Value;
use std::collections::BTreeMap;

/// A permission that requires a user-facing usage description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    AppleEvents,
    AppleMusic,
    BluetoothAlways,
    BluetoothPeripheral,
    Calendar,
    CallKit,
    Camera,
    Contacts,
    DesktopFolder,
    DocumentsFolder,
    DownloadsFolder,
    DriverExtension,
    FaceId,
    FileProviderDomain,
    FileProviderPresence,
    HealthRecords,
    HealthShare,
    HealthUpdate,
    HomeKit,
    Location,
    LocationAlways,
    LocationAlwaysAndWhenInUse,
    LocationWhenInUse,
    MediaLibrary,
    Microphone,
    Motion,
    NetworkVolumes,
    NfcReader,
    PhotoLibrary,
    PhotoLibraryAdd,
    Reminders,
    RemovableVolumes,
    Siri,
    SpeechRecognition,
    SystemAdministration,
    SystemExtension,
    TvProvider,
}

/// Manifest token and plist key, indexed by `Permission as usize`.
static PRIVACY_KEYS: &[(&str, &str)] = &[
    ("apple-events", "NSAppleEventsUsageDescription"),
    ("apple-music", "NSAppleMusicUsageDescription"),
    ("bluetooth-always", "NSBluetoothAlwaysUsageDescription"),
    ("bluetooth-peripheral", "NSBluetoothPeripheralUsageDescription"),
    ("calendar", "NSCalendarsUsageDescription"),
    ("callkit", "NSVoIPUsageDescription"),
    ("camera", "NSCameraUsageDescription"),
    ("contacts", "NSContactsUsageDescription"),
    ("desktop-folder", "NSDesktopFolderUsageDescription"),
    ("documents-folder", "NSDocumentsFolderUsageDescription"),
    ("downloads-folder", "NSDownloadsFolderUsageDescription"),
    ("driver-extension", "OSBundleUsageDescription"),
    ("face-id", "NSFaceIDUsageDescription"),
    ("file-provider-domain", "NSFileProviderDomainUsageDescription"),
    ("file-provider-presence", "NSFileProviderPresenceUsageDescription"),
    ("health-records", "NSHealthClinicalHealthRecordsShareUsageDescription"),
    ("health-share", "NSHealthShareUsageDescription"),
    ("health-update", "NSHealthUpdateUsageDescription"),
    ("homekit", "NSHomeKitUsageDescription"),
    ("location", "NSLocationUsageDescription"),
    ("location-always", "NSLocationAlwaysUsageDescription"),
    (
        "location-always-and-when-in-use",
        "NSLocationAlwaysAndWhenInUseUsageDescription",
    ),
    ("location-when-in-use", "NSLocationWhenInUseUsageDescription"),
    ("media-library", "kTCCServiceMediaLibrary"),
    ("microphone", "NSMicrophoneUsageDescription"),
    ("motion", "NSMotionUsageDescription"),
    ("network-volumes", "NSNetworkVolumesUsageDescription"),
    ("nfc-reader", "NFCReaderUsageDescription"),
    ("photo-library", "NSPhotoLibraryUsageDescription"),
    ("photo-library-add", "NSPhotoLibraryAddUsageDescription"),
    ("reminders", "NSRemindersUsageDescription"),
    ("removable-volumes", "NSRemovableVolumesUsageDescription"),
    ("siri", "NSSiriUsageDescription"),
    ("speech-recognition", "NSSpeechRecognitionUsageDescription"),
    ("system-administration", "NSSystemAdministrationUsageDescription"),
    ("system-extension", "NSSystemExtensionUsageDescription"),
    ("tv-provider", "NSVideoSubscriberAccountUsageDescription"),
];

impl Permission {
    const ALL: [Permission; 37] = [
        Permission::AppleEvents,
        Permission::AppleMusic,
        Permission::BluetoothAlways,
        Permission::BluetoothPeripheral,
        Permission::Calendar,
        Permission::CallKit,
        Permission::Camera,
        Permission::Contacts,
        Permission::DesktopFolder,
        Permission::DocumentsFolder,
        Permission::DownloadsFolder,
        Permission::DriverExtension,
        Permission::FaceId,
        Permission::FileProviderDomain,
        Permission::FileProviderPresence,
        Permission::HealthRecords,
        Permission::HealthShare,
        Permission::HealthUpdate,
        Permission::HomeKit,
        Permission::Location,
        Permission::LocationAlways,
        Permission::LocationAlwaysAndWhenInUse,
        Permission::LocationWhenInUse,
        Permission::MediaLibrary,
        Permission::Microphone,
        Permission::Motion,
        Permission::NetworkVolumes,
        Permission::NfcReader,
        Permission::PhotoLibrary,
        Permission::PhotoLibraryAdd,
        Permission::Reminders,
        Permission::RemovableVolumes,
        Permission::Siri,
        Permission::SpeechRecognition,
        Permission::SystemAdministration,
        Permission::SystemExtension,
        Permission::TvProvider,
    ];

    /// Info.plist key holding this permission's usage description.
    pub fn key(self) -> &'static str {
        PRIVACY_KEYS[self as usize].1
    }

    pub fn token(self) -> &'static str {
        PRIVACY_KEYS[self as usize].0
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }
}

/// Usage descriptions keyed by plist key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Privacy {
    values: BTreeMap<String, String>,
}

impl Privacy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describe(&mut self, permission: Permission, description: impl Into<String>) -> &mut Self {
        self.values.insert(permission.key().to_string(), description.into());
        self
    }

    /// Sets a usage description under a key with no [`Permission`] variant.
    pub fn set(&mut self, key: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), description.into());
        self
    }

    pub fn camera(&mut self, description: impl Into<String>) -> &mut Self {
        self.describe(Permission::Camera, description)
    }

    pub fn microphone(&mut self, description: impl Into<String>) -> &mut Self {
        self.describe(Permission::Microphone, description)
    }

    pub fn photo_library(&mut self, description: impl Into<String>) -> &mut Self {
        self.describe(Permission::PhotoLibrary, description)
    }

    pub fn location_when_in_use(&mut self, description: impl Into<String>) -> &mut Self {
        self.describe(Permission::LocationWhenInUse, description)
    }

    pub fn face_id(&mut self, description: impl Into<String>) -> &mut Self {
        self.describe(Permission::FaceId, description)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (String, Value)> + '_ {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value.clone())))
    }
}
