//! Per-platform app icon slot tables.

/// One required icon image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSlot {
    /// Override name, shared by slots that use the same artwork.
    pub field: &'static str,
    pub idiom: &'static str,
    pub scale: u32,
    /// Edge length in points.
    pub size: f64,
    pub role: Option<&'static str>,
    pub subtype: Option<&'static str>,
}

impl IconSlot {
    const fn new(field: &'static str, idiom: &'static str, scale: u32, size: f64) -> Self {
        Self {
            field,
            idiom,
            scale,
            size,
            role: None,
            subtype: None,
        }
    }

    const fn watch(role: &'static str, subtype: Option<&'static str>, field: &'static str, scale: u32, size: f64) -> Self {
        Self {
            field,
            idiom: "watch",
            scale,
            size,
            role: Some(role),
            subtype,
        }
    }

    /// Edge length in pixels.
    pub fn pixels(&self) -> u32 {
        (self.size * f64::from(self.scale)).round() as u32
    }
}

static PHONE: &[IconSlot] = &[
    IconSlot::new("notification", "iphone", 2, 20.0),
    IconSlot::new("notification", "iphone", 3, 20.0),
    IconSlot::new("settings", "iphone", 2, 29.0),
    IconSlot::new("settings", "iphone", 3, 29.0),
    IconSlot::new("spotlight", "iphone", 2, 40.0),
    IconSlot::new("spotlight", "iphone", 3, 40.0),
    IconSlot::new("app", "iphone", 2, 60.0),
    IconSlot::new("app", "iphone", 3, 60.0),
];

static TABLET: &[IconSlot] = &[
    IconSlot::new("notification", "ipad", 1, 20.0),
    IconSlot::new("notification", "ipad", 2, 20.0),
    IconSlot::new("settings", "ipad", 1, 29.0),
    IconSlot::new("settings", "ipad", 2, 29.0),
    IconSlot::new("spotlight", "ipad", 1, 40.0),
    IconSlot::new("spotlight", "ipad", 2, 40.0),
    IconSlot::new("app", "ipad", 1, 76.0),
    IconSlot::new("app", "ipad", 2, 76.0),
    IconSlot::new("pro", "ipad", 2, 83.5),
];

static WATCH: &[IconSlot] = &[
    IconSlot::watch("notificationCenter", Some("38mm"), "notification", 2, 24.0),
    IconSlot::watch("notificationCenter", Some("42mm"), "notification", 2, 27.5),
    IconSlot::watch("companionSettings", None, "settings", 2, 29.0),
    IconSlot::watch("companionSettings", None, "settings", 3, 29.0),
    IconSlot::watch("appLauncher", Some("38mm"), "home-screen", 2, 40.0),
    IconSlot::watch("appLauncher", Some("40mm"), "home-screen", 2, 44.0),
    IconSlot::watch("appLauncher", Some("44mm"), "home-screen", 2, 50.0),
    IconSlot::watch("quickLook", Some("38mm"), "short-look", 2, 86.0),
    IconSlot::watch("quickLook", Some("42mm"), "short-look", 2, 98.0),
    IconSlot::watch("quickLook", Some("44mm"), "short-look", 2, 108.0),
];

static MAC: &[IconSlot] = &[
    IconSlot::new("size-16", "mac", 1, 16.0),
    IconSlot::new("size-16", "mac", 2, 16.0),
    IconSlot::new("size-32", "mac", 1, 32.0),
    IconSlot::new("size-32", "mac", 2, 32.0),
    IconSlot::new("size-128", "mac", 1, 128.0),
    IconSlot::new("size-128", "mac", 2, 128.0),
    IconSlot::new("size-256", "mac", 1, 256.0),
    IconSlot::new("size-256", "mac", 2, 256.0),
    IconSlot::new("size-512", "mac", 1, 512.0),
    IconSlot::new("size-512", "mac", 2, 512.0),
];

static CAR_PLAY: &[IconSlot] = &[
    IconSlot::new("icon", "car", 2, 60.0),
    IconSlot::new("icon", "car", 3, 60.0),
];

static APP_STORE: &[IconSlot] = &[IconSlot::new("marketing", "ios-marketing", 1, 1024.0)];

/// Platforms an app icon set can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconPlatform {
    Phone,
    Tablet,
    Watch,
    CarPlay,
    Mac,
    AppStore,
}

impl IconPlatform {
    /// Every platform in output order.
    pub const ALL: [IconPlatform; 6] = [
        IconPlatform::Phone,
        IconPlatform::Tablet,
        IconPlatform::Watch,
        IconPlatform::CarPlay,
        IconPlatform::Mac,
        IconPlatform::AppStore,
    ];

    pub fn slots(self) -> &'static [IconSlot] {
        match self {
            IconPlatform::Phone => PHONE,
            IconPlatform::Tablet => TABLET,
            IconPlatform::Watch => WATCH,
            IconPlatform::CarPlay => CAR_PLAY,
            IconPlatform::Mac => MAC,
            IconPlatform::AppStore => APP_STORE,
        }
    }

    /// Idiom name used in messages and manifests.
    pub fn name(self) -> &'static str {
        match self {
            IconPlatform::Phone => "iphone",
            IconPlatform::Tablet => "ipad",
            IconPlatform::Watch => "watch",
            IconPlatform::CarPlay => "car",
            IconPlatform::Mac => "mac",
            IconPlatform::AppStore => "ios-marketing",
        }
    }

    /// Parses a manifest token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "phone" | "iphone" => Some(IconPlatform::Phone),
            "tablet" | "ipad" => Some(IconPlatform::Tablet),
            "watch" => Some(IconPlatform::Watch),
            "car" | "carplay" | "car-play" => Some(IconPlatform::CarPlay),
            "mac" => Some(IconPlatform::Mac),
            "app-store" | "appstore" | "ios-marketing" => Some(IconPlatform::AppStore),
            _ => None,
        }
    }

    /// Canonical `&'static` name of a slot field, if the platform has it.
    pub fn field(self, field: &str) -> Option<&'static str> {
        self.slots()
            .iter()
            .find(|slot| slot.field == field)
            .map(|slot| slot.field)
    }

    /// Largest pixel edge the given field is rendered at.
    pub fn max_pixels(self, field: &str) -> u32 {
        self.slots()
            .iter()
            .filter(|slot| slot.field == field)
            .map(IconSlot::pixels)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_counts() {
        let counts: Vec<usize> = IconPlatform::ALL.iter().map(|p| p.slots().len()).collect();
        assert_eq!(counts, vec![8, 9, 10, 2, 10, 1]);
    }

    #[test]
    fn test_pixel_sizes() {
        assert_eq!(TABLET[8].pixels(), 167);
        assert_eq!(WATCH[1].pixels(), 55);
        assert_eq!(APP_STORE[0].pixels(), 1024);
    }

    #[test]
    fn test_fields_and_max_pixels() {
        assert_eq!(IconPlatform::Phone.field("app"), Some("app"));
        assert_eq!(IconPlatform::Phone.field("pro"), None);
        assert_eq!(IconPlatform::Phone.max_pixels("app"), 180);
        assert_eq!(IconPlatform::Mac.max_pixels("size-512"), 1024);
    }

    #[test]
    fn test_from_token() {
        assert_eq!(IconPlatform::from_token("tablet"), Some(IconPlatform::Tablet));
        assert_eq!(IconPlatform::from_token("app-store"), Some(IconPlatform::AppStore));
        assert_eq!(IconPlatform::from_token("fridge"), None);
    }
}
