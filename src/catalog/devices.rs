//! Device idiom selection for catalog entries.

use crate::bail;
use crate::error::Result;

/// Idiom token used by Apple for assets that apply to every device.
pub const UNIVERSAL: &str = "universal";

/// Subtype emitted for iPad variants that run on the Mac through Catalyst.
pub const MAC_CATALYST: &str = "mac-catalyst";

/// Set of device idioms an asset or color applies to.
///
/// Setters are idempotent and the emitted idiom order is fixed regardless of
/// the order in which they were called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Devices {
    universal: bool,
    iphone: bool,
    ipad: bool,
    catalyst: bool,
    car_play: bool,
    apple_watch: bool,
    apple_tv: bool,
    mac: bool,
}

impl Devices {
    /// Creates an empty device set. At least one device must be added before
    /// the set validates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every device, including the `universal` default of a new
    /// definition.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    /// Asset works on any device and platform.
    pub fn universal(&mut self) -> &mut Self {
        self.universal = true;
        self
    }

    /// Asset is for iPhone devices.
    pub fn iphone(&mut self) -> &mut Self {
        self.iphone = true;
        self
    }

    /// Asset is for iPad devices.
    pub fn ipad(&mut self) -> &mut Self {
        self.ipad = true;
        self
    }

    /// Asset is for iPad and for Mac devices running the iPad app via Catalyst.
    pub fn catalyst(&mut self) -> &mut Self {
        self.ipad = true;
        self.catalyst = true;
        self
    }

    /// Asset is for CarPlay displays.
    pub fn car_play(&mut self) -> &mut Self {
        self.car_play = true;
        self
    }

    /// Asset is for Apple Watch.
    pub fn apple_watch(&mut self) -> &mut Self {
        self.apple_watch = true;
        self
    }

    /// Asset is for Apple TV.
    pub fn apple_tv(&mut self) -> &mut Self {
        self.apple_tv = true;
        self
    }

    /// Asset is for Mac computers.
    pub fn mac(&mut self) -> &mut Self {
        self.mac = true;
        self
    }

    /// Enables a device by its manifest token (`universal`, `iphone`, `ipad`,
    /// `catalyst`, `car`, `watch`, `tv`, `mac`).
    pub fn enable(&mut self, token: &str) -> Result<&mut Self> {
        match token {
            "universal" => self.universal(),
            "iphone" => self.iphone(),
            "ipad" => self.ipad(),
            "catalyst" | MAC_CATALYST => self.catalyst(),
            "car" | "carplay" => self.car_play(),
            "watch" => self.apple_watch(),
            "tv" => self.apple_tv(),
            "mac" => self.mac(),
            other => bail!("unknown device {:?}", other),
        };
        Ok(self)
    }

    /// Returns the idiom tokens in Apple's canonical order.
    pub fn idioms(&self) -> Vec<&'static str> {
        [
            (self.universal, UNIVERSAL),
            (self.iphone, "iphone"),
            (self.ipad, "ipad"),
            (self.car_play, "car"),
            (self.apple_watch, "watch"),
            (self.apple_tv, "tv"),
            (self.mac, "mac"),
        ]
        .into_iter()
        .filter_map(|(enabled, idiom)| enabled.then_some(idiom))
        .collect()
    }

    /// Returns the subtype tags (currently only `mac-catalyst`).
    pub fn subtypes(&self) -> Vec<&'static str> {
        if self.catalyst {
            vec![MAC_CATALYST]
        } else {
            Vec::new()
        }
    }

    /// Returns `(idiom, subtype)` slots used for image expansion.
    ///
    /// Each idiom yields a slot without a subtype. Catalyst adds an extra
    /// `ipad` slot stamped with `mac-catalyst` directly after the plain one.
    pub fn slots(&self) -> Vec<(&'static str, Option<&'static str>)> {
        let mut slots = Vec::new();
        for idiom in self.idioms() {
            slots.push((idiom, None));
            if idiom == "ipad" && self.catalyst {
                slots.push((idiom, Some(MAC_CATALYST)));
            }
        }
        slots
    }

    /// Idiom tokens enabled in both sets.
    pub fn intersects(&self, other: &Devices) -> Vec<&'static str> {
        let theirs = other.idioms();
        self.idioms()
            .into_iter()
            .filter(|idiom| theirs.contains(idiom))
            .collect()
    }

    /// Fails when no device has been selected.
    pub fn validate(&self) -> Result<()> {
        if self.idioms().is_empty() {
            bail!("no devices specified");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idiom_order_is_fixed() {
        let mut devices = Devices::new();
        devices.mac().apple_tv().iphone().universal().car_play();

        assert_eq!(devices.idioms(), vec!["universal", "iphone", "car", "tv", "mac"]);
    }

    #[test]
    fn test_setters_are_idempotent() {
        let mut once = Devices::new();
        once.iphone();
        let mut twice = Devices::new();
        twice.iphone().iphone();

        assert_eq!(once, twice);
        assert_eq!(twice.idioms(), vec!["iphone"]);
    }

    #[test]
    fn test_ipad_enables_ipad() {
        let mut devices = Devices::new();
        devices.ipad();

        assert_eq!(devices.idioms(), vec!["ipad"]);
        assert!(devices.subtypes().is_empty());
    }

    #[test]
    fn test_catalyst_adds_ipad_and_subtype() {
        let mut devices = Devices::new();
        devices.catalyst();

        assert_eq!(devices.idioms(), vec!["ipad"]);
        assert_eq!(devices.subtypes(), vec![MAC_CATALYST]);
        assert_eq!(
            devices.slots(),
            vec![("ipad", None), ("ipad", Some(MAC_CATALYST))]
        );
    }

    #[test]
    fn test_empty_devices_fail_validation() {
        assert!(Devices::new().validate().is_err());

        let mut devices = Devices::new();
        devices.apple_watch();
        assert!(devices.validate().is_ok());
    }

    #[test]
    fn test_clear_removes_every_device() {
        let mut devices = Devices::new();
        devices.universal().catalyst();
        devices.clear().mac();

        assert_eq!(devices.idioms(), vec!["mac"]);
        assert!(devices.subtypes().is_empty());
    }

    #[test]
    fn test_intersects() {
        let mut a = Devices::new();
        a.universal().iphone();
        let mut b = Devices::new();
        b.iphone().mac();
        let mut c = Devices::new();
        c.apple_tv();

        assert_eq!(a.intersects(&b), vec!["iphone"]);
        assert!(a.intersects(&c).is_empty());
    }

    #[test]
    fn test_enable_by_token() {
        let mut devices = Devices::new();
        devices.enable("watch").unwrap().enable("car").unwrap();

        assert_eq!(devices.idioms(), vec!["car", "watch"]);
        assert!(devices.enable("toaster").is_err());
    }
}
