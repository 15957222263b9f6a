//! Required device capabilities (`UIRequiredDeviceCapabilities`).

use crate::bail;
use crate::error::Result;
use plist::Value;
use std::collections::BTreeSet;

/// A device feature the app requires to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    Accelerometer,
    Arkit,
    Armv7,
    Arm64,
    AutoFocusCamera,
    BluetoothLe,
    CameraFlash,
    FrontFacingCamera,
    GameKit,
    Gps,
    Gyroscope,
    HealthKit,
    MinimumPerformanceA12,
    LocationServices,
    Magnetometer,
    Metal,
    Microphone,
    Nfc,
    OpenGles1,
    OpenGles2,
    OpenGles3,
    PeerToPeer,
    Sms,
    StillCamera,
    Telephony,
    VideoCamera,
    Wifi,
}

static CAPABILITY_TOKENS: &[&str] = &[
    "accelerometer",
    "arkit",
    "armv7",
    "arm64",
    "auto-focus-camera",
    "bluetooth-le",
    "camera-flash",
    "front-facing-camera",
    "gamekit",
    "gps",
    "gyroscope",
    "healthkit",
    "iphone-ipad-minimum-performance-a12",
    "location-services",
    "magnetometer",
    "metal",
    "microphone",
    "nfc",
    "opengles-1",
    "opengles-2",
    "opengles-3",
    "peer-peer",
    "sms",
    "still-camera",
    "telephony",
    "video-camera",
    "wifi",
];

impl Capability {
    const ALL: [Capability; 27] = [
        Capability::Accelerometer,
        Capability::Arkit,
        Capability::Armv7,
        Capability::Arm64,
        Capability::AutoFocusCamera,
        Capability::BluetoothLe,
        Capability::CameraFlash,
        Capability::FrontFacingCamera,
        Capability::GameKit,
        Capability::Gps,
        Capability::Gyroscope,
        Capability::HealthKit,
        Capability::MinimumPerformanceA12,
        Capability::LocationServices,
        Capability::Magnetometer,
        Capability::Metal,
        Capability::Microphone,
        Capability::Nfc,
        Capability::OpenGles1,
        Capability::OpenGles2,
        Capability::OpenGles3,
        Capability::PeerToPeer,
        Capability::Sms,
        Capability::StillCamera,
        Capability::Telephony,
        Capability::VideoCamera,
        Capability::Wifi,
    ];

    /// Value written into the capabilities array.
    pub fn token(self) -> &'static str {
        CAPABILITY_TOKENS[self as usize]
    }

    pub fn from_token(token: &str) -> Result<Self> {
        match Self::ALL.into_iter().find(|c| c.token() == token) {
            Some(capability) => Ok(capability),
            None => bail!("unknown device capability '{}'", token),
        }
    }
}

/// Set of required capabilities, written in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceCapabilities(BTreeSet<Capability>);

impl DeviceCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, capability: Capability) -> &mut Self {
        self.0.insert(capability);
        self
    }

    pub fn armv7(&mut self) -> &mut Self {
        self.require(Capability::Armv7)
    }

    pub fn arm64(&mut self) -> &mut Self {
        self.require(Capability::Arm64)
    }

    pub fn metal(&mut self) -> &mut Self {
        self.require(Capability::Metal)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub(crate) fn build(&self) -> Value {
        Value::Array(self.0.iter().map(|c| Value::from(c.token())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_cover_every_variant() {
        assert_eq!(CAPABILITY_TOKENS.len(), Capability::ALL.len());
        for capability in Capability::ALL {
            assert_eq!(Capability::from_token(capability.token()).unwrap(), capability);
        }
    }

    #[test]
    fn test_build_uses_declaration_order() {
        let mut caps = DeviceCapabilities::new();
        caps.metal().armv7().require(Capability::Wifi).armv7();

        let built = caps.build();
        let tokens: Vec<&str> = built
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_string)
            .collect();
        assert_eq!(tokens, vec!["armv7", "metal", "wifi"]);
    }

    #[test]
    fn test_unknown_token() {
        assert!(Capability::from_token("jetpack").is_err());
        assert_eq!(
            Capability::from_token("iphone-ipad-minimum-performance-a12").unwrap(),
            Capability::MinimumPerformanceA12
        );
    }
}
