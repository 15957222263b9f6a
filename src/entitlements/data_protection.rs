use crate::bail;
use crate::error::Result;

pub const DEFAULT_DATA_PROTECTION: &str = "com.apple.developer.default-data-protection";

/// Default file protection level for data the app writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataProtection {
    /// Unreadable while the device is locked or booting.
    Complete,
    /// Files already open stay accessible after the device locks.
    CompleteUnlessOpen,
    /// Unreadable until the first unlock after boot.
    CompleteUntilFirstUserAuthentication,
    None,
}

impl DataProtection {
    pub fn value(self) -> &'static str {
        match self {
            DataProtection::Complete => "NSFileProtectionComplete",
            DataProtection::CompleteUnlessOpen => "NSFileProtectionCompleteUnlessOpen",
            DataProtection::CompleteUntilFirstUserAuthentication => {
                "NSFileProtectionCompleteUntilFirstUserAuthentication"
            }
            DataProtection::None => "NSFileProtectionNone",
        }
    }

    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "complete" => Ok(DataProtection::Complete),
            "complete-unless-open" => Ok(DataProtection::CompleteUnlessOpen),
            "complete-until-first-user-authentication" => {
                Ok(DataProtection::CompleteUntilFirstUserAuthentication)
            }
            "none" => Ok(DataProtection::None),
            other => bail!("unknown data protection level '{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(DataProtection::Complete.value(), "NSFileProtectionComplete");
        assert_eq!(DataProtection::None.value(), "NSFileProtectionNone");
        assert_eq!(
            DataProtection::from_token("complete-unless-open").unwrap(),
            DataProtection::CompleteUnlessOpen
        );
        assert!(DataProtection::from_token("partial").is_err());
    }
}
