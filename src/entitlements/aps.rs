use crate::bail;
use crate::error::Result;

pub const APS_ENVIRONMENT: &str = "aps-environment";

/// Push notification environment (`aps-environment`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApsEnvironment {
    Development,
    Production,
}

impl ApsEnvironment {
    pub fn value(self) -> &'static str {
        match self {
            ApsEnvironment::Development => "development",
            ApsEnvironment::Production => "production",
        }
    }

    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "development" => Ok(ApsEnvironment::Development),
            "production" => Ok(ApsEnvironment::Production),
            other => bail!("unknown aps environment '{}'", other),
        }
    }
}
