//! App Transport Security (`NSAppTransportSecurity`).

use super::keys;
use plist::{Dictionary, Value};
use std::collections::BTreeMap;

/// Changes to the default security of HTTP connections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppTransportSecurity {
    allows_arbitrary_loads: bool,
    allows_arbitrary_loads_for_media: bool,
    allows_arbitrary_loads_in_web_content: bool,
    allows_local_networking: bool,
    exception_domains: BTreeMap<String, ExceptionDomain>,
}

impl AppTransportSecurity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables ATS restrictions for all connections.
    ///
    /// Ignored by the OS when any of the media, web content or local
    /// networking keys is present.
    pub fn allow_arbitrary_loads(&mut self, value: bool) -> &mut Self {
        self.allows_arbitrary_loads = value;
        self
    }

    pub fn allow_arbitrary_loads_for_media(&mut self, value: bool) -> &mut Self {
        self.allows_arbitrary_loads_for_media = value;
        self
    }

    pub fn allow_arbitrary_loads_in_web_content(&mut self, value: bool) -> &mut Self {
        self.allows_arbitrary_loads_in_web_content = value;
        self
    }

    pub fn allow_local_networking(&mut self, value: bool) -> &mut Self {
        self.allows_local_networking = value;
        self
    }

    /// Returns the exception entry for `domain`, creating it with default
    /// settings (forward secrecy required) on first use.
    pub fn exception_domain(&mut self, domain: impl Into<String>) -> &mut ExceptionDomain {
        self.exception_domains.entry(domain.into()).or_default()
    }

    pub(crate) fn build(&self) -> Value {
        let mut dict = Dictionary::new();
        dict.insert(
            keys::ATS_ALLOWS_ARBITRARY_LOADS.into(),
            self.allows_arbitrary_loads.into(),
        );

        if self.allows_arbitrary_loads_for_media {
            dict.insert(keys::ATS_ALLOWS_ARBITRARY_LOADS_FOR_MEDIA.into(), true.into());
        }
        if self.allows_arbitrary_loads_in_web_content {
            dict.insert(
                keys::ATS_ALLOWS_ARBITRARY_LOADS_IN_WEB_CONTENT.into(),
                true.into(),
            );
        }
        if self.allows_local_networking {
            dict.insert(keys::ATS_ALLOWS_LOCAL_NETWORKING.into(), true.into());
        }

        if !self.exception_domains.is_empty() {
            let mut domains = Dictionary::new();
            for (domain, exception) in &self.exception_domains {
                domains.insert(domain.clone(), exception.build());
            }
            dict.insert(keys::ATS_EXCEPTION_DOMAINS.into(), Value::Dictionary(domains));
        }

        Value::Dictionary(dict)
    }
}

/// ATS settings for one named domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionDomain {
    includes_subdomains: bool,
    allows_insecure_http_loads: bool,
    minimum_tls_version: Option<String>,
    requires_forward_secrecy: bool,
    requires_certificate_transparency: bool,
}

impl Default for ExceptionDomain {
    fn default() -> Self {
        Self {
            includes_subdomains: false,
            allows_insecure_http_loads: false,
            minimum_tls_version: None,
            requires_forward_secrecy: true,
            requires_certificate_transparency: false,
        }
    }
}

impl ExceptionDomain {
    pub fn includes_subdomains(&mut self, value: bool) -> &mut Self {
        self.includes_subdomains = value;
        self
    }

    pub fn allows_insecure_http_loads(&mut self, value: bool) -> &mut Self {
        self.allows_insecure_http_loads = value;
        self
    }

    /// `TLSv1.0` through `TLSv1.3`. The OS default is `TLSv1.2`.
    pub fn minimum_tls_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.minimum_tls_version = Some(version.into());
        self
    }

    pub fn requires_forward_secrecy(&mut self, value: bool) -> &mut Self {
        self.requires_forward_secrecy = value;
        self
    }

    pub fn requires_certificate_transparency(&mut self, value: bool) -> &mut Self {
        self.requires_certificate_transparency = value;
        self
    }

    fn build(&self) -> Value {
        let mut dict = Dictionary::new();
        dict.insert("NSIncludesSubdomains".into(), self.includes_subdomains.into());
        dict.insert(
            "NSExceptionAllowsInsecureHTTPLoads".into(),
            self.allows_insecure_http_loads.into(),
        );
        if let Some(version) = self.minimum_tls_version.as_ref().filter(|v| !v.is_empty()) {
            dict.insert("NSExceptionMinimumTLSVersion".into(), version.clone().into());
        }
        dict.insert(
            "NSExceptionRequiresForwardSecrecy".into(),
            self.requires_forward_secrecy.into(),
        );
        dict.insert(
            "NSRequiresCertificateTransparency".into(),
            self.requires_certificate_transparency.into(),
        );
        Value::Dictionary(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_dict(value: Value) -> Dictionary {
        value.into_dictionary().unwrap()
    }

    #[test]
    fn test_default_only_emits_arbitrary_loads() {
        let dict = as_dict(AppTransportSecurity::new().build());

        assert_eq!(dict.len(), 1);
        assert_eq!(
            dict.get(keys::ATS_ALLOWS_ARBITRARY_LOADS).and_then(Value::as_boolean),
            Some(false)
        );
    }

    #[test]
    fn test_optional_flags_emitted_when_true() {
        let mut ats = AppTransportSecurity::new();
        ats.allow_arbitrary_loads(true)
            .allow_arbitrary_loads_for_media(true)
            .allow_local_networking(true);

        let dict = as_dict(ats.build());
        assert!(dict.contains_key(keys::ATS_ALLOWS_ARBITRARY_LOADS_FOR_MEDIA));
        assert!(dict.contains_key(keys::ATS_ALLOWS_LOCAL_NETWORKING));
        assert!(!dict.contains_key(keys::ATS_ALLOWS_ARBITRARY_LOADS_IN_WEB_CONTENT));
    }

    #[test]
    fn test_exception_domain_defaults() {
        let mut ats = AppTransportSecurity::new();
        ats.exception_domain("example.com").includes_subdomains(true);

        let dict = as_dict(ats.build());
        let domains = dict
            .get(keys::ATS_EXCEPTION_DOMAINS)
            .and_then(Value::as_dictionary)
            .unwrap();
        let domain = domains.get("example.com").and_then(Value::as_dictionary).unwrap();

        assert_eq!(domain.get("NSIncludesSubdomains").and_then(Value::as_boolean), Some(true));
        assert_eq!(
            domain
                .get("NSExceptionRequiresForwardSecrecy")
                .and_then(Value::as_boolean),
            Some(true)
        );
        assert!(!domain.contains_key("NSExceptionMinimumTLSVersion"));
    }

    #[test]
    fn test_exception_domain_tls_version() {
        let mut ats = AppTransportSecurity::new();
        ats.exception_domain("example.com")
            .minimum_tls_version("TLSv1.3")
            .requires_forward_secrecy(false);

        let dict = as_dict(ats.build());
        let domain = dict
            .get(keys::ATS_EXCEPTION_DOMAINS)
            .and_then(Value::as_dictionary)
            .and_then(|d| d.get("example.com"))
            .and_then(Value::as_dictionary)
            .unwrap();

        assert_eq!(
            domain.get("NSExceptionMinimumTLSVersion").and_then(Value::as_string),
            Some("TLSv1.3")
        );
        assert_eq!(
            domain
                .get("NSExceptionRequiresForwardSecrecy")
                .and_then(Value::as_boolean),
            Some(false)
        );
    }
}
