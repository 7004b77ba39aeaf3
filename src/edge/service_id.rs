//! Service identifier validation and target URL construction.
//!
//! # Design Decisions
//! - Identifiers are numeric only; anything else never reaches a URL
//! - An optional allow-list narrows the numeric space further
//! - The final segment is pushed through `Url::path_segments_mut`, which
//!   percent-encodes it

use std::fmt;
use url::Url;

use crate::config::validation::is_numeric_id;
use crate::config::BackendTargetConfig;
use crate::proxy::ProxyError;

/// A validated service identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceId(String);

impl ServiceId {
    /// Accept `raw` if it is numeric and, when `allowed` is non-empty, listed.
    pub fn parse(raw: &str, allowed: &[String]) -> Result<Self, ProxyError> {
        if !is_numeric_id(raw) {
            return Err(ProxyError::InvalidServiceId(raw.to_string()));
        }
        if !allowed.is_empty() && !allowed.iter().any(|a| a == raw) {
            return Err(ProxyError::InvalidServiceId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps identifiers to backend URLs: `<base>/<prefix><id>`.
#[derive(Debug, Clone)]
pub struct ServiceDirectory {
    base: Url,
    prefix: String,
    allowed: Vec<String>,
}

impl ServiceDirectory {
    pub fn new(config: &BackendTargetConfig) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(&config.base_url)?,
            prefix: config.service_prefix.clone(),
            allowed: config.allowed_services.clone(),
        })
    }

    /// Validate `raw` and build the URL it maps to.
    pub fn resolve(&self, raw: &str) -> Result<Url, ProxyError> {
        let id = ServiceId::parse(raw, &self.allowed)?;
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ProxyError::InvalidTarget(self.base.to_string()))?
            .pop_if_empty()
            .push(&format!("{}{}", self.prefix, id));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(base: &str, allowed: &[&str]) -> ServiceDirectory {
        ServiceDirectory::new(&BackendTargetConfig {
            base_url: base.to_string(),
            service_prefix: "runservice".to_string(),
            allowed_services: allowed.iter().map(|s| s.to_string()).collect(),
        })
        .unwrap()
    }

    #[test]
    fn appends_service_segment() {
        let dir = directory("http://private.example.com/pri", &[]);
        assert_eq!(
            dir.resolve("3").unwrap().as_str(),
            "http://private.example.com/pri/runservice3"
        );
    }

    #[test]
    fn trailing_slash_and_bare_host() {
        let dir = directory("http://private.example.com/pri/", &[]);
        assert_eq!(
            dir.resolve("12").unwrap().as_str(),
            "http://private.example.com/pri/runservice12"
        );

        let dir = directory("http://127.0.0.1:9000", &[]);
        assert_eq!(dir.resolve("5").unwrap().as_str(), "http://127.0.0.1:9000/runservice5");
    }

    #[test]
    fn rejects_non_numeric() {
        let dir = directory("http://private.example.com/pri", &[]);
        for raw in ["", "abc", "3/../../admin", "1?x=2", "favicon.ico", "-1"] {
            assert!(
                matches!(dir.resolve(raw), Err(ProxyError::InvalidServiceId(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn honours_allow_list() {
        let dir = directory("http://private.example.com/pri", &["1", "2", "3"]);
        assert!(dir.resolve("3").is_ok());
        assert!(matches!(dir.resolve("4"), Err(ProxyError::InvalidServiceId(_))));
    }

    #[test]
    fn cannot_be_a_base_is_invalid_target() {
        let dir = directory("mailto:ops@example.com", &[]);
        assert!(matches!(dir.resolve("1"), Err(ProxyError::InvalidTarget(_))));
    }
}
