//! Endpoint value type used as the topology key

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TopologyError;

/// A `host:port` service endpoint.
///
/// Immutable value type; equality, hashing and ordering are structural on
/// `(host, port)`, which makes it suitable as the topology's key type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Create an endpoint from already-validated parts.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse a `host:port` string.
    ///
    /// Splits on the last colon, so hosts with embedded colons keep their
    /// full host text. Rejects a missing separator, an empty or
    /// whitespace-bearing host, and a non-numeric or out-of-range port.
    pub fn parse(text: &str) -> Result<Self, TopologyError> {
        let (host, port_text) =
            text.rsplit_once(':')
                .ok_or_else(|| TopologyError::MalformedAddress {
                    address: text.to_string(),
                    reason: "missing ':' port separator".to_string(),
                })?;

        if host.is_empty() {
            return Err(TopologyError::MalformedAddress {
                address: text.to_string(),
                reason: "empty host".to_string(),
            });
        }

        if host.chars().any(char::is_whitespace) {
            return Err(TopologyError::MalformedAddress {
                address: text.to_string(),
                reason: "whitespace in host".to_string(),
            });
        }

        // `u16::from_str` tolerates a leading '+'; the wire form does not.
        if port_text.is_empty() || !port_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TopologyError::MalformedAddress {
                address: text.to_string(),
                reason: format!("non-numeric port '{port_text}'"),
            });
        }

        let port = port_text
            .parse::<u16>()
            .map_err(|_| TopologyError::MalformedAddress {
                address: text.to_string(),
                reason: format!("port '{port_text}' out of range"),
            })?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    /// The host part of this endpoint.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port part of this endpoint.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_canonical_form() {
        for text in [
            "mainnet-public.mirror.meridian.network:443",
            "127.0.0.1:50211",
            "a:1",
            "node.example.com:65535",
        ] {
            let endpoint = Endpoint::parse(text).unwrap();
            assert_eq!(endpoint.to_string(), text);
        }
    }

    #[test]
    fn parse_splits_on_last_colon() {
        let endpoint = Endpoint::parse("fe80::1:443").unwrap();
        assert_eq!(endpoint.host(), "fe80::1");
        assert_eq!(endpoint.port(), 443);
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let error = Endpoint::parse("no-port-here").unwrap_err();
        assert!(matches!(error, TopologyError::MalformedAddress { .. }));
    }

    #[test]
    fn parse_rejects_empty_host() {
        let error = Endpoint::parse(":443").unwrap_err();
        assert!(matches!(error, TopologyError::MalformedAddress { .. }));
    }

    #[test]
    fn parse_rejects_whitespace_in_host() {
        for text in ["my host:443", " host:1", "host\t:1", "ho st:1"] {
            let error = Endpoint::parse(text).unwrap_err();
            assert!(
                matches!(error, TopologyError::MalformedAddress { .. }),
                "expected malformed address for {text:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_bad_ports() {
        for text in ["host:", "host:abc", "host:+1", "host: 1", "host:65536"] {
            let error = Endpoint::parse(text).unwrap_err();
            assert!(
                matches!(error, TopologyError::MalformedAddress { .. }),
                "expected malformed address for {text:?}"
            );
        }
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            Endpoint::parse("a:1").unwrap(),
            Endpoint::new("a".to_string(), 1)
        );
        assert_ne!(
            Endpoint::parse("a:1").unwrap(),
            Endpoint::parse("a:2").unwrap()
        );
    }
}
