//! # Address Family
//!
//! The two IP address families an extraction can be restricted to.
//!
//! A family is always derived from a parsed [`IpAddr`], never from the
//! pattern that happened to find the text.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }

    /// The numeric IP version, 4 or 6.
    pub fn version(self) -> u8 {
        match self {
            IpFamily::V4 => 4,
            IpFamily::V6 => 6,
        }
    }

    pub fn matches(self, addr: &IpAddr) -> bool {
        Self::of(addr) == self
    }
}

impl TryFrom<u8> for IpFamily {
    type Error = ExtractError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            4 => Ok(IpFamily::V4),
            6 => Ok(IpFamily::V6),
            other => Err(ExtractError::InvalidArgument(format!(
                "ip_version must be 4 or 6, got {other}"
            ))),
        }
    }
}

impl FromStr for IpFamily {
    type Err = String;

    /// Parses a family as typed on a command line.
    ///
    /// Accepts "4", "v4", "ipv4" and the IPv6 equivalents (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" => Ok(IpFamily::V4),
            "6" | "v6" | "ipv6" => Ok(IpFamily::V6),
            _ => Err(format!("invalid ip version: {s} (expected 4 or 6)")),
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "IPv4"),
            IpFamily::V6 => write!(f, "IPv6"),
        }
    }
}
