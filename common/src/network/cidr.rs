//! # CIDR Network Model
//!
//! A network block written as `address/prefix` (e.g., `192.168.1.0/24`, `2001:db8::/32`).
//!
//! The base address is always stored masked to the prefix length, so
//! `192.168.1.5/24` and `192.168.1.0/24` produce the same [`Network`].

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use thiserror::Error;

use crate::network::address::{self, Address, AddressParseError, Family};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkParseError {
    #[error("missing '/' prefix length in '{0}'")]
    MissingPrefix(String),
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),
    #[error("prefix length {prefix} exceeds {max} bits")]
    PrefixTooLong { prefix: u8, max: u8 },
    #[error(transparent)]
    InvalidAddress(#[from] AddressParseError),
}

/// A masked network base address and its prefix length.
///
/// The prefix never exceeds [`Family::bits`] of the base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    base: Address,
    prefix: u8,
}

impl Network {
    /// Builds a network from any address inside it. Host bits are cleared.
    pub fn new(addr: Address, prefix: u8) -> Result<Self, NetworkParseError> {
        let max = addr.family().bits();
        if prefix > max {
            return Err(NetworkParseError::PrefixTooLong { prefix, max });
        }

        Ok(Self {
            base: mask_address(addr, prefix),
            prefix,
        })
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn family(&self) -> Family {
        self.base.family()
    }

    /// Netmask bytes for the prefix, as wide as the family.
    pub fn mask_octets(&self) -> Vec<u8> {
        match self.family() {
            Family::V4 => v4_mask(self.prefix).to_be_bytes().to_vec(),
            Family::V6 => v6_mask(self.prefix).to_be_bytes().to_vec(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl FromStr for Network {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_network(s)
    }
}

/// Parses CIDR notation like "192.168.1.0/24" or "2001:db8::/32".
pub fn parse_network(token: &str) -> Result<Network, NetworkParseError> {
    let token = token.trim();
    let Some((addr_str, prefix_str)) = token.rsplit_once('/') else {
        return Err(NetworkParseError::MissingPrefix(token.to_string()));
    };

    let addr = address::parse_address(addr_str)?;
    let prefix = parse_prefix(prefix_str)?;

    Network::new(addr, prefix)
}

/// Prefix lengths are plain decimal digits: no sign, no inner whitespace.
fn parse_prefix(s: &str) -> Result<u8, NetworkParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NetworkParseError::InvalidPrefix(s.to_string()));
    }

    s.parse::<u8>()
        .map_err(|_| NetworkParseError::InvalidPrefix(s.to_string()))
}

fn v4_mask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    }
}

fn v6_mask(prefix: u8) -> u128 {
    if prefix == 0 {
        0
    } else {
        u128::MAX << (128 - u32::from(prefix))
    }
}

fn mask_address(addr: Address, prefix: u8) -> Address {
    match addr.ip() {
        IpAddr::V4(v4) => Ipv4Addr::from(u32::from(v4) & v4_mask(prefix)).into(),
        IpAddr::V6(v6) => Ipv6Addr::from(u128::from(v6) & v6_mask(prefix)).into(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
