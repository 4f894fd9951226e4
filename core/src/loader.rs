//! Turns raw lines into parsed values.
//!
//! Lines that do not parse are dropped without aborting the run. A source that
//! yields nothing usable is fatal.

use std::fmt::Display;

use cidrfind_common::network::address::{self, Address};
use cidrfind_common::network::cidr::{self, Network};
use tracing::{debug, trace};

use crate::error::{LookupError, Result};

/// Parses every line as CIDR. Fails when none of them is valid.
pub fn parse_networks<I, S>(lines: I, origin: &str) -> Result<Vec<Network>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let networks = parse_all(lines, origin, cidr::parse_network);
    if networks.is_empty() {
        return Err(LookupError::NoValidNetworks {
            origin: origin.to_string(),
        });
    }

    debug!(origin, count = networks.len(), "loaded networks");
    Ok(networks)
}

/// Parses every line as an IP address. Fails when none of them is valid.
pub fn parse_addresses<I, S>(lines: I, origin: &str) -> Result<Vec<Address>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let addresses = parse_all(lines, origin, address::parse_address);
    if addresses.is_empty() {
        return Err(LookupError::NoValidAddresses {
            origin: origin.to_string(),
        });
    }

    debug!(origin, count = addresses.len(), "loaded addresses");
    Ok(addresses)
}

/// Parses the single address given directly by the user.
pub fn parse_literal(text: &str) -> Result<Address> {
    address::parse_address(text).map_err(LookupError::InvalidLiteral)
}

fn parse_all<I, S, T, E>(lines: I, origin: &str, parse: fn(&str) -> std::result::Result<T, E>) -> Vec<T>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    E: Display,
{
    let mut rejected: usize = 0;

    let parsed: Vec<T> = lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref().trim();
            if line.is_empty() {
                return None;
            }
            match parse(line) {
                Ok(value) => Some(value),
                Err(e) => {
                    trace!(origin, line, "skipping: {e}");
                    rejected += 1;
                    None
                }
            }
        })
        .collect();

    if rejected > 0 {
        debug!(origin, rejected, "skipped unparsable lines");
    }

    parsed
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_networks_skips_invalid() {
        let lines = ["192.168.0.0/16", "not-a-cidr", "", "10.0.0.0/8", "10.0.0.0/33"];
        let networks = parse_networks(lines, "nets.txt").unwrap();

        let rendered: Vec<String> = networks.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["192.168.0.0/16", "10.0.0.0/8"]);
    }

    #[test]
    fn test_parse_networks_none_valid() {
        let err = parse_networks(["garbage", "1.2.3.4", ""], "nets.txt").unwrap_err();
        assert!(matches!(err, LookupError::NoValidNetworks { ref origin } if origin == "nets.txt"));
        assert_eq!(err.to_string(), "no valid networks found in nets.txt");
    }

    #[test]
    fn test_parse_networks_empty_source() {
        let lines: Vec<String> = Vec::new();
        assert!(matches!(
            parse_networks(lines, "empty.txt"),
            Err(LookupError::NoValidNetworks { .. })
        ));
    }

    #[test]
    fn test_parse_addresses_keeps_order() {
        let lines = vec![
            "192.168.1.1".to_string(),
            "8.8.8.8".to_string(),
            "garbage".to_string(),
            " 2001:db8::1 ".to_string(),
        ];
        let addresses = parse_addresses(&lines, "ips.txt").unwrap();

        let rendered: Vec<String> = addresses.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["192.168.1.1", "8.8.8.8", "2001:db8::1"]);
    }

    #[test]
    fn test_parse_addresses_none_valid() {
        let err = parse_addresses(["256.0.0.1", "x"], "ips.txt").unwrap_err();
        assert_eq!(err.to_string(), "no valid IP addresses found in ips.txt");
    }

    #[test]
    fn test_parse_literal() {
        assert!(parse_literal("10.1.1.1").is_ok());
        assert!(matches!(
            parse_literal("10.1.1"),
            Err(LookupError::InvalidLiteral(_))
        ));
    }
}
