//! Address-in-network test.
//!
//! Same-family pairs compare their native bytes. Mixed pairs are first lifted into
//! sixteen bytes, with IPv4 placed in the IPv4-mapped block `::ffff:0:0/96`, so an IPv4
//! network of prefix `p` acts as the IPv6 network `::ffff:a.b.c.d/(96 + p)`.

use std::net::IpAddr;

use cidrfind_common::network::address::{Address, Family};
use cidrfind_common::network::cidr::Network;

/// Bits taken by the `::ffff:0:0` prefix in front of a mapped IPv4 address.
const MAPPED_PREFIX_BITS: u32 = 96;

/// Returns `true` when `address` lies inside `network`.
pub fn contains(network: &Network, address: &Address) -> bool {
    let prefix = u32::from(network.prefix());

    match (network.base().ip(), address.ip()) {
        (IpAddr::V4(base), IpAddr::V4(addr)) => prefix_matches(&base.octets(), &addr.octets(), prefix),
        (IpAddr::V6(base), IpAddr::V6(addr)) => prefix_matches(&base.octets(), &addr.octets(), prefix),
        _ => {
            let prefix = match network.family() {
                Family::V4 => prefix + MAPPED_PREFIX_BITS,
                Family::V6 => prefix,
            };
            prefix_matches(
                &network.base().to_mapped_octets(),
                &address.to_mapped_octets(),
                prefix,
            )
        }
    }
}

/// Compares the leading `prefix` bits of two big-endian byte strings.
///
/// Whole bytes must be equal; a trailing partial byte is compared under
/// `0xFF << (8 - remaining_bits)`. A prefix longer than either input never matches.
pub fn prefix_matches(a: &[u8], b: &[u8], prefix: u32) -> bool {
    let whole = (prefix / 8) as usize;
    let remaining = prefix % 8;

    if a.len() < whole || b.len() < whole || a[..whole] != b[..whole] {
        return false;
    }
    if remaining == 0 {
        return true;
    }

    let mask: u8 = 0xFF << (8 - remaining);
    match (a.get(whole), b.get(whole)) {
        (Some(x), Some(y)) => x & mask == y & mask,
        _ => false,
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
