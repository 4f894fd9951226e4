//! Exhaustive pairwise matching.
//!
//! Every address is tested against every network. Pairs are independent, so the
//! work is spread over rayon's pool; results keep the sequential order
//! (address by address, networks in input order within each address).

use std::fmt;

use cidrfind_common::network::address::Address;
use cidrfind_common::network::cidr::Network;
use rayon::ThreadPool;
use rayon::prelude::*;

use crate::containment::contains;

/// An address together with one network that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub address: Address,
    pub network: Network,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has been found in {}", self.address, self.network)
    }
}

/// Finds every (address, network) pair where the network contains the address.
pub fn find_matches(addresses: &[Address], networks: &[Network]) -> Vec<Match> {
    addresses
        .par_iter()
        .flat_map_iter(|address| {
            networks
                .iter()
                .filter(move |network| contains(network, address))
                .map(move |network| Match {
                    address: *address,
                    network: *network,
                })
        })
        .collect()
}

/// Same as [`find_matches`], on a dedicated pool.
pub fn find_matches_in(pool: &ThreadPool, addresses: &[Address], networks: &[Network]) -> Vec<Match> {
    pool.install(|| find_matches(addresses, networks))
}
