//! A complete lookup run.
//!
//! Reads the sources, parses them, and matches every address against every
//! network. Neither this module nor anything below it touches command-line
//! state: callers hand in the sources and a [`Config`].

use std::time::{Duration, Instant};

use cidrfind_common::config::Config;
use cidrfind_common::network::address::Address;
use cidrfind_common::success;
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::error::{LookupError, Result};
use crate::loader;
use crate::matcher::{self, Match};
use crate::source::LineSource;

/// Inputs of one run.
pub struct LookupRequest {
    /// CIDR networks, one per line.
    pub networks: Box<dyn LineSource>,
    /// IP addresses, one per line.
    pub addresses: Option<Box<dyn LineSource>>,
    /// A single address to search, checked after the address source.
    pub literal: Option<String>,
}

/// Outcome of a run.
#[derive(Debug)]
pub struct LookupReport {
    pub matches: Vec<Match>,
    /// Networks that parsed successfully.
    pub networks: usize,
    /// Addresses that parsed successfully, the literal included.
    pub addresses: usize,
    pub elapsed: Duration,
}

/// Runs a lookup end to end.
///
/// Fails when no address input is given, when a source cannot be read, when
/// a source contains nothing valid, or when the literal is not an IP address.
pub async fn lookup(request: LookupRequest, cfg: &Config) -> Result<LookupReport> {
    if request.addresses.is_none() && request.literal.is_none() {
        return Err(LookupError::MissingAddresses);
    }

    let start_time: Instant = Instant::now();

    let literal: Option<Address> = request
        .literal
        .as_deref()
        .map(loader::parse_literal)
        .transpose()?;

    let (network_lines, address_lines) = tokio::join!(
        request.networks.read_lines(),
        read_optional(request.addresses.as_deref())
    );

    let networks = loader::parse_networks(network_lines?, &request.networks.origin())?;

    let mut addresses: Vec<Address> = match address_lines? {
        Some((origin, lines)) => loader::parse_addresses(lines, &origin)?,
        None => Vec::new(),
    };
    addresses.extend(literal);

    success!(
        "{} network(s) and {} address(es) parsed successfully",
        networks.len(),
        addresses.len()
    );

    let matches: Vec<Match> = match cfg.jobs {
        Some(jobs) => {
            debug!(jobs, "using dedicated worker pool");
            let pool = ThreadPoolBuilder::new().num_threads(jobs).build()?;
            matcher::find_matches_in(&pool, &addresses, &networks)
        }
        None => matcher::find_matches(&addresses, &networks),
    };

    Ok(LookupReport {
        matches,
        networks: networks.len(),
        addresses: addresses.len(),
        elapsed: start_time.elapsed(),
    })
}

async fn read_optional(source: Option<&dyn LineSource>) -> Result<Option<(String, Vec<String>)>> {
    match source {
        Some(source) => Ok(Some((source.origin(), source.read_lines().await?))),
        None => Ok(None),
    }
}
