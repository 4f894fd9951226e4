//! Errors that abort a lookup.
//!
//! Individual unparsable lines never show up here; they are skipped by the [`crate::loader`].

use cidrfind_common::network::address::AddressParseError;
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Debug, Error)]
pub enum LookupError {
    /// Neither an address file nor a single address was supplied.
    #[error("either an address file or a single address to search must be specified")]
    MissingAddresses,

    /// Not one line of the network source parsed as CIDR.
    #[error("no valid networks found in {origin}")]
    NoValidNetworks { origin: String },

    /// Not one line of the address source parsed as an IP address.
    #[error("no valid IP addresses found in {origin}")]
    NoValidAddresses { origin: String },

    /// The single address given on the command line is not an IP address.
    #[error("invalid address to search: {0}")]
    InvalidLiteral(#[source] AddressParseError),

    /// A source could not be opened or read.
    #[error("cannot read {origin}: {source}")]
    Unreadable {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The comparison worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
