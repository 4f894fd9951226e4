//! # cidrfind core
//!
//! Everything between raw text lines and the final list of matches:
//!
//! * [`source`]: where lines come from (files, in-memory lists).
//! * [`loader`]: lines into parsed addresses and networks, dropping the unparsable ones.
//! * [`containment`]: the address-in-network test, across IPv4 and IPv6.
//! * [`matcher`]: every address against every network, in parallel.
//! * [`lookup`]: the whole run, from sources to a [`lookup::LookupReport`].

pub mod containment;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod matcher;
pub mod source;

pub use error::{LookupError, Result};
