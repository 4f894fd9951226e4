//! # cidrfind common
//!
//! Shared data model for the workspace.
//!
//! * [`network::address`]: textual IP addresses into canonical [`network::address::Address`] values.
//! * [`network::cidr`]: `address/prefix` blocks into masked [`network::cidr::Network`] values.
//! * [`config`]: run-time options threaded from the command line.

pub mod config;
pub mod network;

#[doc(hidden)]
pub use tracing;

/// Logs a successful step. Rendered with the `[+]` prefix by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "cidrfind::success", $($arg)*)
    };
}
