#![cfg(test)]
use cidrfind_common::config::Config;
use cidrfind_core::lookup::{self, LookupReport, LookupRequest};
use cidrfind_core::source::{FileSource, LineSource};
use cidrfind_core::LookupError;

use crate::util::TempFile;

fn file_request(networks: &TempFile, addresses: Option<&TempFile>, literal: Option<&str>) -> LookupRequest {
    LookupRequest {
        networks: Box::new(FileSource::new(networks.path())),
        addresses: addresses.map(|f| Box::new(FileSource::new(f.path())) as Box<dyn LineSource>),
        literal: literal.map(str::to_string),
    }
}

fn lines(report: &LookupReport) -> Vec<String> {
    report.matches.iter().map(ToString::to_string).collect()
}

/// Invalid lines on both sides are dropped and the single containing pair is reported.
#[tokio::test]
async fn lookup_files_single_match() {
    let nets = TempFile::with_lines("single-nets", &["192.168.0.0/16", "not-a-cidr", "10.0.0.0/8"]);
    let ips = TempFile::with_lines("single-ips", &["192.168.1.1", "8.8.8.8", "garbage"]);

    let report = lookup::lookup(file_request(&nets, Some(&ips), None), &Config::default())
        .await
        .expect("lookup failed");

    assert_eq!(lines(&report), vec!["192.168.1.1 has been found in 192.168.0.0/16"]);
}

#[tokio::test]
async fn lookup_files_no_valid_networks() {
    let nets = TempFile::with_lines("bad-nets", &["garbage", "10.0.0.0/33", ""]);
    let ips = TempFile::with_lines("bad-nets-ips", &["10.0.0.1"]);

    let err = lookup::lookup(file_request(&nets, Some(&ips), None), &Config::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::NoValidNetworks { .. }));
    assert_eq!(
        err.to_string(),
        format!("no valid networks found in {}", nets.path().display())
    );
}

#[tokio::test]
async fn lookup_files_no_valid_addresses() {
    let nets = TempFile::with_lines("bad-ips-nets", &["10.0.0.0/8"]);
    let ips = TempFile::with_lines("bad-ips", &["10.0.0", "x.y.z.w"]);

    let err = lookup::lookup(file_request(&nets, Some(&ips), None), &Config::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::NoValidAddresses { .. }));
}

#[tokio::test]
async fn lookup_missing_network_file() {
    let nets = TempFile::with_lines("gone-nets", &["10.0.0.0/8"]);
    let request = LookupRequest {
        networks: Box::new(FileSource::new(nets.path().with_extension("missing"))),
        addresses: None,
        literal: Some("10.0.0.1".to_string()),
    };

    let err = lookup::lookup(request, &Config::default()).await.unwrap_err();
    assert!(matches!(err, LookupError::Unreadable { .. }));
}

/// Networks are printed in their masked form, and CRLF files parse like LF files.
#[tokio::test]
async fn lookup_canonical_network_and_crlf() {
    let nets = TempFile::with_lines("crlf-nets", &["192.168.1.5/24\r", "2001:db8:1::9/32\r"]);

    let request = file_request(&nets, None, Some("192.168.1.77"));
    let report = lookup::lookup(request, &Config::default()).await.unwrap();
    assert_eq!(lines(&report), vec!["192.168.1.77 has been found in 192.168.1.0/24"]);

    let request = file_request(&nets, None, Some("2001:db8:ffff::1"));
    let report = lookup::lookup(request, &Config::default()).await.unwrap();
    assert_eq!(lines(&report), vec!["2001:db8:ffff::1 has been found in 2001:db8::/32"]);
}

/// IPv4 and IPv4-mapped IPv6 values meet through the `::ffff:0:0/96` block.
#[tokio::test]
async fn lookup_mixed_families() {
    let nets = TempFile::with_lines("mixed-nets", &["0.0.0.0/0", "::ffff:0:0/96", "2001:db8::/32"]);
    let ips = TempFile::with_lines("mixed-ips", &["::ffff:192.0.2.1", "198.51.100.7", "2001:db8::5"]);

    let cfg = Config {
        jobs: Some(2),
        ..Config::default()
    };
    let report = lookup::lookup(file_request(&nets, Some(&ips), None), &cfg).await.unwrap();

    assert_eq!(
        lines(&report),
        vec![
            "::ffff:192.0.2.1 has been found in 0.0.0.0/0",
            "::ffff:192.0.2.1 has been found in ::ffff:0.0.0.0/96",
            "198.51.100.7 has been found in 0.0.0.0/0",
            "198.51.100.7 has been found in ::ffff:0.0.0.0/96",
            "2001:db8::5 has been found in 2001:db8::/32",
        ]
    );
    assert_eq!(report.networks, 3);
    assert_eq!(report.addresses, 3);
}

#[tokio::test]
async fn lookup_invalid_literal_is_rejected() {
    let nets = TempFile::with_lines("literal-nets", &["10.0.0.0/8"]);

    let err = lookup::lookup(file_request(&nets, None, Some("10.0.0.300")), &Config::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::InvalidLiteral(_)));
}
