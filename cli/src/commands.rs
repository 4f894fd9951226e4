pub mod lookup;

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "cidrfind", version)]
#[command(about = "Find which CIDR networks contain the given IP addresses.")]
#[command(group(
    ArgGroup::new("addresses")
        .required(true)
        .multiple(true)
        .args(["search_file", "search"])
))]
pub struct CommandLine {
    /// File with CIDR notation networks, one per line
    #[arg(short = 'i', long = "networks", value_name = "FILE")]
    pub networks: PathBuf,

    /// File with IP addresses to search, one per line
    #[arg(short = 'f', long = "search-file", visible_alias = "sf", value_name = "FILE")]
    pub search_file: Option<PathBuf>,

    /// Single IP address to search
    #[arg(short = 's', long = "search", value_name = "IP")]
    pub search: Option<String>,

    /// Worker threads for the comparison (defaults to one per CPU)
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    /// Less output; repeat to drop the summary as well
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// More diagnostics; repeat for trace output
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long = "no-banner")]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
