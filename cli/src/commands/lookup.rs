use cidrfind_common::config::Config;
use cidrfind_core::lookup::{self, LookupReport, LookupRequest};
use cidrfind_core::source::{FileSource, LineSource};

use crate::commands::CommandLine;
use crate::terminal::print;

pub async fn lookup(commands: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let request = LookupRequest {
        networks: Box::new(FileSource::new(&commands.networks)),
        addresses: commands
            .search_file
            .as_ref()
            .map(|path| Box::new(FileSource::new(path)) as Box<dyn LineSource>),
        literal: commands.search.clone(),
    };

    let report: LookupReport = lookup::lookup(request, cfg).await?;

    lookup_ends(&report, cfg);
    Ok(())
}

fn lookup_ends(report: &LookupReport, cfg: &Config) {
    if report.matches.is_empty() {
        print::no_matches(cfg.quiet);
    } else {
        print::header("matches", cfg.quiet);
        report.matches.iter().for_each(print::found);
    }

    print::summary(report, cfg.quiet);
}
