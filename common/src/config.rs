/// Run-time options built from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Quiet level. `1` drops banner and headers, `2` also drops the summary.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Worker threads used for the pairwise comparison.
    ///
    /// `None` lets rayon pick one per logical CPU.
    pub jobs: Option<usize>,
}
