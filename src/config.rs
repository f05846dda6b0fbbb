use clap::ValueEnum;

/// How the closing summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    /// The "Customer List" receipt
    #[default]
    Text,
    /// A pretty-printed JSON report
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub summary_format: SummaryFormat,
}

/// Default log filter for the number of `-v` flags given.
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
