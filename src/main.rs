use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pharmacy_pos::application::session::Session;
use pharmacy_pos::config::{SessionConfig, SummaryFormat, log_filter};
use pharmacy_pos::error::PosError;
use pharmacy_pos::infrastructure::console::LineConsole;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Format of the summary printed after payment
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the counter dialogue on stdout stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig {
        summary_format: cli.summary,
    };
    let mut session = Session::new(LineConsole::stdio(), config);

    match session.run() {
        Ok(_) => Ok(()),
        Err(PosError::InputClosed(field)) => {
            warn!(field, "input closed, ending session");
            Ok(())
        }
        Err(e) => Err::<(), _>(e).into_diagnostic(),
    }
}
