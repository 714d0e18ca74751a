use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use newsdesk_app::platform::logging::{self, LogDestination};
use newsdesk_app::SessionFile;
use page_logging::page_error;

const DEFAULT_SESSION: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/brasilviral.ron");

/// Replays a scripted visit to the BrasilViral front page.
#[derive(Debug, Parser)]
#[command(name = "newsdesk", about = "Replays a scripted BrasilViral page session", long_about = None)]
struct Cli {
    /// RON session file; defaults to the bundled demo.
    session: Option<PathBuf>,

    /// Where diagnostics go.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    log: LogDestination,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);

    let path = cli
        .session
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION));
    run(path).inspect_err(|err| page_error!("replay failed: {:#}", err))
}

fn run(path: PathBuf) -> anyhow::Result<()> {
    let session = SessionFile::load(&path)
        .with_context(|| format!("loading session {}", path.display()))?;
    let runtime = session.replay().context("replaying session")?;

    let view = runtime.view();
    let pending = runtime.pending_timers();
    let document = runtime.teardown();

    println!("location: {}", document.location());
    println!(
        "ads: {} loaded, {} loading, {} impression(s); menu active: {}",
        view.placeholders_loaded, view.placeholders_loading, view.impressions, view.menu_active
    );
    if pending > 0 {
        println!("timers still pending at teardown: {pending}");
    }
    for line in document.console() {
        println!("console: {line}");
    }
    for alert in document.alerts() {
        println!("alert: {alert}");
    }
    for url in document.navigations() {
        println!("navigate: {url}");
    }
    for window in document.windows() {
        println!("window.open: {} ({} {})", window.url, window.name, window.features);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_terminal_logging_and_bundled_session() {
        let cli = Cli::try_parse_from(["newsdesk"]).unwrap();
        assert_eq!(cli.log, LogDestination::Terminal);
        assert!(!cli.verbose);
        assert!(cli.session.is_none());
    }

    #[test]
    fn log_destination_and_verbosity_are_selectable() {
        let cli =
            Cli::try_parse_from(["newsdesk", "--log", "both", "-v", "visita.ron"]).unwrap();
        assert_eq!(cli.log, LogDestination::Both);
        assert!(cli.verbose);
        assert_eq!(cli.session, Some(PathBuf::from("visita.ron")));

        let cli = Cli::try_parse_from(["newsdesk", "--log", "file"]).unwrap();
        assert_eq!(cli.log, LogDestination::File);
    }

    #[test]
    fn unknown_destination_is_rejected() {
        assert!(Cli::try_parse_from(["newsdesk", "--log", "syslog"]).is_err());
    }
}
