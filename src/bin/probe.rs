use clap::Parser;
use clap::error::ErrorKind;
use origin_notes::probe;
use std::time::Duration;
use url::Url;

/// Probe a URL repeatedly and print CDN cache behavior per round.
#[derive(Debug, Parser)]
#[command(name = "probe")]
struct Cli {
    /// URL to probe
    url: Url,

    /// Number of request rounds
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Delay between rounds, in seconds
    #[arg(long, default_value_t = 2)]
    delay: u64,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // usage errors (missing or invalid URL) must exit 1
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let client = reqwest::Client::builder()
        .user_agent("origin-notes-probe/0.1")
        .timeout(Duration::from_secs(10))
        .build()
        .expect("FATAL: initialize probe HTTP client failed");

    if let Err(e) = probe::run(&client, &cli.url, cli.rounds, Duration::from_secs(cli.delay)).await
    {
        eprintln!("probe request failed: {e}");
        std::process::exit(1);
    }
}
