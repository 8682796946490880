//! Storefront - terminal shop for browsing the catalog and checking out.
//!
//! Reads commands from stdin, one per line, and writes views to stdout.
//! Logs go to stderr.

use storefront::{Config, OutputFormat, Reply, Session};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let catalog = config.load_catalog().await?;
    tracing::info!(
        products = catalog.len(),
        increment_policy = ?config.increment_policy,
        "Starting storefront"
    );

    let mut session = Session::new(catalog, &config);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let prompt: &[u8] = match config.output {
        OutputFormat::Text => b"> ",
        OutputFormat::Json => b"",
    };

    stdout.write_all(session.render()?.as_bytes()).await?;
    stdout.write_all(prompt).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match session.handle_line(&line) {
            Ok(Reply::Output(text)) => stdout.write_all(text.as_bytes()).await?,
            Ok(Reply::Quit) => break,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(line = %line, "Rejected command: {}", e);
                stdout.write_all(format!("error: {}\n", e).as_bytes()).await?;
            }
            Err(e) => return Err(e.into()),
        }
        stdout.write_all(prompt).await?;
        stdout.flush().await?;
    }

    tracing::info!(orders = session.receipts().len(), "Storefront closed");
    Ok(())
}
