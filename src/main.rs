use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hnd::app::AppContext;
use hnd::cli::{self, commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for the table.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = cli::parse_validated();
    let ctx = AppContext::with_workers(cli.workers);

    commands::show_stories(&ctx, cli.mode, cli.start, cli.num).await?;

    Ok(())
}
