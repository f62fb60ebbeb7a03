use console::Term;

use crate::app::{AppContext, Result};
use crate::domain::{Mode, StoryRow};
use crate::render;

/// Fetch the requested window and print it as a table on stdout.
pub async fn show_stories(ctx: &AppContext, mode: Mode, start: usize, num: usize) -> Result<()> {
    let rows = fetch_stories(ctx, mode, start, num).await?;

    let mut stdout = std::io::stdout().lock();
    render::print_table(&mut stdout, &rows)?;

    Ok(())
}

/// Fetch the requested window, rewriting a progress line on stderr as
/// item fetches complete.
pub async fn fetch_stories(
    ctx: &AppContext,
    mode: Mode,
    start: usize,
    num: usize,
) -> Result<Vec<StoryRow>> {
    let term = Term::stderr();

    let rows = ctx
        .parallel_fetcher
        .fetch_window(mode, start, num, |done, total| {
            let _ = term.clear_line();
            let _ = term.write_str(&format!("Fetching... {done}/{total}"));
        })
        .await?;
    let _ = term.clear_line();

    let failed = rows.iter().filter(|row| !row.is_fetched()).count();
    if failed > 0 {
        tracing::info!(failed, total = rows.len(), "some stories could not be fetched");
    }

    Ok(rows)
}
