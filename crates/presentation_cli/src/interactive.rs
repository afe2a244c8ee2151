//! Interactive search loop
//!
//! Each entered city starts a new search; a search still running when the
//! next city arrives is cancelled and its result never printed.

use std::io::Write;
use std::sync::Arc;

use application::{SearchError, SearchSession};
use domain::SearchResult;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::debug;

use crate::render::{RenderContext, render_error, render_result};

const PROMPT: &str = "Enter a city name (or 'quit' to exit):";

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q")
}

/// Print a finished search unless a newer one has started since
fn report<W: Write>(
    city: &str,
    outcome: Result<SearchResult, SearchError>,
    is_current: bool,
    output: &mut W,
    ctx: RenderContext<'_>,
) -> std::io::Result<()> {
    if !is_current {
        debug!(city = %city, "Dropped result of a replaced search");
        return Ok(());
    }
    match outcome {
        Ok(result) => writeln!(output, "\n{}", render_result(&result, ctx))?,
        Err(SearchError::Superseded) => debug!(city = %city, "Dropped superseded search"),
        Err(e) => writeln!(output, "{}", render_error(&e))?,
    }
    output.flush()
}

/// Read cities from `input` until EOF or `quit`, printing results to `output`
///
/// On EOF the loop waits for the last search to finish before returning.
pub async fn run<R, W>(
    session: Arc<SearchSession>,
    input: R,
    output: &mut W,
    ctx: RenderContext<'_>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut searches: JoinSet<(String, u64, Result<SearchResult, SearchError>)> = JoinSet::new();
    let mut input_open = true;

    writeln!(output, "{PROMPT}")?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                let city = line.trim().to_string();
                if city.is_empty() {
                    continue;
                }
                if is_quit(&city) {
                    session.cancel();
                    break;
                }

                let ticket = session.begin();
                let session = Arc::clone(&session);
                searches.spawn(async move {
                    let outcome = session.run(&city, &ticket).await;
                    (city, ticket.generation(), outcome)
                });
            }
            Some(joined) = searches.join_next() => {
                let (city, generation, outcome) = joined?;
                report(&city, outcome, session.is_current(generation), output, ctx)?;
            }
            else => break,
        }
    }

    Ok(())
}
