//! Interactive console for the campus assistant.
//! Run: cargo run -p campus-console (reads the same config as the gateway).

use campus_core::{Assistant, CoreConfig};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EMPTY_LINE_REMINDER: &str = "Please enter a question or type 'quit' to exit.";

/// Prompt loop: one reply per non-empty line; `quit` ends after its reply, as does end of input.
async fn run_console<R, W>(assistant: &Assistant, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", assistant.welcome_banner())?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            writeln!(out, "{}", EMPTY_LINE_REMINDER)?;
            continue;
        }

        writeln!(out, "{}", assistant.reply(line))?;
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[campus-console] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CoreConfig::load()?;
    let assistant = Assistant::load(&config).await?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_console(&assistant, stdin, &mut stdout).await?;
    Ok(())
}
