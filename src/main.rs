use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use revview::areas::viewer::RevisionViewer;
use revview::artifacts::tree::display_options::DisplayOptions;
use revview::shell::Session;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "revview",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Browse revisions picked from repository logs",
    long_about = "Reads viewer commands line by line (from stdin or a script), \
    keeps the picked revisions grouped by repository, and prints the resulting tree \
    whenever it changes. Run `help` inside a session to list the commands.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, value_name = "FILE", help = "Read commands from FILE instead of stdin")]
    script: Option<PathBuf>,
    #[arg(long, help = "Disable colored output")]
    no_color: bool,
    #[arg(long, value_name = "CHARS", help = "Width of commit message excerpts")]
    message_width: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let mut options = DisplayOptions::load_from_env()?;
    options.color = options.color && !cli.no_color && std::io::stdout().is_terminal();
    if let Some(width) = cli.message_width {
        options.message_width = width;
    }
    colored::control::set_override(options.color);

    let viewer = RevisionViewer::new(options, Box::new(std::io::stdout()));
    let mut session = Session::new(viewer);

    let failures = match &cli.script {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            session.run(BufReader::new(file))?
        }
        None => session.run(std::io::stdin().lock())?,
    };

    session.viewer().writer().flush()?;
    if failures > 0 {
        anyhow::bail!("{failures} command(s) failed");
    }

    Ok(())
}
