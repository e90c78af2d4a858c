use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use console_reporter::{
    hooks, BaseReporter, DotReporter, EchoOptions, Renderer, ReporterConfig,
};

/// Console formatting for test-runner reporters.
///
/// Render single styled lines, translate status glyphs, or replay a recorded
/// event stream through one of the built-in reporters.
#[derive(Parser)]
#[command(name = "console-reporter", version, about)]
struct Cli {
    /// Disable all color and font styling
    #[arg(long, global = true)]
    no_color: bool,

    /// Keep status glyphs as plain ASCII
    #[arg(long, global = true)]
    no_symbols: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one line of text
    Echo {
        message: String,

        /// Foreground color (e.g. green, redBright)
        #[arg(long)]
        foreground: Option<String>,

        /// Font style (e.g. bold, underline)
        #[arg(long)]
        style: Option<String>,

        /// Background color (e.g. bgBlue)
        #[arg(long)]
        background: Option<String>,

        /// Number of leading spaces
        #[arg(long)]
        indent: Option<usize>,

        /// Do not terminate the line
        #[arg(long)]
        no_newline: bool,

        /// Append a single trailing space
        #[arg(long)]
        trailing_space: bool,

        /// Print an empty line first
        #[arg(long)]
        blank_before: bool,
    },

    /// Print the display glyph for an ASCII status marker (*, x, >, ->, <>)
    Symbol { glyph: String },

    /// Replay JSON-lines hook events through a reporter
    Replay {
        /// Which reporter receives the events
        #[arg(long, value_enum, default_value_t = ReporterKind::Dot)]
        reporter: ReporterKind,

        /// Event file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReporterKind {
    /// Silent: every hook is a no-op
    Base,
    /// One pass/fail glyph per finished test
    Dot,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never mix with reporter output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("console_reporter=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ReporterConfig::load()?.with_overrides(cli.no_color, cli.no_symbols);
    debug!(?config, "reporter config");

    match cli.command {
        Commands::Echo {
            message,
            foreground,
            style,
            background,
            indent,
            no_newline,
            trailing_space,
            blank_before,
        } => {
            let options = EchoOptions {
                no_newline,
                ensure_trailing_space: trailing_space,
                preceding_blank_line: blank_before,
                foreground,
                style,
                background,
                indent,
            };
            Renderer::new(config).echo(&message, &options)?;
        }

        Commands::Symbol { glyph } => {
            let renderer = Renderer::new(config);
            println!("{}", renderer.symbol(&glyph));
        }

        Commands::Replay { reporter, file } => {
            let count = match file {
                Some(path) => {
                    let handle = File::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    replay_with(reporter, config, BufReader::new(handle))?
                }
                None => replay_with(reporter, config, io::stdin().lock())?,
            };
            debug!(events = count, "replayed events");
        }
    }

    Ok(())
}

fn replay_with(kind: ReporterKind, config: ReporterConfig, input: impl io::BufRead) -> Result<usize> {
    match kind {
        ReporterKind::Base => hooks::replay(&mut BaseReporter::new(config), input),
        ReporterKind::Dot => {
            let mut reporter = DotReporter::new(config);
            let count = hooks::replay(&mut reporter, input)?;
            reporter.finish_line()?;
            Ok(count)
        }
    }
}
