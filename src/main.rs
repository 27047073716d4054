use anyhow::Result;
use casekit::batch::BatchConverter;
use casekit::cli::output::{self, OutputFormat};
use casekit::config::Overrides;
use casekit::input::{self, Record};
use casekit::{Config, Style};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "casekit")]
#[command(version, about = "Convert free text into snake_case, camelCase, dot.case or kebab-case", long_about = None)]
struct Cli {
    /// Text values to convert
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    texts: Vec<String>,

    /// Target style (snake, camel, dot, kebab)
    #[arg(short, long)]
    style: Option<Style>,

    /// Render every style for each value
    #[arg(short, long, conflicts_with = "style")]
    all: bool,

    /// Convert every record of a file (`-` reads stdin); .json and .jsonl hold JSON values
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some values fail to convert
    #[arg(long)]
    no_fail: bool,

    /// Stop at the first value that fails to convert
    #[arg(long)]
    fail_fast: bool,

    /// Treat blank lines as records instead of skipping them
    #[arg(long)]
    keep_blank_lines: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(log_level(&cli));

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casekit", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        style: cli.style,
        format: cli.format,
        fail_fast: cli.fail_fast,
        keep_blank_lines: cli.keep_blank_lines,
    })?;
    tracing::debug!(?config, "resolved configuration");

    let records = match &cli.file {
        Some(path) => input::read_records(path, config.skip_blank_lines)?,
        None if !cli.texts.is_empty() => cli
            .texts
            .iter()
            .enumerate()
            .map(|(i, text)| Record::text(i + 1, text.as_str()))
            .collect(),
        None => anyhow::bail!("No input given. Pass TEXT arguments or --file; see --help."),
    };

    let styles = if cli.all {
        Style::ALL.to_vec()
    } else {
        vec![config.style()?]
    };
    let format = config.format()?;
    let colored = !cli.no_color;

    let converter = BatchConverter::new(styles, config.fail_fast);
    let result = converter.run(&records);

    output::print_results(&result, converter.styles(), colored, &format)?;
    if cli.file.is_some() && format == OutputFormat::Text {
        output::print_summary(&result, colored);
    }

    // Exit with appropriate code
    if result.failed_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn log_level(cli: &Cli) -> LevelFilter {
    if cli.quiet {
        return LevelFilter::ERROR;
    }
    match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}
