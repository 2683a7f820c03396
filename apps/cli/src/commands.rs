//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use resumeparser_core::ResumeParser;
use resumeparser_shared::{AppConfig, ResumeParserError, init_config, load_config};
use tokio::task::JoinSet;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ResumeParser — structured data from resume documents.
#[derive(Parser)]
#[command(
    name = "resumeparser",
    version,
    about = "Extract structured personal, contact, summary, education and experience data from PDF and DOCX resumes.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Parse one or more resume documents into JSON.
    Parse {
        /// PDF or DOCX files to parse.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Language code to use instead of detecting one (e.g. en, de).
        #[arg(short, long, env = "RESUMEPARSER_LANG")]
        lang: Option<String>,

        /// Directory to write `<name>.json` files into. Without it a single
        /// file is printed to stdout and several go to the configured
        /// output directory.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },

    /// List languages with a registered pattern bundle.
    Languages,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "resumeparser=info",
        1 => "resumeparser=debug",
        _ => "resumeparser=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so JSON records on stdout stay clean.
    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse {
            files,
            lang,
            out,
            compact,
        } => cmd_parse(files, lang.as_deref(), out, compact).await,
        Command::Languages => cmd_languages().await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_parse(
    files: Vec<PathBuf>,
    lang: Option<&str>,
    out: Option<PathBuf>,
    compact: bool,
) -> Result<()> {
    let mut config = load_config()?;
    if let Some(lang) = lang {
        config.defaults.language = lang.to_string();
    }
    let pretty = config.defaults.pretty && !compact;

    let parser = Arc::new(ResumeParser::from_config(&config)?);
    if let Some(code) = config.defaults.language_override() {
        if !parser.registry().is_registered(&code) {
            warn!(%code, "no pattern bundle for this language, only contact details will be extracted");
        }
    }
    info!(
        files = files.len(),
        language = %config.defaults.language,
        "parsing resumes"
    );

    // A single file with no output directory goes straight to stdout.
    if files.len() == 1 && out.is_none() {
        let path = files[0].clone();
        let record = tokio::task::spawn_blocking(move || parser.parse_file(&path)).await??;
        println!("{}", record.to_json(pretty)?);
        return Ok(());
    }

    let out_dir = out.unwrap_or_else(|| PathBuf::from(&config.defaults.output_dir));
    std::fs::create_dir_all(&out_dir).map_err(|e| ResumeParserError::io(&out_dir, e))?;

    let progress = CliProgress::new(files.len())?;
    let mut tasks = JoinSet::new();
    for path in files {
        let parser = Arc::clone(&parser);
        let out_dir = out_dir.clone();
        tasks.spawn_blocking(move || {
            let result = parse_to_file(&parser, &path, &out_dir, pretty);
            (path, result)
        });
    }

    let mut failed = 0usize;
    while let Some(joined) = tasks.join_next().await {
        let (path, result) = joined?;
        match result {
            Ok(written) => {
                progress.file_done(&path);
                info!(input = %path.display(), output = %written.display(), "record written");
            }
            Err(e) => {
                failed += 1;
                progress.file_done(&path);
                warn!(input = %path.display(), error = %e, "failed to parse");
                let kind = if e.is_document_error() { "unreadable" } else { "failed" };
                progress.println(format!("  ✗ {} ({kind}): {e}", path.display()));
            }
        }
    }
    progress.finish();

    let total = progress.total();
    println!();
    println!("  Parsed:  {}/{total}", total - failed);
    println!("  Output:  {}", out_dir.display());
    println!();

    if failed > 0 {
        return Err(eyre!("{failed} of {total} file(s) failed to parse"));
    }
    Ok(())
}

/// Parse one file and write `<stem>.json` into `out_dir`.
fn parse_to_file(
    parser: &ResumeParser,
    path: &Path,
    out_dir: &Path,
    pretty: bool,
) -> resumeparser_shared::Result<PathBuf> {
    let record = parser.parse_file(path)?;
    let stem = path.file_stem().map_or_else(
        || "resume".into(),
        |s| s.to_string_lossy().into_owned(),
    );
    let target = out_dir.join(format!("{stem}.json"));

    std::fs::write(&target, record.to_json(pretty)?).map_err(|e| ResumeParserError::io(&target, e))?;
    Ok(target)
}

async fn cmd_languages() -> Result<()> {
    let config = load_config()?;
    let parser = ResumeParser::from_config(&config)?;

    println!();
    for (code, name) in parser.registry().languages() {
        println!("  {code:<6} {name}");
    }
    println!();
    println!("  Other codes fall back to contact-only extraction.");
    println!();
    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config).wrap_err("failed to render config")?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Batch progress spinner using indicatif.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new(total: usize) -> Result<Self> {
        let spinner = ProgressBar::new(total as u64);
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} [{pos}/{len}] {msg}")?
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Ok(Self { spinner })
    }

    fn file_done(&self, path: &Path) {
        self.spinner.inc(1);
        self.spinner.set_message(path.display().to_string());
    }

    fn println(&self, line: String) {
        self.spinner.println(line);
    }

    fn total(&self) -> usize {
        self.spinner.length().unwrap_or_default() as usize
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
