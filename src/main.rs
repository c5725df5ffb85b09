use aimv_step1::{Config, ConfigError, ContentError, ContentSet, WriteReport};
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "aimv-step1")]
#[command(author, version, about = "Fill Step 1 (concept/inspiration/mood/genre) files for a project")]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Project id under the projects directory (default: "default")
    #[arg(long)]
    project: Option<String>,

    /// Project concept text
    #[arg(long, required = true)]
    concept: Option<String>,

    /// Visual inspiration text
    #[arg(long, required = true)]
    inspiration: Option<String>,

    /// Mood and tone text
    #[arg(long, required = true)]
    mood: Option<String>,

    /// Genre and visual style text
    #[arg(long, required = true)]
    genre: Option<String>,

    /// Directory holding all projects (default: "projects")
    #[arg(long, value_name = "DIR")]
    projects_dir: Option<PathBuf>,

    /// TOML config file with projects_dir / default_project
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format for the write report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not encode report: {0}")]
    Output(#[from] serde_json::Error),
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            RunError::Content(e) => e.exit_code(),
            RunError::Config(_) | RunError::Output(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(Command::Completion { shell }) = args.command {
        clap_complete::generate(shell, &mut Args::command(), "aimv-step1", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Args) -> Result<(), RunError> {
    let (Some(concept), Some(inspiration), Some(mood), Some(genre)) =
        (args.concept, args.inspiration, args.mood, args.genre)
    else {
        Args::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "--concept, --inspiration, --mood and --genre are required",
            )
            .exit()
    };

    // Validate everything before touching the filesystem
    let content = ContentSet::new(&concept, &inspiration, &mood, &genre)?;

    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = args.projects_dir {
        config.projects_dir = dir;
    }

    let project = config.resolve_project(args.project.as_deref());
    let report = config.writer().write(&project, &content)?;

    match args.format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn print_report(report: &WriteReport) {
    println!(
        "{}",
        format!("Saved Step 1 content for project '{}'", report.project).green()
    );
    for file in &report.files {
        println!("- {} ({} bytes)", file.path.display(), file.bytes);
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(verbose >= 2))
        .init();
}
