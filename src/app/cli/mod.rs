//! CLI Adapter.

mod interactive;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::domain::{AppError, Selection, parse_selection};
use crate::services::{ChallengeCatalog, HttpCompletionClient, load_config, record_reader};

#[derive(Parser)]
#[command(name = "pitchmail")]
#[command(version)]
#[command(
    about = "Draft SME outreach emails for innovation challenges",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./pitchmail.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the challenges in a source table
    #[clap(visible_alias = "l")]
    List {
        /// CSV file or spreadsheet workbook
        file: PathBuf,
    },
    /// Print the prompt for a challenge without calling the model
    #[clap(visible_alias = "p")]
    Prompt {
        /// CSV file or spreadsheet workbook
        file: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Generate one email draft
    #[clap(visible_alias = "g")]
    Generate {
        /// CSV file or spreadsheet workbook
        file: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Pick challenges and generate drafts from a menu
    #[clap(visible_alias = "i")]
    Interactive {
        /// CSV file or spreadsheet workbook
        file: PathBuf,
    },
}

#[derive(clap::Args)]
struct TargetArgs {
    /// Challenge name
    #[arg(short = 'c', long, conflicts_with = "input")]
    challenge: Option<String>,
    /// Company name
    #[arg(short = 'm', long, conflicts_with = "input")]
    company: Option<String>,
    /// Combined input: 'Challenge Name | Company Name'
    #[arg(short = 'i', long)]
    input: Option<String>,
}

impl TargetArgs {
    fn resolve(self) -> Result<Selection, AppError> {
        if let Some(input) = self.input {
            return parse_selection(&input);
        }
        match (self.challenge, self.company) {
            (Some(challenge), Some(company)) => Ok(Selection { challenge, company }),
            (None, _) => Err(AppError::validation("Missing --challenge (or --input)")),
            (_, None) => Err(AppError::validation("Missing --company (or --input)")),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config_path = cli.config;

    let result: Result<(), AppError> = match cli.command {
        Commands::List { file } => run_list(&file),
        Commands::Prompt { file, target } => run_prompt(&file, target),
        Commands::Generate { file, target } => {
            run_generate(&file, target, config_path.as_deref())
        }
        Commands::Interactive { file } => run_interactive(&file, config_path.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_list(file: &Path) -> Result<(), AppError> {
    let store = record_reader::load(file)?;
    if store.is_empty() {
        println!("No challenges found in {}", file.display());
        return Ok(());
    }
    for name in store.names() {
        println!("{}", name);
    }
    Ok(())
}

fn run_prompt(file: &Path, target: TargetArgs) -> Result<(), AppError> {
    let selection = target.resolve()?;
    let catalog = ChallengeCatalog::open(file)?;
    let prompt = catalog.prompt_for(&selection.challenge, &selection.company)?;
    println!("{}", prompt);
    Ok(())
}

fn run_generate(file: &Path, target: TargetArgs, config: Option<&Path>) -> Result<(), AppError> {
    let selection = target.resolve()?;
    let ctx = open_context(file, config)?;
    let draft = ctx.draft(&selection.challenge, &selection.company)?;
    println!("{}", draft);
    Ok(())
}

fn run_interactive(file: &Path, config: Option<&Path>) -> Result<(), AppError> {
    let ctx = open_context(file, config)?;
    interactive::run(&ctx)
}

fn open_context(
    file: &Path,
    config: Option<&Path>,
) -> Result<AppContext<HttpCompletionClient>, AppError> {
    let catalog = ChallengeCatalog::open(file)?;
    let config = load_config(config)?;
    let client = HttpCompletionClient::from_env_with_config(&config.generator)?;
    log::debug!("using completion endpoint {}", client.url());
    Ok(AppContext::new(file, catalog, client))
}
