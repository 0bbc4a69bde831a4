//! Org Folders CLI
//!
//! Lists the folders of an organization, whole or page by page, from a JSON
//! dataset or a seeded sample.
//!
//! ## Commands
//!
//! - `sample` - Generate a dataset (stdout or `--output <path>`)
//! - `orgs` - Organizations in the dataset with folder counts
//! - `list --org <uuid>` - Every folder of the organization
//! - `page --org <uuid> [--token <t>]` - One page plus the token for the next one
//! - `walk --org <uuid>` - Every page, following tokens until they run out
//!
//! Responses are JSON envelopes on stdout; logs go to stderr (`RUST_LOG`).

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use org_folders::{OrgId, SampleData, DEFAULT_SAMPLE_FOLDERS, DEFAULT_SAMPLE_ORGS};

mod command;
mod config;

use command::{token_error, CommandAction, CommandHandler, CommandResponse, ResponseMeta};
use config::{resolve_pager_config, Dataset};

#[derive(Debug, Parser)]
#[command(name = "org-folders", version, about = "List an organization's folders page by page")]
struct Cli {
    /// JSON dataset to load. A seeded sample is generated when omitted.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Seed for the generated sample dataset.
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Folders per page (overrides ORG_FOLDERS_PAGE_SIZE, default 2).
    #[arg(long, global = true)]
    page_size: Option<NonZeroUsize>,

    /// Fail on tokens that point past the end instead of returning an empty page.
    #[arg(long, global = true)]
    strict: bool,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a sample dataset
    Sample {
        #[arg(long, default_value_t = DEFAULT_SAMPLE_FOLDERS)]
        folders: usize,
        #[arg(long, default_value_t = DEFAULT_SAMPLE_ORGS)]
        orgs: usize,
        /// Write the dataset here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List organizations with folder counts
    Orgs,
    /// Every folder of an organization, unpaginated
    List {
        #[arg(long)]
        org: OrgId,
    },
    /// One page of an organization's folders
    Page {
        #[arg(long)]
        org: OrgId,
        /// Token from the previous page; empty starts from the beginning
        #[arg(long, default_value = "")]
        token: String,
    },
    /// All pages of an organization's folders
    Walk {
        #[arg(long)]
        org: OrgId,
    },
}

impl Commands {
    fn into_action(self, seed: u64) -> CommandAction {
        match self {
            Self::Sample {
                folders,
                orgs,
                output,
            } => CommandAction::Sample {
                sample: SampleData {
                    folders,
                    orgs,
                    seed,
                },
                output,
            },
            Self::Orgs => CommandAction::Orgs,
            Self::List { org } => CommandAction::List { org },
            Self::Page { org, token } => CommandAction::Page { org, token },
            Self::Walk { org } => CommandAction::Walk { org },
        }
    }
}

const EXIT_TOKEN_ERROR: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn run(cli: Cli) -> (CommandResponse, ExitCode) {
    let config = match resolve_pager_config(cli.page_size, cli.strict) {
        Ok(config) => config,
        Err(err) => return failure(&err, ResponseMeta::default()),
    };

    let action = cli.command.into_action(cli.seed);

    // Generating a sample never reads a dataset.
    let dataset = Dataset::resolve(cli.data, cli.seed);
    let directory = if matches!(action, CommandAction::Sample { .. }) {
        Default::default()
    } else {
        match dataset.load() {
            Ok(directory) => directory,
            Err(err) => return failure(&err, ResponseMeta::default()),
        }
    };

    let handler = CommandHandler::new(directory, config, dataset.describe());
    match handler.execute(action) {
        Ok(outcome) => (CommandResponse::ok(outcome), ExitCode::SUCCESS),
        Err(err) => failure(&err, handler.meta()),
    }
}

fn failure(err: &anyhow::Error, meta: ResponseMeta) -> (CommandResponse, ExitCode) {
    log::warn!("Command failed: {err:#}");
    let code = if token_error(err).is_some() {
        EXIT_TOKEN_ERROR
    } else {
        EXIT_FAILURE
    };
    (CommandResponse::error(err, meta), ExitCode::from(code))
}

fn print(response: &CommandResponse, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    println!("{rendered}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;
    let (response, code) = run(cli);

    if let Err(err) = print(&response, pretty) {
        eprintln!("failed to render response: {err:#}");
        return ExitCode::from(EXIT_FAILURE);
    }
    code
}
