//! rTrivia library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (question bank, quiz runner, result store, reports).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod report;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::edition::QuizEdition;
use std::path::PathBuf;
use store::ResultStore;

/// Settings resolved once per invocation: config file + command-line overrides.
pub struct Context {
    pub cfg: Config,
    pub edition: QuizEdition,
    pub results: PathBuf,
    pub test: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli, cfg: Config) -> Self {
        let edition = cli.edition.unwrap_or(cfg.edition);
        let results = match &cli.results {
            Some(custom) => utils::path::expand_tilde(custom),
            None => cfg.results_file(edition),
        };
        Self {
            cfg,
            edition,
            results,
            test: cli.test,
        }
    }

    pub fn store(&self) -> ResultStore {
        ResultStore::new(self.results.clone(), self.edition.layout())
    }

    pub fn activity_log(&self) -> PathBuf {
        self.cfg.activity_log_file()
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Play { .. } => cli::commands::play::handle(&cli.command, ctx),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, ctx),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, ctx),
        Commands::Bank { .. } => cli::commands::bank::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = Config::load()?;

    // 3️⃣ apply command-line overrides (edition, result store)
    let ctx = Context::from_cli(&cli, cfg);
    log::debug!(
        "edition={} results={}",
        ctx.edition.as_str(),
        ctx.results.display()
    );

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &ctx)
}
