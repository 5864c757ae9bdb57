//! # CLI Layer
//!
//! The only place in folio that writes to stdout or stderr.
//!
//! 1. **Argument Parsing**: clap turns the shell arguments into [`Cli`]
//! 2. **Context Setup**: [`initialize`] resolves data dir, config, backend and secret
//! 3. **API Dispatch**: one `FolioApi` call per invocation
//! 4. **Output Formatting**: the returned `CmdResult` becomes text or JSON
//!
//! Errors are returned to `main`, which prints them and exits with status 1.

use super::logging;
use super::render::{print_cards, print_items, print_json, print_messages};
use super::setup::{Cli, Commands, ConfigAction, OutputMode, SecretAction};
use clap::Parser;
use folioapp::api::CmdResult;
use folioapp::config::FolioConfig;
use folioapp::error::Result;
use folioapp::init::{initialize, FolioContext};
use serde::Serialize;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Template generation needs no data directory or secret.
    if let Some(Commands::Config {
        action: Some(ConfigAction::Gen),
    }) = &cli.command
    {
        print!("{}", FolioConfig::template());
        return Ok(());
    }

    let ctx = initialize(cli.data, cli.backend)?;
    let output = cli.output;
    let command = cli.command.unwrap_or(Commands::List);

    match command {
        Commands::List => handle_list(&ctx, output),
        Commands::Create { fields } => {
            let result = ctx.api.create_item(ctx.backend, fields.into())?;
            emit(&result, output)
        }
        Commands::Update { index, fields } => {
            let result = ctx.api.update_item(ctx.backend, &index, fields.into())?;
            emit(&result, output)
        }
        Commands::Delete { index } => {
            let result = ctx.api.delete_item(ctx.backend, &index)?;
            emit(&result, output)
        }
        Commands::Render => handle_render(&ctx, output),
        Commands::Secret { action } => {
            let result = match action {
                SecretAction::Set { value } => ctx.api.set_secret(&value)?,
                SecretAction::Clear => ctx.api.clear_secret()?,
                SecretAction::Status => ctx.api.secret_status(),
            };
            emit(&result, output)
        }
        Commands::Config { .. } => handle_config(&ctx, output),
    }
}

fn emit(result: &CmdResult, output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Json => print_json(result),
        OutputMode::Text => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_list(ctx: &FolioContext, output: OutputMode) -> Result<()> {
    let result = ctx.api.list_items(ctx.backend)?;
    if output == OutputMode::Text {
        print_items(&result.listed_items);
    }
    emit(&result, output)
}

fn handle_render(ctx: &FolioContext, output: OutputMode) -> Result<()> {
    let result = ctx.api.render_cards(ctx.backend)?;
    if output == OutputMode::Text {
        print_cards(&result.cards);
    }
    emit(&result, output)
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    data_dir: &'a PathBuf,
    config_files: &'a [PathBuf],
    backend: String,
    env_file: PathBuf,
    secret_source: String,
    config: &'a FolioConfig,
}

fn handle_config(ctx: &FolioContext, output: OutputMode) -> Result<()> {
    let report = ConfigReport {
        data_dir: &ctx.data_dir,
        config_files: &ctx.config_files,
        backend: ctx.backend.to_string(),
        env_file: ctx.config.env_file_path(&ctx.data_dir),
        secret_source: ctx.secret_source.to_string(),
        config: &ctx.config,
    };
    if output == OutputMode::Json {
        return print_json(&report);
    }

    println!("data_dir     = {}", report.data_dir.display());
    for file in report.config_files {
        let marker = if file.exists() { "" } else { " (missing)" };
        println!("config file  = {}{}", file.display(), marker);
    }
    println!("backend      = {}", report.backend);
    println!("endpoint     = {}", report.config.endpoint);
    println!("env_file     = {}", report.env_file.display());
    println!("seed_samples = {}", report.config.seed_samples);
    println!("master key   = {}", report.secret_source);
    Ok(())
}
