use super::render::{print_messages, render_actions, render_history, render_history_json};
use super::setup::{ActionCommands, Cli, Commands, OutputFormat};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use liftlog::api::{History, LiftlogApi};
use liftlog::config::LogConfig;
use liftlog::error::{LiftlogError, Result};
use liftlog::store::fs::FileStore;
use liftlog::store::DocumentStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext<S: DocumentStore> {
    api: LiftlogApi<S>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&mut ctx, cli.command, &mut out)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("liftlog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext<FileStore>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = LogConfig::load(&cwd)?;
    if let Some(file) = &cli.file {
        config = config.with_document(file);
    }
    tracing::debug!(document = %config.document.display(), "using log");

    let store = FileStore::new(config.document.clone());
    Ok(AppContext {
        api: LiftlogApi::new(store, config),
    })
}

/// Every command runs against an existing log, so storage is bootstrapped first.
fn dispatch<S: DocumentStore, W: Write>(
    ctx: &mut AppContext<S>,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    let init = ctx.api.ensure_storage()?;
    print_messages(out, &init.messages)?;

    match command {
        Commands::Action(ActionCommands::Show) => handle_action_show(ctx, out),
        Commands::Action(ActionCommands::Add { name }) => handle_action_add(ctx, &name, out),
        Commands::Record {
            action,
            reps,
            weight,
            sets,
        } => handle_record(ctx, &action, reps, weight, sets, out),
        Commands::History { action, output } => {
            handle_history(ctx, action.as_deref(), output, out)
        }
    }
}

fn handle_action_show<S: DocumentStore, W: Write>(
    ctx: &mut AppContext<S>,
    out: &mut W,
) -> Result<()> {
    let result = ctx.api.list_actions()?;
    if !result.actions.is_empty() {
        write!(out, "{}", render_actions(&result.actions))?;
    }
    print_messages(out, &result.messages)?;
    Ok(())
}

fn handle_action_add<S: DocumentStore, W: Write>(
    ctx: &mut AppContext<S>,
    name: &str,
    out: &mut W,
) -> Result<()> {
    let result = ctx.api.add_action(name)?;
    print_messages(out, &result.messages)?;
    Ok(())
}

fn handle_record<S: DocumentStore, W: Write>(
    ctx: &mut AppContext<S>,
    action: &str,
    reps: u32,
    weight: f64,
    sets: Option<u32>,
    out: &mut W,
) -> Result<()> {
    let today = Local::now().date_naive();
    let result = ctx.api.record(action, reps, weight, sets, today)?;
    print_messages(out, &result.messages)?;
    Ok(())
}

fn handle_history<S: DocumentStore, W: Write>(
    ctx: &mut AppContext<S>,
    action: Option<&str>,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let result = ctx.api.history(action)?;
    match (output, &result.history) {
        (OutputFormat::Json, _) => {
            writeln!(out, "{}", render_history_json(result.entries())?)?;
            return Ok(());
        }
        (OutputFormat::Text, Some(History::Entries(entries))) => {
            write!(out, "{}", render_history(entries))?;
        }
        (OutputFormat::Text, _) => {}
    }
    print_messages(out, &result.messages)?;
    Ok(())
}

/// Prints `error` to stderr with a hint where one helps.
pub fn report_error(error: &LiftlogError) {
    eprintln!("{}", format!("错误 (Error): {}", error).red().bold());
    if matches!(error, LiftlogError::ActionNotFound(_)) {
        eprintln!("请先使用 `action add` 添加，或检查拼写。");
    }
}
