//! Top-level CLI definition and dispatch.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};
use serde_json::{Value, json};
use thiserror::Error;

use crate::core::config::Config;
use crate::core::paths::resolve_absolute_path;
use crate::domain::records::StatusKind;
use crate::domain::seed;

/// Recycle Ops — terminal console for recycling pickup operations.
#[derive(Debug, Parser)]
#[command(
    name = "rops",
    author,
    version,
    about = "Recycle Ops - Recycling Operations Console",
    long_about = None
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Subcommand to execute. Defaults to the interactive console.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Run the interactive operations console (default).
    Console,
    /// Dump a seed collection to stdout.
    Seed(SeedArgs),
    /// View and validate configuration state.
    Config(ConfigArgs),
    /// Show version and optional build metadata.
    Version(VersionArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct SeedArgs {
    /// Collection to dump.
    #[arg(value_enum)]
    collection: SeedCollection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeedCollection {
    Pickups,
    Drivers,
    Submissions,
    Routes,
    PickupPoints,
    Users,
    Transactions,
    Activity,
    Services,
}

#[derive(Debug, Clone, clap::Args, Default)]
struct ConfigArgs {
    /// Config operation to run.
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Print resolved config file path.
    Path,
    /// Print effective merged configuration.
    Show,
    /// Validate configuration and exit.
    Validate,
}

#[derive(Debug, Clone, clap::Args, Default)]
struct VersionArgs {
    /// Include additional build metadata fields.
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, clap::Args)]
struct CompletionsArgs {
    /// Shell to generate completion script for.
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Json(_) => 3,
        }
    }
}

/// Dispatch CLI commands.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        None | Some(Command::Console) => run_console(cli),
        Some(Command::Seed(args)) => run_seed(cli, args),
        Some(Command::Config(args)) => run_config(cli, args),
        Some(Command::Version(args)) => emit_version(cli, args),
        Some(Command::Completions(args)) => {
            let mut command = Cli::command();
            let binary_name = command.get_name().to_string();
            generate(args.shell, &mut command, binary_name, &mut io::stdout());
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let override_path = cli
        .config
        .as_deref()
        .map(|path| resolve_absolute_path(path));
    Config::load(override_path.as_deref()).map_err(|e| CliError::Runtime(e.to_string()))
}

fn run_console(cli: &Cli) -> Result<(), CliError> {
    let mut config = load_config(cli)?;
    // The flag reaches the theme through the display config so the console
    // renders monochrome too, not just the CLI surface.
    if cli.no_color {
        config.display.no_color = true;
    }
    crate::tui::run(config).map_err(|e| CliError::Runtime(e.to_string()))
}

// ──────────────────── seed dump ────────────────────

impl SeedCollection {
    const fn name(self) -> &'static str {
        match self {
            Self::Pickups => "pickups",
            Self::Drivers => "drivers",
            Self::Submissions => "submissions",
            Self::Routes => "routes",
            Self::PickupPoints => "pickup-points",
            Self::Users => "users",
            Self::Transactions => "transactions",
            Self::Activity => "activity",
            Self::Services => "services",
        }
    }

    fn to_json(self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Pickups => serde_json::to_value(seed::pickups()),
            Self::Drivers => serde_json::to_value(seed::drivers()),
            Self::Submissions => serde_json::to_value(seed::submissions()),
            Self::Routes => serde_json::to_value(seed::routes()),
            Self::PickupPoints => serde_json::to_value(seed::pickup_points()),
            Self::Users => serde_json::to_value(seed::users()),
            Self::Transactions => serde_json::to_value(seed::transactions()),
            Self::Activity => serde_json::to_value(seed::activity_feed()),
            Self::Services => serde_json::to_value(seed::service_statuses()),
        }
    }
}

fn run_seed(cli: &Cli, args: &SeedArgs) -> Result<(), CliError> {
    match output_mode(cli) {
        OutputMode::Json => {
            let payload = json!({
                "command": "seed",
                "collection": args.collection.name(),
                "records": args.collection.to_json()?,
            });
            write_json_line(&payload)
        }
        OutputMode::Human => print_seed_human(args.collection),
    }
}

fn print_seed_human(collection: SeedCollection) -> Result<(), CliError> {
    match collection {
        SeedCollection::Pickups => {
            let rows = seed::pickups();
            println!("{} ({} records)", "Pickups".bold(), rows.len());
            println!(
                "  {:<6}  {:<16}  {:<12}  {:<11}  {:<8}  {}",
                "ID", "Customer", "Material", "Status", "Priority", "Scheduled"
            );
            for p in &rows {
                println!(
                    "  {:<6}  {:<16}  {:<12}  {:<11}  {:<8}  {}",
                    p.id,
                    p.customer,
                    p.material,
                    p.status.label(),
                    p.priority.label(),
                    p.scheduled_at.format("%Y-%m-%d %H:%M"),
                );
            }
        }
        SeedCollection::Drivers => {
            let rows = seed::drivers();
            println!("{} ({} records)", "Drivers".bold(), rows.len());
            for d in &rows {
                println!(
                    "  {:<6}  {:<16}  {:<10}  {}",
                    d.id,
                    d.name,
                    d.truck,
                    d.status.label()
                );
            }
        }
        SeedCollection::Submissions => {
            let rows = seed::submissions();
            println!("{} ({} records)", "Submissions".bold(), rows.len());
            println!(
                "  {:<6}  {:<16}  {:<12}  {:<9}  {:>8}",
                "ID", "User", "Material", "Status", "Weight"
            );
            for s in &rows {
                println!(
                    "  {:<6}  {:<16}  {:<12}  {:<9}  {:>6.1} kg",
                    s.id,
                    s.user,
                    s.material,
                    s.status.label(),
                    s.estimated_weight_kg,
                );
            }
        }
        SeedCollection::Routes => {
            let rows = seed::routes();
            println!("{} ({} records)", "Routes".bold(), rows.len());
            println!(
                "  {:<6}  {:<18}  {:<14}  {:<9}  {:>7}  {:>4}",
                "ID", "Name", "Driver", "Status", "Stops", "Eff"
            );
            for r in &rows {
                println!(
                    "  {:<6}  {:<18}  {:<14}  {:<9}  {:>7}  {:>3}%",
                    r.id,
                    r.name,
                    r.driver,
                    r.status.label(),
                    r.pickups,
                    r.efficiency,
                );
            }
        }
        SeedCollection::PickupPoints => {
            let rows = seed::pickup_points();
            println!("{} ({} records)", "Pickup points".bold(), rows.len());
            for p in &rows {
                println!(
                    "  {:<6}  {:<28}  {:<11}  {}",
                    p.id,
                    p.address,
                    p.kind.label(),
                    p.priority.label(),
                );
            }
        }
        SeedCollection::Users => {
            let rows = seed::users();
            println!("{} ({} records)", "Users".bold(), rows.len());
            println!(
                "  {:<6}  {:<16}  {:<9}  {:<7}  {:>7}",
                "ID", "Name", "Status", "Tier", "Points"
            );
            for u in &rows {
                println!(
                    "  {:<6}  {:<16}  {:<9}  {:<7}  {:>7}",
                    u.id,
                    u.name,
                    u.status.label(),
                    u.tier.label(),
                    u.reward_points,
                );
            }
        }
        SeedCollection::Transactions => {
            let rows = seed::transactions();
            println!("{} ({} records)", "Transactions".bold(), rows.len());
            for t in &rows {
                println!(
                    "  {:<6}  {:<6}  {:<9}  {:>+6}  {}",
                    t.id,
                    t.user_id,
                    t.kind.label(),
                    t.points,
                    t.description,
                );
            }
        }
        SeedCollection::Activity => {
            let rows = seed::activity_feed();
            println!("{} ({} records)", "Activity".bold(), rows.len());
            for a in &rows {
                println!(
                    "  [{:<9}]  {} — {} ({} min ago)",
                    a.kind.label(),
                    a.title,
                    a.description,
                    a.minutes_ago,
                );
            }
        }
        SeedCollection::Services => {
            let rows = seed::service_statuses();
            println!("{} ({} records)", "Services".bold(), rows.len());
            for s in &rows {
                println!("  {:<22}  {:<12}  {}", s.name, s.state.label(), s.detail);
            }
        }
    }
    Ok(())
}

// ──────────────────── config commands ────────────────────

fn run_config(cli: &Cli, args: &ConfigArgs) -> Result<(), CliError> {
    match &args.command {
        None | Some(ConfigCommand::Path) => {
            let path = cli
                .config
                .as_deref()
                .map_or_else(Config::default_path, |p| resolve_absolute_path(p));
            let exists = path.exists();

            match output_mode(cli) {
                OutputMode::Human => {
                    println!("{}", path.display());
                    if !exists {
                        println!("  (file does not exist; defaults will be used)");
                    }
                }
                OutputMode::Json => {
                    let payload = json!({
                        "command": "config path",
                        "path": path.to_string_lossy(),
                        "exists": exists,
                    });
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
        Some(ConfigCommand::Show) => {
            let config = load_config(cli)?;

            match output_mode(cli) {
                OutputMode::Human => {
                    let toml_str = toml::to_string_pretty(&config)
                        .map_err(|e| CliError::Runtime(format!("serialize config: {e}")))?;
                    println!("{toml_str}");
                }
                OutputMode::Json => {
                    let value = serde_json::to_value(&config)?;
                    let payload = json!({
                        "command": "config show",
                        "config": value,
                    });
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
        Some(ConfigCommand::Validate) => match load_config(cli) {
            Ok(config) => {
                let hash = config
                    .stable_hash()
                    .map_err(|e| CliError::Runtime(e.to_string()))?;

                match output_mode(cli) {
                    OutputMode::Human => {
                        println!("{}", "Configuration is valid.".green());
                        println!("  Source: {}", config.paths.config_file.display());
                        println!("  Hash: {hash}");
                    }
                    OutputMode::Json => {
                        let payload = json!({
                            "command": "config validate",
                            "valid": true,
                            "path": config.paths.config_file.to_string_lossy(),
                            "hash": hash,
                        });
                        write_json_line(&payload)?;
                    }
                }
                Ok(())
            }
            Err(e) => {
                match output_mode(cli) {
                    OutputMode::Human => {
                        eprintln!("{} {e}", "Configuration is INVALID:".red());
                    }
                    OutputMode::Json => {
                        let payload = json!({
                            "command": "config validate",
                            "valid": false,
                            "error": e.to_string(),
                        });
                        write_json_line(&payload)?;
                    }
                }
                Err(CliError::User(format!("invalid config: {e}")))
            }
        },
    }
}

// ──────────────────── version and output plumbing ────────────────────

fn emit_version(cli: &Cli, args: &VersionArgs) -> Result<(), CliError> {
    let version = env!("CARGO_PKG_VERSION");
    let package = env!("CARGO_PKG_NAME");
    let target = option_env!("TARGET").unwrap_or("unknown");
    let profile = option_env!("PROFILE").unwrap_or("unknown");

    match output_mode(cli) {
        OutputMode::Human => {
            println!("rops {version}");
            if args.verbose {
                println!("package: {package}");
                println!("target: {target}");
                println!("profile: {profile}");
            }
        }
        OutputMode::Json => {
            let payload = json!({
                "binary": "rops",
                "version": version,
                "package": package,
                "build": {
                    "target": target,
                    "profile": profile,
                }
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    writeln!(stdout)?;
    Ok(())
}

fn output_mode(cli: &Cli) -> OutputMode {
    let env_mode = std::env::var("ROPS_OUTPUT_FORMAT").ok();
    resolve_output_mode(cli.json, env_mode.as_deref(), io::stdout().is_terminal())
}

fn resolve_output_mode(json_flag: bool, env_mode: Option<&str>, stdout_is_tty: bool) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }

    let fallback = if stdout_is_tty {
        OutputMode::Human
    } else {
        OutputMode::Json
    };

    match env_mode
        .map(str::trim)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => OutputMode::Json,
        Some("human") => OutputMode::Human,
        Some("auto") | None => fallback,
        Some(_) => fallback,
    }
}

// ──────────────────── tests ────────────────────
