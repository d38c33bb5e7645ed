use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use rxlint::tracing_config::TracingConfig;
use rxlint::{ALL_RULES, LintConfig, Linter, Severity};

/// Default configuration file looked up in the working directory.
const CONFIG_FILE_NAME: &str = "rxlint.json";

/// CLI arguments for the rxlint binary.
///
/// The binary checks and inspects configuration. Linting itself needs a
/// syntax tree and node types from a host front end, which call the library
/// (`Linter::lint_file` / `Linter::lint_files`) directly.
#[derive(Parser, Debug)]
#[command(
    name = "rxlint",
    version,
    about = "Validate and inspect rxlint rule configuration",
    long_about = "Validate and inspect rxlint rule configuration.\n\n\
        Loads rxlint.json (or --config), compiles every enabled rule so that \
        invalid options are reported, and prints the enabled rules. Source \
        files are linted through the rxlint library by a host that supplies \
        syntax trees and node types; this binary does not read source files."
)]
struct CliArgs {
    /// Path to a configuration file or a directory containing rxlint.json.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print the resolved configuration and exit.
    #[arg(long = "showConfig", alias = "show-config")]
    show_config: bool,

    /// List the available rules and exit.
    #[arg(long = "listRules", alias = "list-rules")]
    list_rules: bool,

    /// Disable colored output.
    #[arg(long = "noColor", alias = "no-color")]
    no_color: bool,

    /// Tracing filter directives; overrides RXLINT_LOG and RUST_LOG.
    #[arg(long)]
    log: Option<String>,

    /// Tracing output format: text, tree or json.
    #[arg(long = "logFormat", alias = "log-format")]
    log_format: Option<String>,

    /// Log linter and rule decisions when no filter is set.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    TracingConfig::resolve(args.log.as_deref(), args.log_format.as_deref(), args.verbose).init();

    let color = !args.no_color && std::io::stdout().is_terminal();

    if args.list_rules {
        handle_list_rules(color);
        return Ok(());
    }

    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let config = resolve_config(args.config.as_deref(), &cwd)?;

    if args.show_config {
        let text = serde_json::to_string_pretty(&config.to_value())
            .context("failed to serialize configuration")?;
        println!("{text}");
        return Ok(());
    }

    // Compiling the rules validates every options object.
    let linter = Linter::from_config(&config).context("invalid rule options")?;
    let names: Vec<&str> = linter.rule_names().collect();
    if names.is_empty() {
        println!("configuration is valid; no rules enabled");
    } else {
        let plural = if names.len() == 1 { "" } else { "s" };
        println!(
            "configuration is valid; {} rule{plural} enabled: {}",
            names.len(),
            names.join(", ")
        );
    }
    Ok(())
}

fn handle_list_rules(color: bool) {
    for meta in ALL_RULES {
        let name = if color {
            meta.name.bright_blue().bold().to_string()
        } else {
            meta.name.to_string()
        };
        let options = if meta.has_options { " (configurable)" } else { "" };
        println!("{name}{options}\n    {}", meta.description);
    }
}

/// `--config` (file or directory), then `./rxlint.json`, then every rule at
/// `error`.
fn resolve_config(config: Option<&Path>, cwd: &Path) -> Result<LintConfig> {
    let path = match config {
        Some(path) if path.is_dir() => Some(path.join(CONFIG_FILE_NAME)),
        Some(path) => Some(path.to_path_buf()),
        None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|path| path.exists()),
    };
    match path {
        Some(path) => LintConfig::load(&path),
        None => Ok(LintConfig::all_rules(Severity::Error)),
    }
}
