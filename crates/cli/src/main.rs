mod exit_code;
mod loading;

use exit_code::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use graphql_config::{find_config, load_config, ConfigError, TypesConfig};
use graphql_type_refs::{resolve_type_names, TypePolicy};
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "graphql-types")]
#[command(
    about = "Print every schema type a set of GraphQL operations references",
    long_about = None
)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Schema file: SDL, or an introspection result if it ends in `.json`
    #[arg(value_name = "SCHEMA")]
    schema: Option<PathBuf>,

    /// Document file, directory, or glob pattern
    #[arg(value_name = "DOCUMENTS")]
    documents: Option<String>,

    /// Sort the printed type names
    #[arg(long)]
    sorted: bool,

    /// Path to a `.graphql-types.yml` config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Drop a type name from the output (repeatable)
    #[arg(long, value_name = "NAME")]
    deny: Vec<String>,

    /// Always print a type name (repeatable)
    #[arg(long, value_name = "NAME")]
    include: Vec<String>,

    /// Start from an empty policy instead of the built-in one
    #[arg(long)]
    no_default_policy: bool,

    /// Log resolution progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Force colored output even when not a TTY
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    init_tracing(cli.verbose);
    configure_colors(cli.color, cli.no_color);

    let (Some(schema_path), Some(documents)) = (&cli.schema, &cli.documents) else {
        let missing = if cli.schema.is_none() {
            "<SCHEMA>"
        } else {
            "<DOCUMENTS>"
        };
        eprintln!(
            "{} missing required argument {missing}\n\n{}",
            "error:".red().bold(),
            Cli::command().render_usage()
        );
        ExitCode::UsageError.exit();
    };

    let config = load_types_config(cli.config.as_deref())
        .unwrap_or_else(|err| fail(ExitCode::ConfigError, &err));
    let policy = build_policy(&cli, &config);

    let schema =
        loading::load_schema(schema_path).unwrap_or_else(|err| fail(err.exit_code(), &err));
    let document = loading::load_documents(documents, &config.document_extensions())
        .unwrap_or_else(|err| fail(err.exit_code(), &err));

    let mut names = resolve_type_names(&schema, &document, &policy);
    if cli.sorted {
        names = names.sorted();
    }

    let json = names.to_json()?;
    writeln!(std::io::stdout().lock(), "{json}")?;
    Ok(())
}

/// Parse the command line. `--help` and `--version` exit 0; any other
/// parse failure is a usage error.
fn parse_args() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        if !err.use_stderr() {
            err.exit();
        }
        err.print().ok();
        ExitCode::UsageError.exit()
    })
}

fn fail(code: ExitCode, err: &dyn Display) -> ! {
    eprintln!("{} {err}", "error:".red().bold());
    tracing::debug!(code = code.code(), reason = %code, "Exiting");
    code.exit()
}

/// Load the explicit config, or the nearest one above the current directory.
/// No config file at all means the defaults.
fn load_types_config(explicit: Option<&Path>) -> Result<TypesConfig, ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(&std::env::current_dir()?),
    };

    match path {
        Some(path) => load_config(&path),
        None => Ok(TypesConfig::default()),
    }
}

/// The active policy: the config's policy if it has one, otherwise the
/// built-in policy (or nothing with `--no-default-policy`), plus the
/// `--deny`/`--include` names.
fn build_policy(cli: &Cli, config: &TypesConfig) -> TypePolicy {
    let base = match &config.policy {
        Some(policy) => TypePolicy::new(&policy.denylist, &policy.forced_include),
        None if cli.no_default_policy => TypePolicy::empty(),
        None => TypePolicy::default(),
    };

    let policy = cli.deny.iter().fold(base, |policy, name| policy.deny(name));
    cli.include
        .iter()
        .fold(policy, |policy, name| policy.include(name))
}

/// Logs go to stderr so stdout carries only the JSON result.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "off" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    let env = |name: &str| std::env::var_os(name).map(|value| value.to_string_lossy().into_owned());
    if let Some(enabled) = color_override(force_color, no_color, env) {
        colored::control::set_override(enabled);
    }
}

/// Decide whether to force colors on or off. `None` leaves the decision to
/// TTY detection in `colored`.
///
/// Flags win over `NO_COLOR`, which wins over `CLICOLOR_FORCE`, which wins
/// over `CLICOLOR`.
fn color_override(
    force_color: bool,
    no_color: bool,
    env: impl Fn(&str) -> Option<String>,
) -> Option<bool> {
    if force_color {
        return Some(true);
    }
    if no_color || env("NO_COLOR").is_some() {
        return Some(false);
    }
    if let Some(force) = env("CLICOLOR_FORCE") {
        return (!force.is_empty() && force != "0").then_some(true);
    }
    env("CLICOLOR")
        .filter(|value| value == "0")
        .map(|_| false)
}
