//! `atomstyle` command-line tool.
//!
//! ```text
//! atomstyle resolve button small primary
//! atomstyle list icon-button
//! atomstyle --stylesheet extra.yaml export --format json
//! ```

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use atomstyle::ThemeSet;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "atomstyle", version, about = "Resolve size/variant themes to class strings")]
struct Cli {
    /// Extra stylesheet (YAML or JSON) merged over the built-in themes.
    #[arg(short, long = "stylesheet", value_name = "FILE", global = true)]
    stylesheets: Vec<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Ignore the built-in button and icon-button themes.
    #[arg(long, global = true)]
    no_builtin: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the class string for a theme, size, and variant.
    Resolve {
        theme: String,
        size: String,
        variant: String,
    },
    /// List themes, or the size and variant keys of one theme.
    List { theme: Option<String> },
    /// Print every loaded theme as a stylesheet.
    Export {
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_themes(cli: &Cli) -> Result<ThemeSet> {
    let mut themes = if cli.no_builtin {
        ThemeSet::new()
    } else {
        ThemeSet::builtin()
    };
    for path in &cli.stylesheets {
        let loaded = ThemeSet::from_path(path)
            .with_context(|| format!("loading stylesheet {}", path.display()))?;
        tracing::info!(path = %path.display(), themes = loaded.len(), "merged stylesheet");
        themes.merge(loaded);
    }
    Ok(themes)
}

/// Executes a parsed command and returns what it prints on stdout.
fn run(cli: &Cli) -> Result<String> {
    let themes = load_themes(cli)?;
    let mut out = String::new();

    match &cli.command {
        Command::Resolve {
            theme,
            size,
            variant,
        } => {
            let rules = themes.resolve(theme, size, variant)?;
            writeln!(out, "{}", rules)?;
        }
        Command::List { theme: None } => {
            for theme in themes.iter() {
                writeln!(
                    out,
                    "{}  {}",
                    style(theme.name()).bold(),
                    style(format!(
                        "{} sizes, {} variants",
                        theme.size_keys().count(),
                        theme.variant_keys().count()
                    ))
                    .dim()
                )?;
            }
        }
        Command::List { theme: Some(name) } => {
            let theme = themes.theme(name)?;
            writeln!(out, "{}", style(theme.name()).bold())?;
            writeln!(out, "  base:     {}", theme.base_rules())?;
            writeln!(out, "  sizes:    {}", theme.size_keys().collect::<Vec<_>>().join(", "))?;
            writeln!(out, "  variants: {}", theme.variant_keys().collect::<Vec<_>>().join(", "))?;
        }
        Command::Export { format } => {
            let document = match format {
                Format::Yaml => themes.to_yaml()?,
                Format::Json => themes.to_json()?,
            };
            writeln!(out, "{}", document.trim_end())?;
        }
    }

    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = run(&cli)?;
    print!("{}", output);
    Ok(())
}
