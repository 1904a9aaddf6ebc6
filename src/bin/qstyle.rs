use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use qstyle::{CascadeOrder, Declarations, LoadError, StyleSheet, Value, WidgetDescriptor};

#[derive(Parser)]
#[command(name = "qstyle")]
#[command(about = "Check, format and query widget style sheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a sheet and report the rule count or the first error.
    Check {
        file: PathBuf,
    },
    /// Print the canonical form of a sheet.
    Fmt {
        file: PathBuf,
    },
    /// Print the declarations a widget receives.
    Lookup {
        file: PathBuf,
        /// Widget class, e.g. QPushButton.
        class: String,
        /// Object name, matched by `#id` selectors.
        #[arg(long)]
        id: Option<String>,
        /// Active state such as hover or checked; repeatable.
        #[arg(long = "state")]
        states: Vec<String>,
        /// Subcontrol such as item or handle.
        #[arg(long)]
        subcontrol: Option<String>,
        /// Order matching rules by specificity instead of file order.
        #[arg(long)]
        specificity: bool,
        /// Emit JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Check { file } => Ok(check(&file)),
        Command::Fmt { file } => {
            let sheet = load(&file)?;
            print!("{}", sheet);
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup {
            file,
            class,
            id,
            states,
            subcontrol,
            specificity,
            json,
        } => {
            let sheet = load(&file)?;
            let mut widget = WidgetDescriptor::new(class).states(states);
            if let Some(id) = id {
                widget = widget.id(id);
            }
            if let Some(subcontrol) = subcontrol {
                widget = widget.subcontrol(subcontrol);
            }
            let order = if specificity {
                CascadeOrder::Specificity
            } else {
                CascadeOrder::SourceOrder
            };
            let decls = sheet.lookup_with(&widget, order);
            if json {
                println!("{}", serde_json::to_string_pretty(&decls)?);
            } else {
                print_declarations(&decls);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(path: &Path) -> anyhow::Result<StyleSheet> {
    StyleSheet::from_file(path).with_context(|| format!("failed to load {}", path.display()))
}

fn check(path: &Path) -> ExitCode {
    match StyleSheet::from_file(path) {
        Ok(sheet) => {
            println!(
                "{} {}: {} rules",
                style("ok").green().bold(),
                path.display(),
                sheet.len()
            );
            ExitCode::SUCCESS
        }
        Err(LoadError::Parse { source, .. }) => {
            println!(
                "{} {}:{}:{}: {}",
                style("error").red().bold(),
                path.display(),
                source.line,
                source.column,
                source.kind
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            println!("{} {}", style("error").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn print_declarations(decls: &Declarations) {
    if decls.is_empty() {
        println!("{}", style("(no matching rules)").dim());
        return;
    }
    for decl in decls {
        match swatch(&decl.value) {
            Some(swatch) => println!("{}: {} {}", style(&decl.property).cyan(), swatch, decl.value),
            None => println!("{}: {}", style(&decl.property).cyan(), decl.value),
        }
    }
}

/// A colored block for values that are, or start with, a color.
fn swatch(value: &Value) -> Option<String> {
    let color = match value {
        Value::Space(parts) => parts.iter().find_map(Value::as_color)?,
        Value::Gradient(gradient) => &gradient.stops.first()?.color,
        other => other.as_color()?,
    };
    let index = color.to_ansi256()?;
    Some(style("  ").on_color256(index).to_string())
}
