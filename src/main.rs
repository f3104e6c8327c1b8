//! CLI entry point for classdoc.
//!
//! Renders the annotation lines for one class element definition, the same
//! way the documentation generator plugin does, and shows active settings.

use anyhow::Context;
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use classdoc::io::{ExitCode, JsonResponse, OutputFormat};
use classdoc::{AnnotationKind, Element, ElementParser, Settings, TypeScriptProject};
use std::path::PathBuf;
use tracing::Level;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Parser)]
#[command(
    name = "classdoc",
    version,
    about = "Render apidoc field annotations from TypeScript classes",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the annotation lines for one element definition
    #[command(after_help = "Example:\n  classdoc render '(src/dto/user.ts) {UserDto}' --mode param")]
    Render {
        /// Element definition, e.g. "(src/dto/user.ts) {UserDto}"
        element: String,

        /// apiSuccessClass (success) or apiParamClass (param)
        #[arg(short, long)]
        mode: Option<AnnotationKind>,

        /// Base directory for relative source paths
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Display active settings
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(ExitCode::ConfigError.into());
        }
    };

    let level = if cli.verbose || settings.debug {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Config => {
            let rendered =
                toml::to_string_pretty(&settings).context("failed to serialize settings")?;
            print!("{rendered}");
        }
        Commands::Render {
            element,
            mode,
            root,
            json,
        } => {
            if let Some(mode) = mode {
                settings.mode = mode;
            }
            if root.is_some() {
                settings.project_root = root;
            }
            let code = render(&settings, &element, OutputFormat::from_json_flag(json))?;
            if !code.is_success() {
                std::process::exit(code.into());
            }
        }
    }

    Ok(())
}

fn render(settings: &Settings, content: &str, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let project = TypeScriptProject::from_settings(settings)
        .context("failed to start TypeScript analysis")?;
    let mut parser = ElementParser::new(project, settings.mode);

    match parser.render(content) {
        Ok(fragments) => {
            if format.is_json() {
                let elements: Vec<Element> = fragments.into_iter().map(Element::from).collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonResponse::success(elements))?
                );
            } else {
                for fragment in &fragments {
                    print!("{}", fragment.source_line());
                }
            }
            Ok(ExitCode::Success)
        }
        Err(e) => {
            if format.is_json() {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonResponse::from_error(&e))?
                );
            } else {
                eprintln!("Error: {e}");
                for suggestion in e.recovery_suggestions() {
                    eprintln!("  - {suggestion}");
                }
            }
            Ok(ExitCode::from_error(&e))
        }
    }
}
