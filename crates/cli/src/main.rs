mod commands;
mod config;
mod edits;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

use config::Mode;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Configuration-driven UI component generator.
#[derive(Parser)]
#[command(name = "kitforge", version, about = "Configuration-driven UI component generator")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Path to a kitforge.toml (default: ./kitforge.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless KITFORGE_LOG or [log] level says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available components
    List,

    /// Show a component's props and variant classes
    Show {
        /// Component identifier, e.g. Button
        component: String,
    },

    /// Show the breakpoint table
    Breakpoints,

    /// Generate code for a component
    Generate(GenerateArgs),

    /// Write the built-in catalog as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Validate a JSON catalog file
    Validate {
        /// Path to the catalog JSON file
        catalog: PathBuf,
    },
}

#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Component identifier, e.g. Button
    pub component: String,

    /// Set a prop: name=value, or breakpoint:name=value for an override
    #[arg(long = "set", value_name = "EDIT")]
    pub set: Vec<String>,

    /// What to emit (default: usage, or [generate] mode)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Render with this breakpoint's overrides applied
    #[arg(long, conflicts_with = "width")]
    pub breakpoint: Option<String>,

    /// Render for a viewport width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Use sample children instead of a placeholder comment
    #[arg(long)]
    pub sample: bool,

    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match config::discover(cli.config.as_deref()) {
        Ok(c) => c,
        Err(msg) => {
            report_error(&msg, cli.output, cli.quiet);
            process::exit(1);
        }
    };
    if let Err(msg) = logging::init(config.log.level.as_deref(), cli.verbose) {
        report_error(&msg, cli.output, cli.quiet);
        process::exit(1);
    }

    match cli.command {
        Commands::List => {
            commands::list::cmd_list(&config, cli.output, cli.quiet);
        }
        Commands::Show { component } => {
            commands::show::cmd_show(&config, &component, cli.output, cli.quiet);
        }
        Commands::Breakpoints => {
            commands::breakpoints::cmd_breakpoints(&config, cli.output, cli.quiet);
        }
        Commands::Generate(args) => {
            commands::generate::cmd_generate(&config, &args, cli.output, cli.quiet);
        }
        Commands::Export { out } => {
            commands::export::cmd_export(out.as_deref(), cli.output, cli.quiet);
        }
        Commands::Validate { catalog } => {
            commands::validate::cmd_validate(&catalog, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
