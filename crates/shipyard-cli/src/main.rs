use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

use commands::catalog::{handle_catalog_command, CatalogTable};
use commands::check::handle_check_command;
use commands::load_catalog;
use commands::new::{handle_new_command, NewCommandArgs};
use commands::show::handle_show_command;
use shipyard_cli::output::OutputFormat;
use shipyard_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Starship design calculator")]
struct Cli {
    /// Load lookup tables from this directory instead of the built-in set.
    #[arg(long, global = true, env = "SHIPYARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new design file.
    New {
        /// Hull tonnage (capped at 2000).
        #[arg(long)]
        tonnage: u32,
        /// Fit a bridge.
        #[arg(long)]
        bridge: bool,
        /// Fuel tankage in tons.
        #[arg(long, default_value_t = 0)]
        fuel: u32,
        /// Hull configuration.
        #[arg(long, default_value = "Standard")]
        config: String,
        /// Jump drive code.
        #[arg(long)]
        jump: Option<String>,
        /// Maneuver drive code.
        #[arg(long)]
        maneuver: Option<String>,
        /// Power plant code.
        #[arg(long)]
        plant: Option<String>,
        /// Design name, used for the file name in the designs directory.
        #[arg(long, default_value = "untitled")]
        name: String,
        /// Write to this path instead of the designs directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the summary of a design file.
    Show {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report design problems; exits non-zero when any are found.
    Check { file: PathBuf },
    /// List the entries of a lookup table.
    Catalog {
        #[arg(value_enum)]
        table: CatalogTable,
    },
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = load_catalog(cli.data_dir.as_deref())?;
    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match cli.command {
        Command::New {
            tonnage,
            bridge,
            fuel,
            config,
            jump,
            maneuver,
            plant,
            name,
            out,
        } => {
            let args = NewCommandArgs {
                tonnage,
                bridge,
                fuel,
                config,
                jump,
                maneuver,
                plant,
                name,
                out,
            };
            handle_new_command(&catalog, &args)?;
        }
        Command::Show { file, format } => handle_show_command(&catalog, &file, format)?,
        Command::Check { file } => {
            if !handle_check_command(&catalog, &file, &palette)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Catalog { table } => handle_catalog_command(&catalog, table, &palette),
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
