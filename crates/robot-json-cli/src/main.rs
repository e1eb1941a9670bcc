//! Robot JSON exporter entry point
//!
//! Reads a design (snapshot or URDF), builds the joint graph and saves the
//! JSON robot descriptor.

mod config;
mod prompt;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use robot_json_core::{
    APP_TITLE, DesignHost, ExportError, ExportOutcome, JointGraphExporter, TracingLogger,
    UserPrompt, error_report, open_design,
};

use config::ConfigManager;
use prompt::{ConsolePrompt, NativePrompt};

#[derive(Parser)]
#[command(name = "robot-json")]
#[command(about = "Export a robot's joint graph to a JSON descriptor", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the OS config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a design to a robot descriptor
    Export {
        /// Design snapshot (.ron, .json) or URDF (.urdf, .xml)
        design: PathBuf,
        /// Output path; skips the save dialog
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Never open dialogs
        #[arg(long)]
        headless: bool,
    },
    /// Show or initialize the configuration file
    Config {
        /// Write the default configuration
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "robot_json=info,robot_json_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };

    match cli.command {
        Commands::Export {
            design,
            output,
            headless,
        } => {
            let headless = headless || config_manager.config().frontend.headless;
            export(&config_manager, &design, output, headless)
        }
        Commands::Config { init } => {
            if init {
                let mut manager = config_manager;
                manager.reset_to_defaults();
                manager.save().context("Failed to write configuration")?;
                println!("Wrote {}", manager.config_file_path().display());
            } else {
                let text = ron::ser::to_string_pretty(
                    config_manager.config(),
                    ron::ser::PrettyConfig::default(),
                )
                .context("Failed to render configuration")?;
                println!("# {}", config_manager.config_file_path().display());
                println!("{}", text);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn export(
    config_manager: &ConfigManager,
    design: &Path,
    output: Option<PathBuf>,
    headless: bool,
) -> Result<ExitCode> {
    tracing::info!("Exporting robot descriptor from {:?}", design);

    let mut prompt: Box<dyn UserPrompt> = if headless || output.is_some() {
        Box::new(ConsolePrompt::new(output))
    } else {
        Box::new(NativePrompt)
    };

    let Some(host) = open_host(design, prompt.as_mut()) else {
        return Ok(ExitCode::FAILURE);
    };

    let settings = config_manager.config().export.clone();
    let mut exporter = JointGraphExporter::new(settings, TracingLogger, prompt.as_mut());

    match exporter.run(host.as_ref()) {
        Ok(ExportOutcome::Written(path)) => {
            tracing::info!("Wrote {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Ok(ExportOutcome::Cancelled) => Ok(ExitCode::SUCCESS),
        // Already shown to the user by the exporter
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

/// Open the design file, reporting a failure through the prompt
fn open_host(design: &Path, prompt: &mut dyn UserPrompt) -> Option<Box<dyn DesignHost>> {
    match open_design(design) {
        Ok(host) => Some(host),
        Err(e) => {
            let error = ExportError::from(e);
            prompt.show_error(APP_TITLE, &format!("Failed:\n{}", error_report(&error)));
            None
        }
    }
}
