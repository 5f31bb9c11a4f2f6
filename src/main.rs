// SPDX-License-Identifier: PMPL-1.0-or-later

//! wakita-webconfig: inspect the locale catalog, route table and injected
//! client config of a Wakita deployment.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use wakita_webconfig::config::Settings;
use wakita_webconfig::output::OutputFormat;
use wakita_webconfig::{diagnostics, WebConstants};

#[derive(Parser)]
#[command(name = "wakita-webconfig")]
#[command(version)]
#[command(about = "Locale catalog, route table and client config for the Wakita web client")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (default: search /etc/wakita, ~/.config/wakita, .)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived locales, fallback locale, routes and prefix
    Show {
        /// Injected AppConfig JSON to derive from instead of settings
        #[arg(long, value_name = "FILE")]
        app_config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// List the route table
    Routes {
        #[arg(long, value_name = "FILE")]
        app_config: Option<PathBuf>,
    },

    /// List the locale catalog
    Locales {
        #[arg(long, value_name = "FILE")]
        app_config: Option<PathBuf>,
    },

    /// Print the UI config object injected into the index page
    UiConfig {
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Report inconsistencies in the derived values
    Check {
        #[arg(long, value_name = "FILE")]
        app_config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show { app_config, format } => {
            let constants = derive(cli.config.as_deref(), app_config.as_deref())?;
            println!("{}", format.serialize(&constants)?);
        }

        Commands::Routes { app_config } => {
            let constants = derive(cli.config.as_deref(), app_config.as_deref())?;
            for (route, path) in constants.app_routes.iter() {
                println!("{:16} {}", route.name(), path);
            }
        }

        Commands::Locales { app_config } => {
            let constants = derive(cli.config.as_deref(), app_config.as_deref())?;
            for (code, name) in constants.locales.iter() {
                if constants.fallback_locale.as_deref() == Some(code) {
                    println!("{:4} {} {}", code, name, "(fallback)".cyan());
                } else {
                    println!("{:4} {}", code, name);
                }
            }
        }

        Commands::UiConfig { format } => {
            let settings = Settings::load(cli.config.as_deref())?;
            let ui = settings.ui_config(env!("CARGO_PKG_VERSION"));
            println!("{}", format.serialize(&ui)?);
        }

        Commands::Check { app_config } => {
            let constants = derive(cli.config.as_deref(), app_config.as_deref())?;
            diagnostics::run_check(&constants)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Derive from an injected config file when given, otherwise from settings.
fn derive(settings_path: Option<&Path>, app_config: Option<&Path>) -> Result<WebConstants> {
    match app_config {
        Some(path) => WebConstants::load(path),
        None => {
            let settings = Settings::load(settings_path)?;
            Ok(WebConstants::derive(
                &settings.app_config(env!("CARGO_PKG_VERSION")),
            ))
        }
    }
}
