//! stm32f1 — resolve libhal-stm32f1 build configurations from the command line.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use stm32f1_recipe::{BuildProfile, CompilerSettings, OptionValues, Settings};

#[derive(Parser)]
#[command(name = "stm32f1", version, about = "libhal-stm32f1 configuration resolver")]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Host settings and options, shared by every command.
#[derive(clap::Args, Debug, Default)]
struct ProfileArgs {
    /// Build profile (TOML) to start from
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Platform option (e.g., stm32f103c8)
    #[arg(long)]
    platform: Option<String>,
    /// Operating system setting (e.g., baremetal)
    #[arg(long)]
    os: Option<String>,
    /// compiler.cppstd setting (e.g., 20, gnu20)
    #[arg(long)]
    cppstd: Option<String>,
    /// Additional options as key=value
    #[arg(short = 'o', long = "option", value_parser = parse_key_value)]
    options: Vec<(String, String)>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the package info for a build configuration
    Info {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Folder the package is installed in (default: current directory)
        #[arg(long)]
        package_folder: Option<PathBuf>,
        /// Output format (human, json, toml, cargo)
        #[arg(long, default_value = "human")]
        format: String,
    },
    /// Compute the package id of a build configuration
    PackageId {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Validate the settings of a build configuration
    Validate {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Show recipe metadata and requirements
    Describe,
}

/// Setup logging based on verbose flag or RUST_LOG environment variable
fn setup_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("stm32f1=debug,stm32f1_recipe=debug,stm32f1_platform=debug")
    } else {
        EnvFilter::new("stm32f1=warn,stm32f1_recipe=warn,stm32f1_platform=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

impl ProfileArgs {
    /// The values given on the command line, as a profile.
    fn overlay(&self) -> BuildProfile {
        let mut options: OptionValues = self.options.iter().cloned().collect();
        if let Some(platform) = &self.platform {
            options.set("platform", platform.as_str());
        }
        BuildProfile {
            package_folder: None,
            settings: Settings {
                os: self.os.clone(),
                compiler: self.cppstd.as_ref().map(|cppstd| CompilerSettings {
                    cppstd: Some(cppstd.clone()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            options,
        }
    }

    /// Load the profile file, if any, and apply command-line overrides.
    fn resolve(&self) -> anyhow::Result<BuildProfile> {
        use anyhow::Context;

        let mut profile = match &self.profile {
            Some(path) => BuildProfile::load(path)
                .with_context(|| format!("loading profile {}", path.display()))?,
            None => BuildProfile::default(),
        };
        profile.merge(&self.overlay());
        Ok(profile)
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Info {
            profile,
            package_folder,
            format,
        } => {
            let profile = profile.resolve()?;
            commands::info::run(&profile, package_folder.as_deref(), &format)
        }
        Commands::PackageId { profile } => commands::package_id::run(&profile.resolve()?),
        Commands::Validate { profile } => commands::validate::run(&profile.resolve()?),
        Commands::Describe => commands::describe::run(),
    }
}
