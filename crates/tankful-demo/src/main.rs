use clap::Parser;
use std::io;
use std::path::PathBuf;
use tankful::Fuel;
use tankful_demo::{DemoConfig, Result, run_script};

#[derive(Parser)]
#[command(
    name = "tankful-demo",
    version,
    about = "Fill up, drive, and refuel a vehicle",
    long_about = "Builds a vehicle, fills its tank, drives it, requests a new fuel level, and prints the level it ends up with."
)]
struct Cli {
    /// TOML file describing the vehicle and the requested fuel level
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Vehicle brand
    #[arg(long)]
    brand: Option<String>,

    /// Vehicle model
    #[arg(long)]
    model: Option<String>,

    /// Vehicle trim level
    #[arg(long)]
    trim: Option<String>,

    /// Fuel level to request after driving
    #[arg(long, value_name = "LEVEL", allow_negative_numbers = true)]
    level: Option<Fuel>,

    /// Print the default or the effective configuration as TOML
    #[arg(long, value_name = "OPTION")]
    print_config: Option<PrintConfig>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PrintConfig {
    Default,
    Current,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Some(PrintConfig::Default) = cli.print_config {
        println!("{}", DemoConfig::default().to_toml()?);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(config_path) => {
            log::debug!("loading config from {}", config_path.display());
            DemoConfig::from_file(config_path)?
        }
        None => DemoConfig::default(),
    };

    if let Some(brand) = cli.brand {
        config.brand = brand;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(trim) = cli.trim {
        config.trim = trim;
    }
    if let Some(level) = cli.level {
        config.new_level = level;
    }

    if let Some(PrintConfig::Current) = cli.print_config {
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&config, &mut out)?;
    Ok(())
}
