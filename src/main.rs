// ==========================================================
//  netguard  — home network security assessment
// ==========================================================

use clap::{Parser, Subcommand};
use netguard::source::apply_scan_preferences;
use netguard::{
    assess, find_suspicious, table, Device, DeviceSource, FixtureSource, JsonFileSource,
    JsonFileStore, NetGuardError, Settings,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_SETTINGS_FILE: &str = "netguard-settings.json";

#[derive(Parser, Debug)]
#[command(
    name = "netguard",
    version,
    about = "Security score and threat findings for a scanned home network"
)]
struct Args {
    /// Settings file (JSON key-value store)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Increase verbosity level (use -v or -vv)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a scan result and list findings
    Assess {
        /// Scan result file (object with "devices" or a bare device array)
        file: PathBuf,
        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the device inventory with categories
    Classify { file: PathBuf },
    /// List devices matching suspicious-device indicators
    Suspicious {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Assess generated sample devices
    Demo {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Write the resolved settings back to the settings file
    InitSettings,
}

#[tokio::main]
async fn main() -> Result<(), NetGuardError> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings_path = args
        .settings
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let mut store = JsonFileStore::open(&settings_path)?;
    let settings = Settings::load(&store)?;
    info!(path = %settings_path.display(), "settings resolved");

    match args.command {
        Command::Assess { file, json } => {
            let devices = load_devices(&JsonFileSource::new(file), &settings).await?;
            let result = assess(&devices, &settings.security)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", table::findings_table(&result, &settings.display));
                println!("{}", table::summary(&result));
            }
        }
        Command::Classify { file } => {
            let devices = load_devices(&JsonFileSource::new(file), &settings).await?;
            println!("{}", table::devices_table(&devices, &settings.display));
        }
        Command::Suspicious { file, json } => {
            let devices = load_devices(&JsonFileSource::new(file), &settings).await?;
            let suspicious = find_suspicious(&devices);
            if json {
                println!("{}", serde_json::to_string_pretty(&suspicious)?);
            } else if suspicious.is_empty() {
                println!("No suspicious devices found among {} devices", devices.len());
            } else {
                println!("{}", table::suspicious_table(&suspicious, &settings.display));
            }
        }
        Command::Demo { count, seed } => {
            let source = FixtureSource::new(count, seed);
            warn!(source = source.name(), "assessing generated sample data");
            let devices = load_devices(&source, &settings).await?;
            let result = assess(&devices, &settings.security)?;
            println!("{}", table::devices_table(&devices, &settings.display));
            println!("{}", table::findings_table(&result, &settings.display));
            println!("{}", table::summary(&result));
        }
        Command::InitSettings => {
            settings.save(&mut store)?;
            println!("Settings written to {}", store.path().display());
        }
    }

    Ok(())
}

/// Load from a source and strip data the scanning preferences disable
async fn load_devices(
    source: &dyn DeviceSource,
    settings: &Settings,
) -> Result<Vec<Device>, NetGuardError> {
    let mut devices = source.load().await?;
    apply_scan_preferences(&mut devices, &settings.scanning);
    Ok(devices)
}
