use clap::Parser;
use std::path::PathBuf;

use bodhi_site::config::Config;
use bodhi_site::{logging, server};

/// Bodhi site server - marketing and booking-information backend for the property
#[derive(Parser, Debug)]
#[command(name = "bodhi-site")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Test configuration and exit
    #[arg(long)]
    test: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    logging::init_subscriber().expect("Failed to initialize logging subsystem");

    let args = Args::parse();

    let config = Config::from_file(&args.config).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        config_file = %args.config.display(),
        server_address = %config.server.address,
        server_port = config.server.port,
        cloud_name = %config.cloudinary.cloud_name,
        admin_api_enabled = config.cloudinary.api_key.is_some() && config.cloudinary.api_secret.is_some(),
        "Configuration loaded successfully"
    );

    if args.test {
        println!("Configuration OK");
        return Ok(());
    }

    server::run(config).await
}
