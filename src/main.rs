use anyhow::Result;
use clap::Parser;
use clap_serde_derive::ClapSerde;
use tokio::net::TcpListener;
use tracing::{error, info};

use vegan_ipsum::config::Config;
use vegan_ipsum::ipsum::VeganIpsum;
use vegan_ipsum::site::SiteConfig;
use vegan_ipsum::telemetry::init_telemetry;
use vegan_ipsum::{build_app, AppState};

const DEFAULT_CONFIG_FILE: &str = "VeganIpsum.toml";

macro_rules! exit_err {
    ($code:expr, $fmt:expr $(, $arg:expr)*) => {
        {
            error!($fmt $(, $arg)*);
            std::process::exit($code);
        }
    };
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env, default_value = DEFAULT_CONFIG_FILE)]
    config_file: String,

    /// Configuration options
    #[command(flatten)]
    pub opt_config: <Config as ClapSerde>::Opt,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_err) = match Config::from_toml(&args.config_file) {
        Ok(conf) => (conf.merge(args.opt_config), None),
        Err(err) if args.config_file == DEFAULT_CONFIG_FILE => {
            (Config::default().merge(args.opt_config), Some(err))
        }
        Err(err) => {
            init_telemetry(None, true)?;
            exit_err!(
                1,
                "Failed to read configuration file {} with error: {}",
                args.config_file,
                err
            );
        }
    };

    init_telemetry(config.otlp_endpoint(), config.console)?;
    if let Some(err) = config_err {
        info!("No usable {} ({}), using defaults", DEFAULT_CONFIG_FILE, err);
    }

    let site = SiteConfig::new(&config.site_name, &config.base_url)?;
    let state = AppState::new(VeganIpsum::default(), site);
    let router = build_app(state);

    let listener = TcpListener::bind(format!("{}:{}", config.address, config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    info!("Serving site as {}", config.base_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
