use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use vegan_ipsum::client::{ClientError, FetchParams, GeneratorClient};
use vegan_ipsum::ipsum::{Format, Units};

#[derive(Parser)]
#[command(author, version, about = "Generate vegan placeholder text", long_about = None)]
struct Args {
    /// Base URL of the Vegan Ipsum service
    #[arg(short, long, env = "VEGAN_IPSUM_URL", default_value = "https://veganipsum.me")]
    url: String,

    /// How many units to generate (1 to 100)
    #[arg(short, long, default_value = "3")]
    count: String,

    /// Granularity of the generated text
    #[arg(long, value_enum, default_value_t = Units::Paragraphs)]
    units: Units,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("WARN")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = GeneratorClient::new(&args.url)?;
    let params = FetchParams {
        amount: args.count,
        units: args.units,
        format: args.format,
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match client.fetch(&params, &cancel).await {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(ClientError::Cancelled) => {
            eprintln!("Request cancelled");
            std::process::exit(130);
        }
        Err(ClientError::Rejected { message, .. }) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
        Err(err) => Err(err.into()),
    }
}
