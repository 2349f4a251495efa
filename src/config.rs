use anyhow::Result;
use clap_serde_derive::ClapSerde;

#[derive(ClapSerde, Debug)]
pub struct Config {
    /// The address the listener binds to
    #[default("0.0.0.0".to_string())]
    #[arg(short, long, env)]
    pub address: String,

    /// The port the listener binds to
    #[default(25566)]
    #[arg(short, long, env)]
    pub port: u16,

    /// Public base URL of the site, used for canonical links and the sitemap
    #[default("https://veganipsum.me".to_string())]
    #[arg(short, long, env)]
    pub base_url: String,

    /// Site name shown in titles and structured data
    #[default("Vegan Ipsum".to_string())]
    #[arg(long, env)]
    pub site_name: String,

    /// OTLP collector endpoint; telemetry export is disabled when empty
    #[default(String::new())]
    #[arg(long, env)]
    pub otlp_endpoint: String,

    /// Keep console logging on while exporting to an OTLP collector
    #[default(false)]
    #[arg(long, env)]
    pub console: bool,
}

impl Config {
    pub fn from_toml(path: &str) -> Result<Self> {
        let str = std::fs::read_to_string(path)?;
        Self::from_toml_str(&str)
    }

    /// Fields missing from the document keep their defaults.
    pub fn from_toml_str(str: &str) -> Result<Self> {
        let opt: <Config as ClapSerde>::Opt = toml::from_str(str)?;
        Ok(Config::from(opt))
    }

    pub fn otlp_endpoint(&self) -> Option<&str> {
        let endpoint = self.otlp_endpoint.trim();
        (!endpoint.is_empty()).then_some(endpoint)
    }
}
