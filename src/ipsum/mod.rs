use std::fmt::Display;
use std::str::FromStr;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod vegan;

pub use vegan::VeganIpsum;

/// The granularity of generated text
#[derive(PartialEq, Eq, Deserialize, Serialize, Clone, Copy, Debug, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Paragraphs,
    Sentences,
    Words,
}

impl Units {
    pub const ALL: [Units; 3] = [Units::Paragraphs, Units::Sentences, Units::Words];

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Paragraphs => "paragraphs",
            Units::Sentences => "sentences",
            Units::Words => "words",
        }
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Units {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "paragraphs" => Ok(Units::Paragraphs),
            "sentences" => Ok(Units::Sentences),
            "words" => Ok(Units::Words),
            _ => anyhow::bail!("Unknown units '{}'", s),
        }
    }
}

/// Output encoding of generated text
#[derive(PartialEq, Eq, Deserialize, Serialize, Clone, Copy, Debug, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Plain,
    Html,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Plain => "plain",
            Format::Html => "html",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(Format::Plain),
            "html" => Ok(Format::Html),
            _ => anyhow::bail!("Invalid format '{}'. Please use 'plain' or 'html'.", s),
        }
    }
}

/// Produces placeholder text. The format is passed through untouched from the caller, so
/// implementations decide how to treat values other than `plain` and `html`.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, count: u32, units: Units, format: &str) -> Result<String>;
}
