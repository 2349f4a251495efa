use std::fmt::Display;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::api::params::GenerationResponse;
use crate::error::HttpErrorResponse;
use crate::ipsum::{Format, Units};

mod form;

pub use form::{FormView, GeneratorForm, Output};

#[derive(Debug)]
pub enum ClientError {
    /// The request's cancellation token fired before a response arrived
    Cancelled,
    /// The API answered with a non-success status
    Rejected { status: StatusCode, message: String },
    Network(reqwest::Error),
    Parsing(reqwest::Error),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "request was cancelled"),
            Self::Rejected { status, message } => {
                write!(f, "request rejected with status {}: {}", status, message)
            }
            Self::Network(err) => write!(f, "request failed: {}", err),
            Self::Parsing(err) => write!(f, "failed to parse response: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(err) | Self::Parsing(err) => Some(err),
            _ => None,
        }
    }
}

/// What the client asks for. `amount` is sent verbatim so the server does the coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchParams {
    pub amount: String,
    pub units: Units,
    pub format: Format,
}

#[derive(Debug, Clone)]
pub struct GeneratorClient {
    http: Client,
    endpoint: Url,
}

impl GeneratorClient {
    /// `base_url` is the site root; requests go to `<base_url>/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url).with_context(|| format!("Invalid URL {}", base_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join("api")?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn request_url(&self, params: &FetchParams) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("count", &params.amount)
            .append_pair("units", params.units.as_str())
            .append_pair("format", params.format.as_str());
        url
    }

    /// Resolves with `ClientError::Cancelled` as soon as `cancel` fires, dropping the request.
    #[tracing::instrument(level = "debug", skip(self, cancel))]
    pub async fn fetch(
        &self,
        params: &FetchParams,
        cancel: &CancellationToken,
    ) -> Result<String, ClientError> {
        let url = self.request_url(params);
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Request cancelled");
                Err(ClientError::Cancelled)
            }
            result = self.send(url) => result,
        }
    }

    async fn send(&self, url: Url) -> Result<String, ClientError> {
        let response = self.http.get(url).send().await.map_err(ClientError::Network)?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<HttpErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Rejected { status, message });
        }

        let body = response
            .json::<GenerationResponse>()
            .await
            .map_err(ClientError::Parsing)?;
        Ok(body.text)
    }
}
