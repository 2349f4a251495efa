use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::client::{ClientError, FetchParams, GeneratorClient};
use crate::ipsum::{Format, Units};

pub const CANCELLED_MESSAGE: &str = "Request cancelled.";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// What the form currently shows below the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Empty,
    Text(String),
    Cancelled,
    Failed,
}

impl Output {
    pub fn message(&self) -> &str {
        match self {
            Output::Empty => "",
            Output::Text(text) => text,
            Output::Cancelled => CANCELLED_MESSAGE,
            Output::Failed => FAILED_MESSAGE,
        }
    }
}

/// Snapshot of the form, published to subscribers after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub amount: String,
    pub units: Units,
    pub loading: bool,
    pub output: Output,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            amount: crate::api::params::DEFAULT_COUNT.to_string(),
            units: Units::default(),
            loading: false,
            output: Output::default(),
        }
    }
}

#[derive(Debug)]
struct InFlight {
    id: u64,
    cancel: CancellationToken,
}

#[derive(Debug)]
struct FormState {
    view: FormView,
    in_flight: Option<InFlight>,
    mounted: bool,
}

/// Drives the demo form: one request at a time, newest wins.
///
/// Every submission cancels the request before it and tags itself with a fresh id. A response
/// only reaches the view when its id is still the current one and the form is still mounted,
/// so a superseded request that resolves late is dropped on the floor.
pub struct GeneratorForm {
    client: Arc<GeneratorClient>,
    state: Arc<watch::Sender<FormState>>,
    next_id: AtomicU64,
}

impl GeneratorForm {
    pub fn new(client: GeneratorClient) -> Self {
        let (state, _) = watch::channel(FormState {
            view: FormView::default(),
            in_flight: None,
            mounted: true,
        });
        Self {
            client: Arc::new(client),
            state: Arc::new(state),
            next_id: AtomicU64::new(0),
        }
    }

    /// Creates the form and immediately fetches text for the default inputs.
    pub fn mount(client: GeneratorClient) -> (Self, JoinHandle<()>) {
        let form = Self::new(client);
        let initial = form.submit();
        (form, initial)
    }

    pub fn view(&self) -> FormView {
        self.state.borrow().view.clone()
    }

    /// Receives a notification whenever the visible state changes.
    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        let (tx, rx) = watch::channel(self.view());
        let mut states = self.state.subscribe();
        tokio::spawn(async move {
            while states.changed().await.is_ok() {
                let view = states.borrow_and_update().view.clone();
                if tx.send(view).is_err() {
                    break;
                }
            }
        });
        rx
    }

    pub fn set_amount(&self, amount: impl Into<String>) {
        let amount = amount.into();
        self.state.send_modify(|state| state.view.amount = amount);
    }

    pub fn set_units(&self, units: Units) {
        self.state.send_modify(|state| state.view.units = units);
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().view.loading
    }

    /// Cancels whatever is in flight and requests text for the current inputs.
    pub fn submit(&self) -> JoinHandle<()> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let cancel = CancellationToken::new();
        let mut params = None;

        self.state.send_if_modified(|state| {
            if !state.mounted {
                return false;
            }
            let previous = state.in_flight.replace(InFlight {
                id,
                cancel: cancel.clone(),
            });
            if let Some(previous) = previous {
                debug!(previous = previous.id, next = id, "Superseding request");
                previous.cancel.cancel();
            }
            state.view.loading = true;
            params = Some(FetchParams {
                amount: state.view.amount.clone(),
                units: state.view.units,
                format: Format::Plain,
            });
            true
        });

        let Some(params) = params else {
            return tokio::spawn(async {});
        };

        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = client.fetch(&params, &cancel).await;
            state.send_if_modified(|state| settle(state, id, result));
        })
    }

    /// Cancels the in-flight request, if any. The form shows the cancellation.
    pub fn cancel(&self) {
        if let Some(in_flight) = &self.state.borrow().in_flight {
            in_flight.cancel.cancel();
        }
    }

    /// Tears the form down. Outstanding requests are cancelled and nothing updates afterwards.
    pub fn unmount(&self) {
        self.state.send_if_modified(|state| {
            state.mounted = false;
            if let Some(in_flight) = state.in_flight.take() {
                in_flight.cancel.cancel();
            }
            false
        });
    }
}

impl Drop for GeneratorForm {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Applies a finished request to the state. Returns whether anything visible changed.
fn settle(state: &mut FormState, id: u64, result: Result<String, ClientError>) -> bool {
    if !state.mounted {
        return false;
    }
    match &state.in_flight {
        Some(current) if current.id == id => {}
        _ => {
            debug!(id, "Discarding superseded response");
            return false;
        }
    }

    state.in_flight = None;
    state.view.loading = false;
    state.view.output = match result {
        Ok(text) => Output::Text(text),
        Err(ClientError::Cancelled) => Output::Cancelled,
        Err(err) => {
            warn!(%err, "Generation request failed");
            Output::Failed
        }
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requesting(id: u64) -> FormState {
        FormState {
            view: FormView {
                loading: true,
                ..Default::default()
            },
            in_flight: Some(InFlight {
                id,
                cancel: CancellationToken::new(),
            }),
            mounted: true,
        }
    }

    #[test]
    fn current_response_is_rendered() {
        let mut state = requesting(2);
        assert!(settle(&mut state, 2, Ok("kale".to_string())));
        assert_eq!(state.view.output, Output::Text("kale".to_string()));
        assert!(!state.view.loading);
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut state = requesting(2);
        assert!(!settle(&mut state, 1, Ok("stale".to_string())));
        assert_eq!(state.view.output, Output::Empty);
        assert!(state.view.loading);
    }

    #[test]
    fn nothing_changes_after_unmount() {
        let mut state = requesting(1);
        state.mounted = false;
        assert!(!settle(&mut state, 1, Err(ClientError::Cancelled)));
        assert_eq!(state.view.output, Output::Empty);
    }

    #[test]
    fn cancellation_and_failure_have_messages() {
        let mut state = requesting(1);
        settle(&mut state, 1, Err(ClientError::Cancelled));
        assert_eq!(state.view.output.message(), CANCELLED_MESSAGE);

        let mut state = requesting(1);
        let rejected = ClientError::Rejected {
            status: reqwest::StatusCode::BAD_REQUEST,
            message: "Invalid count".to_string(),
        };
        settle(&mut state, 1, Err(rejected));
        assert_eq!(state.view.output.message(), FAILED_MESSAGE);
    }
}
