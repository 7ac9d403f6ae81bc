//! Input session - the single owner of what the widget displays.
//!
//! Every "password changed" event bumps a sequence number, cancels the lookup
//! still running for the previous value and starts a new one. Results come back
//! over a channel tagged with their sequence number; anything but the latest
//! is dropped, so the breach display always matches the newest input.

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachChecker, BreachStatus, RangeSource};
use crate::evaluator::evaluate_password_strength;
use crate::types::StrengthEvaluation;

const UPDATE_CHANNEL_CAPACITY: usize = 16;

/// Receives everything the widget should display.
pub trait RenderSink {
    fn render_strength(&mut self, evaluation: &StrengthEvaluation);

    /// `None` clears the breach display (empty input or lookup pending).
    fn render_breach(&mut self, status: Option<&BreachStatus>);
}

/// A finished lookup, tagged with the input it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachUpdate {
    pub seq: u64,
    pub status: BreachStatus,
}

/// What is currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Sequence number of the latest input event.
    pub seq: u64,
    pub strength: Option<StrengthEvaluation>,
    pub breach: Option<BreachStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Wait this long before querying, so fast typing only costs one request.
    pub debounce: Duration,
}

pub struct PasswordSession<S, R> {
    checker: Arc<BreachChecker<S>>,
    sink: R,
    options: SessionOptions,
    state: UiState,
    in_flight: Option<CancellationToken>,
    tx: mpsc::Sender<BreachUpdate>,
    rx: mpsc::Receiver<BreachUpdate>,
}

impl<S, R> PasswordSession<S, R>
where
    S: RangeSource + 'static,
    R: RenderSink,
{
    pub fn new(checker: BreachChecker<S>, sink: R) -> Self {
        Self::with_options(checker, sink, SessionOptions::default())
    }

    pub fn with_options(checker: BreachChecker<S>, sink: R, options: SessionOptions) -> Self {
        let (tx, rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            checker: Arc::new(checker),
            sink,
            options,
            state: UiState::default(),
            in_flight: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    /// Whether a lookup for the latest input is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Handles a "password changed" event and returns its sequence number.
    ///
    /// Scores and renders strength immediately, clears the breach display and
    /// spawns the lookup. Must be called from within a Tokio runtime.
    pub fn on_input(&mut self, password: SecretString) -> u64 {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }

        self.state.seq += 1;
        let seq = self.state.seq;

        let evaluation = evaluate_password_strength(&password);
        self.sink.render_strength(&evaluation);
        self.state.strength = Some(evaluation);

        self.state.breach = None;
        self.sink.render_breach(None);

        if password.expose_secret().is_empty() {
            return seq;
        }

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let checker = Arc::clone(&self.checker);
        let tx = self.tx.clone();
        let debounce = self.options.debounce;

        tokio::spawn(async move {
            let lookup = async {
                if !debounce.is_zero() {
                    tokio::time::sleep(debounce).await;
                }
                checker.check(&password).await
            };

            tokio::select! {
                _ = token.cancelled() => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(seq, "breach lookup superseded");
                }
                status = lookup => {
                    if let Err(_e) = tx.send(BreachUpdate { seq, status }).await {
                        #[cfg(feature = "tracing")]
                        tracing::error!("Failed to send breach lookup result: {}", _e);
                    }
                }
            }
        });

        seq
    }

    /// Applies a lookup result if it belongs to the latest input.
    ///
    /// Returns `false` and leaves the display untouched for stale results.
    pub fn apply_update(&mut self, update: BreachUpdate) -> bool {
        if update.seq != self.state.seq {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                stale = update.seq,
                current = self.state.seq,
                "dropping stale breach result"
            );
            return false;
        }

        self.in_flight = None;
        self.state.breach = Some(update.status);
        self.sink.render_breach(Some(&update.status));
        true
    }

    /// Waits for the next lookup result that belongs to the latest input,
    /// applies it and returns it. Stale results are discarded on the way.
    ///
    /// Waits indefinitely when no lookup is pending.
    pub async fn next_update(&mut self) -> Option<BreachStatus> {
        while let Some(update) = self.rx.recv().await {
            if self.apply_update(update) {
                return Some(update.status);
            }
        }
        None
    }
}

impl<S, R> Drop for PasswordSession<S, R> {
    fn drop(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::{BreachError, HashPrefix};
    use async_trait::async_trait;

    struct NeverCalled;

    #[async_trait]
    impl RangeSource for NeverCalled {
        async fn fetch_range(&self, _prefix: &HashPrefix) -> Result<String, BreachError> {
            panic!("no lookup expected");
        }
    }

    #[derive(Default)]
    struct LastFrame {
        score: Option<u8>,
        breach: Option<BreachStatus>,
    }

    impl RenderSink for LastFrame {
        fn render_strength(&mut self, evaluation: &StrengthEvaluation) {
            self.score = Some(evaluation.score.value());
        }

        fn render_breach(&mut self, status: Option<&BreachStatus>) {
            self.breach = status.copied();
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_stale_update_is_rejected() {
        let mut session = PasswordSession::new(BreachChecker::new(NeverCalled), LastFrame::default());

        // empty input spawns no lookup, so the sequence numbers are all we drive
        let first = session.on_input(secret(""));
        let second = session.on_input(secret(""));
        assert_eq!(second, first + 1);

        let applied = session.apply_update(BreachUpdate {
            seq: first,
            status: BreachStatus::Found(99),
        });

        assert!(!applied);
        assert_eq!(session.state().breach, None);
        assert_eq!(session.sink().breach, None);
    }

    #[tokio::test]
    async fn test_current_update_is_rendered() {
        let mut session = PasswordSession::new(BreachChecker::new(NeverCalled), LastFrame::default());
        let seq = session.on_input(secret(""));

        assert!(session.apply_update(BreachUpdate {
            seq,
            status: BreachStatus::Found(3),
        }));
        assert_eq!(session.state().breach, Some(BreachStatus::Found(3)));
        assert_eq!(session.sink().breach, Some(BreachStatus::Found(3)));
    }

    #[tokio::test]
    async fn test_empty_input_scores_zero_without_lookup() {
        let mut session = PasswordSession::new(BreachChecker::new(NeverCalled), LastFrame::default());
        session.on_input(secret(""));

        assert!(!session.is_pending());
        assert_eq!(session.sink().score, Some(0));
        assert_eq!(session.state().strength.as_ref().map(|e| e.score.value()), Some(0));
    }
}
