#![cfg(feature = "async")]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pwd_guard::{
    BreachChecker, BreachError, BreachStatus, HashPrefix, PasswordDigest, PasswordSession,
    RangeSource, RenderSink, SessionOptions, StrengthEvaluation,
};
use secrecy::SecretString;

/// Answers each prefix after a per-prefix delay, like a slow network would.
#[derive(Default)]
struct ScriptedSource {
    responses: HashMap<String, (Duration, Result<String, u16>)>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    fn breached(mut self, password: &str, count: u64, delay: Duration) -> Self {
        let digest = PasswordDigest::of(&secret(password));
        let body = format!("{}:{}\n", digest.suffix(), count);
        self.responses
            .insert(digest.prefix().to_string(), (delay, Ok(body)));
        self
    }

    fn failing(mut self, password: &str, status: u16) -> Self {
        let digest = PasswordDigest::of(&secret(password));
        self.responses
            .insert(digest.prefix().to_string(), (Duration::ZERO, Err(status)));
        self
    }
}

#[async_trait]
impl RangeSource for ScriptedSource {
    async fn fetch_range(&self, prefix: &HashPrefix) -> Result<String, BreachError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(prefix.as_str()) {
            Some((delay, response)) => {
                tokio::time::sleep(*delay).await;
                response.clone().map_err(BreachError::Status)
            }
            None => Ok(String::new()),
        }
    }
}

/// Keeps every frame the session renders.
#[derive(Default)]
struct RecordingSink {
    scores: Vec<u8>,
    breaches: Vec<Option<BreachStatus>>,
}

impl RenderSink for RecordingSink {
    fn render_strength(&mut self, evaluation: &StrengthEvaluation) {
        self.scores.push(evaluation.score.value());
    }

    fn render_breach(&mut self, status: Option<&BreachStatus>) {
        self.breaches.push(status.copied());
    }
}

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

#[tokio::test(start_paused = true)]
async fn test_latest_input_wins_when_earlier_response_is_slower() {
    let source = ScriptedSource::default()
        .breached("password", 111, Duration::from_millis(500))
        .breached("letmein", 222, Duration::from_millis(10));
    let mut session = PasswordSession::new(BreachChecker::new(source), RecordingSink::default());

    session.on_input(secret("password"));
    let latest = session.on_input(secret("letmein"));

    let status = session.next_update().await;
    assert_eq!(status, Some(BreachStatus::Found(222)));
    assert_eq!(session.state().seq, latest);
    assert_eq!(session.state().breach, Some(BreachStatus::Found(222)));

    // The slow lookup for the first password must never reach the display.
    let late = tokio::time::timeout(Duration::from_secs(2), session.next_update()).await;
    assert!(late.is_err());
    assert_eq!(session.state().breach, Some(BreachStatus::Found(222)));
    assert_eq!(
        session.sink().breaches.last(),
        Some(&Some(BreachStatus::Found(222)))
    );
    assert!(!session
        .sink()
        .breaches
        .contains(&Some(BreachStatus::Found(111))));
}

#[tokio::test(start_paused = true)]
async fn test_strength_is_rendered_before_lookup_finishes() {
    let source = ScriptedSource::default().breached("Abcdefg1", 5, Duration::from_millis(100));
    let mut session = PasswordSession::new(BreachChecker::new(source), RecordingSink::default());

    session.on_input(secret("Abcdefg1"));

    assert_eq!(session.sink().scores, vec![4]);
    assert_eq!(session.sink().breaches, vec![None]);
    assert!(session.is_pending());

    assert_eq!(session.next_update().await, Some(BreachStatus::Found(5)));
    assert!(!session.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_clearing_input_discards_pending_lookup() {
    let source = ScriptedSource::default().breached("password", 7, Duration::from_millis(50));
    let mut session = PasswordSession::new(BreachChecker::new(source), RecordingSink::default());

    session.on_input(secret("password"));
    session.on_input(secret(""));

    assert!(!session.is_pending());
    let late = tokio::time::timeout(Duration::from_secs(1), session.next_update()).await;
    assert!(late.is_err());
    assert_eq!(session.state().breach, None);
    assert_eq!(session.sink().scores, vec![2, 0]);
}

#[tokio::test(start_paused = true)]
async fn test_failed_lookup_is_unknown_not_safe() {
    let source = ScriptedSource::default().failing("hunter2", 503);
    let mut session = PasswordSession::new(BreachChecker::new(source), RecordingSink::default());

    session.on_input(secret("hunter2"));

    assert_eq!(session.next_update().await, Some(BreachStatus::Unknown));
    assert_ne!(session.state().breach, Some(BreachStatus::NotFound));
}

#[tokio::test(start_paused = true)]
async fn test_unlisted_password_is_not_found() {
    let mut session = PasswordSession::new(
        BreachChecker::new(ScriptedSource::default()),
        RecordingSink::default(),
    );

    session.on_input(secret("correct horse battery staple"));

    assert_eq!(session.next_update().await, Some(BreachStatus::NotFound));
}

#[tokio::test(start_paused = true)]
async fn test_debounce_collapses_fast_typing() {
    let source = ScriptedSource::default().breached("abc", 9, Duration::ZERO);
    let calls = Arc::clone(&source.calls);
    let options = SessionOptions {
        debounce: Duration::from_millis(300),
    };
    let mut session =
        PasswordSession::with_options(BreachChecker::new(source), RecordingSink::default(), options);

    session.on_input(secret("a"));
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.on_input(secret("ab"));
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.on_input(secret("abc"));

    assert_eq!(session.next_update().await, Some(BreachStatus::Found(9)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.sink().scores, vec![1, 1, 1]);
}
