//! Breach checker - digest, range query, local match.

use secrecy::SecretString;

use super::{status_for_suffix, BreachError, BreachStatus, HttpRangeSource, PasswordDigest, RangeSource};
use crate::config::CheckerConfig;

/// Looks passwords up in a breach corpus through a [`RangeSource`].
///
/// Each call is independent: no caching, no retries.
#[derive(Debug)]
pub struct BreachChecker<S> {
    source: S,
}

impl BreachChecker<HttpRangeSource> {
    /// Builds a checker that queries the HTTP range API described by `config`.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, BreachError> {
        Ok(Self::new(HttpRangeSource::new(config)?))
    }
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Looks up `password`, returning the cause on failure.
    pub async fn try_check(&self, password: &SecretString) -> Result<BreachStatus, BreachError> {
        let digest = PasswordDigest::of(password);
        let prefix = digest.prefix();

        let body = self.source.fetch_range(&prefix).await?;
        let status = status_for_suffix(&body, digest.suffix());

        #[cfg(feature = "tracing")]
        tracing::debug!(prefix = %prefix, breached = status.is_breached(), "range lookup finished");

        Ok(status)
    }

    /// Looks up `password`. Any failure is logged and reported as
    /// [`BreachStatus::Unknown`]; this never returns an error.
    pub async fn check(&self, password: &SecretString) -> BreachStatus {
        match self.try_check(password).await {
            Ok(status) => status,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "breach lookup failed");
                BreachStatus::Unknown
            }
        }
    }
}
