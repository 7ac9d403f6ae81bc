//! Breach lookup errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Range request timed out")]
    Timeout,
    #[error("Range request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Range service responded with status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for BreachError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BreachError::Timeout
        } else {
            BreachError::Request(err)
        }
    }
}
