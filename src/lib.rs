//! Password strength scoring and breach lookup library
//!
//! This library scores passwords against five simple criteria and checks
//! them against a breach corpus through a k-anonymity range API, sending
//! only the first five hex characters of the password's SHA-1 digest.
//!
//! # Features
//!
//! - `async` (default): Enables the breach checker and the input session
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-guard` terminal demo
//!
//! # Environment Variables
//!
//! - `PWD_RANGE_API_URL`: Range endpoint
//!   (default: `https://api.pwnedpasswords.com/range`)
//! - `PWD_RANGE_TIMEOUT_MS`: Request timeout in milliseconds (default: 5000)
//! - `PWD_RANGE_PADDING`: Request padded responses (default: `true`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_guard::{score_password, strength_label, Language};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let score = score_password(&password);
//! println!("{} ({})", strength_label(score.level(), Language::English), score);
//!
//! # #[cfg(feature = "async")]
//! # async fn lookup(password: &SecretString) -> Result<(), Box<dyn std::error::Error>> {
//! use pwd_guard::{BreachChecker, CheckerConfig};
//!
//! let checker = BreachChecker::from_config(&CheckerConfig::from_env()?)?;
//! let status = checker.check(password).await;
//! println!("{:?}", status);
//! # Ok(())
//! # }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

pub mod breach;
pub mod config;
pub mod locale;

#[cfg(feature = "async")]
pub mod session;

// Public API
pub use breach::{BreachStatus, HashPrefix, PasswordDigest};
pub use config::{CheckerConfig, ConfigError};
pub use evaluator::{evaluate_password_strength, score_password};
pub use locale::{breach_message, criterion_hint, strength_label, Language};
pub use sections::MIN_LENGTH;
pub use types::{Criterion, StrengthEvaluation, StrengthLevel, StrengthScore, MAX_SCORE};

#[cfg(feature = "async")]
pub use breach::{BreachChecker, BreachError, HttpRangeSource, RangeSource};

#[cfg(feature = "async")]
pub use session::{BreachUpdate, PasswordSession, RenderSink, SessionOptions, UiState};
