//! k-anonymity breach lookup
//!
//! Only the first five hex characters of the password's SHA-1 digest ever
//! leave the process. The range service answers with every known suffix under
//! that prefix and the match happens locally.

mod digest;
mod range;

#[cfg(feature = "async")]
mod checker;
#[cfg(feature = "async")]
mod error;
#[cfg(feature = "async")]
mod source;

pub use digest::{HashPrefix, PasswordDigest, DIGEST_HEX_LEN, PREFIX_LEN};
pub use range::{find_suffix_count, parse_record, status_for_suffix, RangeRecord, SUFFIX_LEN};

#[cfg(feature = "async")]
pub use checker::BreachChecker;
#[cfg(feature = "async")]
pub use error::BreachError;
#[cfg(feature = "async")]
pub use source::{HttpRangeSource, RangeSource};

/// Outcome of a breach lookup.
///
/// A confirmed miss and a failed lookup are different variants so callers
/// can tell "safe" from "could not check".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreachStatus {
    /// The password appears in the breach corpus this many times (at least 1).
    Found(u64),
    /// The range was fetched and the suffix is not in it.
    NotFound,
    /// The lookup failed; nothing is known about the password.
    Unknown,
}

impl BreachStatus {
    /// Builds a status from a matched count. A count of 0 is a padding record.
    pub fn from_count(count: u64) -> Self {
        if count == 0 {
            BreachStatus::NotFound
        } else {
            BreachStatus::Found(count)
        }
    }

    /// Breach count when the lookup succeeded.
    pub fn count(&self) -> Option<u64> {
        match self {
            BreachStatus::Found(count) => Some(*count),
            BreachStatus::NotFound => Some(0),
            BreachStatus::Unknown => None,
        }
    }

    /// Count with failed lookups folded into 0.
    pub fn count_or_zero(&self) -> u64 {
        self.count().unwrap_or(0)
    }

    pub fn is_breached(&self) -> bool {
        matches!(self, BreachStatus::Found(_))
    }
}
