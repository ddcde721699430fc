//! Aggregate total across trials
//!
//! A single trial fits `i128` by construction, a sum of trials does not have
//! to. The total stays in `i128` with checked addition and escalates to
//! `BigInt` the first time an addition would overflow.

use std::fmt;

use num_bigint::BigInt;
use serde::{Serialize, Serializer};

use crate::core_types::TrialSum;

#[derive(Debug, Clone)]
pub enum Total {
    Narrow(i128),
    Wide(BigInt),
}

impl Total {
    pub fn zero() -> Self {
        Total::Narrow(0)
    }

    /// Add one trial result, escalating on overflow.
    pub fn add(&mut self, value: TrialSum) {
        match self {
            Total::Narrow(acc) => match acc.checked_add(value) {
                Some(sum) => *acc = sum,
                None => {
                    let prev = *acc;
                    tracing::warn!(
                        acc = %prev,
                        value = %value,
                        "i128 total overflowed, switching to arbitrary precision"
                    );
                    *self = Total::Wide(BigInt::from(prev) + BigInt::from(value));
                }
            },
            Total::Wide(acc) => *acc += BigInt::from(value),
        }
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, Total::Wide(_))
    }

    /// Value as `i128` if it fits, regardless of representation.
    pub fn to_i128(&self) -> Option<i128> {
        match self {
            Total::Narrow(v) => Some(*v),
            Total::Wide(v) => i128::try_from(v).ok(),
        }
    }

    pub fn to_bigint(&self) -> BigInt {
        match self {
            Total::Narrow(v) => BigInt::from(*v),
            Total::Wide(v) => v.clone(),
        }
    }
}

impl Default for Total {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromIterator<TrialSum> for Total {
    fn from_iter<I: IntoIterator<Item = TrialSum>>(iter: I) -> Self {
        let mut total = Total::zero();
        for v in iter {
            total.add(v);
        }
        total
    }
}

/// Numeric equality; a wide total equals a narrow one holding the same value.
impl PartialEq for Total {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Total::Narrow(a), Total::Narrow(b)) => a == b,
            _ => self.to_bigint() == other.to_bigint(),
        }
    }
}

impl Eq for Total {}

impl PartialEq<i128> for Total {
    fn eq(&self, other: &i128) -> bool {
        self.to_i128() == Some(*other)
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Narrow(v) => fmt::Display::fmt(v, f),
            Total::Wide(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Serialized as a decimal string; JSON numbers lose precision past 2^53.
impl Serialize for Total {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
