//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Internal numeric identifier of a customer.
///
/// Assigned by the backing store; `0` marks a transient (not yet persisted)
/// customer, mirroring how the store hands out ids. Identity-dependent
/// service operations resolve customers by username, never by this id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Id used for customers that have not been persisted yet.
    pub const fn transient() -> Self {
        Self(0)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<CustomerId> for i64 {
    fn from(value: CustomerId) -> Self {
        value.0
    }
}

impl FromStr for CustomerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("CustomerId: {e}")))?;
        Ok(Self(id))
    }
}
