//! Account model: a balance-bearing entity identified by IBAN.

use serde::{Deserialize, Serialize};

use thevault_core::{CustomerId, Entity};

use crate::iban::Iban;

/// A customer account.
///
/// The identifier is immutable after creation; global uniqueness is the
/// repository's concern. The holder back-reference is informational only:
/// it stores the owning customer's id, never an object reference, and is
/// resolved through the repository when needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    iban: Iban,
    balance: f64,
    holder: Option<CustomerId>,
}

impl Account {
    pub fn new(iban: Iban, balance: f64) -> Self {
        Self {
            iban,
            balance,
            holder: None,
        }
    }

    pub fn iban(&self) -> &Iban {
        &self.iban
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn holder(&self) -> Option<CustomerId> {
        self.holder
    }

    /// Overwrite the balance. No sign or finiteness constraint here; any
    /// overdraft policy belongs to a higher layer.
    pub fn set_balance(&mut self, amount: f64) {
        self.balance = amount;
    }

    pub fn set_holder(&mut self, holder: CustomerId) {
        self.holder = Some(holder);
    }
}

impl Entity for Account {
    type Id = Iban;

    fn id(&self) -> &Iban {
        &self.iban
    }
}
