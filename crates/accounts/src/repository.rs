//! Persistence port consumed by the account service.

use std::sync::Arc;

use thevault_core::DomainResult;

use crate::{account::Account, customer::Customer};

/// Persistence operations the account service depends on.
///
/// Storage technology, schema, IBAN uniqueness and any concurrency discipline
/// live behind this trait. Absence is `Ok(None)`; infrastructure failures
/// surface as `DomainError::Storage` and pass through the service
/// untranslated.
pub trait VaultRepository: Send + Sync {
    /// Canonical customer record for a username, if one is persisted.
    fn find_customer_by_username(&self, username: &str) -> DomainResult<Option<Customer>>;

    /// The account linked to a customer, if any.
    fn find_account_for_customer(&self, customer: &Customer) -> DomainResult<Option<Account>>;

    /// Persist an account (new or updated) and return the stored value.
    fn save_account(&self, account: Account) -> DomainResult<Account>;

    /// Current balance of the customer's account.
    fn balance(&self, customer: &Customer) -> DomainResult<f64>;

    /// Overwrite the balance of the customer's account, returning the
    /// updated account.
    fn set_balance(&self, customer: &Customer, amount: f64) -> DomainResult<Account>;
}

impl<R> VaultRepository for Arc<R>
where
    R: VaultRepository + ?Sized,
{
    fn find_customer_by_username(&self, username: &str) -> DomainResult<Option<Customer>> {
        (**self).find_customer_by_username(username)
    }

    fn find_account_for_customer(&self, customer: &Customer) -> DomainResult<Option<Account>> {
        (**self).find_account_for_customer(customer)
    }

    fn save_account(&self, account: Account) -> DomainResult<Account> {
        (**self).save_account(account)
    }

    fn balance(&self, customer: &Customer) -> DomainResult<f64> {
        (**self).balance(customer)
    }

    fn set_balance(&self, customer: &Customer, amount: f64) -> DomainResult<Account> {
        (**self).set_balance(customer, amount)
    }
}
