//! In-memory implementation of the repository port, for tests and dev.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use thevault_accounts::{Account, Customer, VaultRepository};
use thevault_core::{DomainError, DomainResult, Entity};

/// Username-keyed store of customer records.
///
/// The account lives inside the stored customer, so the owner back-reference
/// and the customer's account field stay in agreement by construction.
/// Lock poisoning surfaces as `DomainError::Storage`, keeping repository
/// failures on the error channel the service passes through.
#[derive(Debug, Default)]
pub struct InMemoryVaultRepository {
    records: RwLock<HashMap<String, Customer>>,
}

impl InMemoryVaultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or overwrite) a customer record, including any linked account.
    pub fn insert_customer(&self, customer: Customer) -> DomainResult<()> {
        debug!(username = %customer.username(), "seeding customer record");
        let mut records = self.write()?;
        records.insert(customer.username().to_string(), customer);
        Ok(())
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, HashMap<String, Customer>>> {
        self.records
            .read()
            .map_err(|_| DomainError::storage("customer store lock poisoned"))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Customer>>> {
        self.records
            .write()
            .map_err(|_| DomainError::storage("customer store lock poisoned"))
    }
}

impl VaultRepository for InMemoryVaultRepository {
    fn find_customer_by_username(&self, username: &str) -> DomainResult<Option<Customer>> {
        Ok(self.read()?.get(username).cloned())
    }

    fn find_account_for_customer(&self, customer: &Customer) -> DomainResult<Option<Account>> {
        Ok(self
            .read()?
            .get(customer.username())
            .and_then(|record| record.account().cloned()))
    }

    fn save_account(&self, account: Account) -> DomainResult<Account> {
        let mut records = self.write()?;
        if let Some(holder) = account.holder() {
            // Attach to the customer the back-reference names, if present.
            if let Some(record) = records
                .values_mut()
                .find(|customer| *customer.id() == holder)
            {
                debug!(iban = %account.iban(), username = %record.username(), "linking account");
                record.link_account(account.clone());
            }
        }
        Ok(account)
    }

    fn balance(&self, customer: &Customer) -> DomainResult<f64> {
        self.read()?
            .get(customer.username())
            .and_then(|record| record.account())
            .map(Account::balance)
            .ok_or_else(|| DomainError::storage("no account on record"))
    }

    fn set_balance(&self, customer: &Customer, amount: f64) -> DomainResult<Account> {
        let mut records = self.write()?;
        let record = records
            .get_mut(customer.username())
            .ok_or_else(|| DomainError::storage("unknown customer"))?;
        let mut account = record
            .account()
            .cloned()
            .ok_or_else(|| DomainError::storage("no account on record"))?;

        debug!(iban = %account.iban(), old = account.balance(), new = amount, "overwriting balance");
        account.set_balance(amount);
        record.link_account(account.clone());
        Ok(account)
    }
}
