//! Account service: lookup, creation and balance mutation.
//!
//! The service is stateless between calls; all state lives behind the
//! repository port. Every identity-dependent operation passes the existence
//! gate first: the caller's customer is resolved by username to the canonical
//! persisted record, and a miss fails with `CustomerNotFound` before anything
//! touches an account.

use thevault_core::{DomainError, DomainResult};

use crate::{
    account::Account,
    customer::Customer,
    iban::Scheme,
    repository::VaultRepository,
};

/// Balance every newly created account starts with (business rule).
pub const INITIAL_BALANCE: f64 = 1000.0;

/// Orchestrates account lookup, creation and balance mutation over a
/// repository implementation.
#[derive(Debug)]
pub struct AccountService<R> {
    repository: R,
    scheme: Scheme,
}

impl<R> AccountService<R> {
    /// Service generating identifiers under the house scheme.
    pub fn new(repository: R) -> Self {
        Self::with_scheme(repository, Scheme::default())
    }

    /// Service generating identifiers under a custom country/bank scheme.
    pub fn with_scheme(repository: R, scheme: Scheme) -> Self {
        Self { repository, scheme }
    }
}

impl<R: VaultRepository> AccountService<R> {
    /// Construct a fresh account for a customer: generated identifier,
    /// balance [`INITIAL_BALANCE`].
    ///
    /// Pure factory. The customer may be transient; nothing is persisted or
    /// linked here, and no field of the input influences the result.
    /// Persisting and linking are separate, explicit steps.
    pub fn create_account(&self, _customer: &Customer) -> Account {
        Account::new(self.scheme.generate(), INITIAL_BALANCE)
    }

    /// Persist an account. Pure pass-through: no added validation, and
    /// repository failures propagate unchanged.
    pub fn save_account(&self, account: Account) -> DomainResult<Account> {
        self.repository.save_account(account)
    }

    /// The account linked to a customer.
    ///
    /// A missing account is `Ok(None)`, not an error; only a missing
    /// *customer* is a failure at this layer.
    pub fn find_account_for_customer(&self, customer: &Customer) -> DomainResult<Option<Account>> {
        let canonical = self.resolve_customer(customer)?;
        self.repository.find_account_for_customer(&canonical)
    }

    /// Current balance of the customer's account.
    ///
    /// The existence gate runs even though the balance read would expose a
    /// missing customer anyway: a caller-supplied customer whose username
    /// matches no persisted record must never reach the port.
    pub fn balance_for_customer(&self, customer: &Customer) -> DomainResult<f64> {
        let canonical = self.resolve_customer(customer)?;
        self.repository.balance(&canonical)
    }

    /// Overwrite the balance of the customer's account, returning the
    /// updated account.
    ///
    /// No sign or finiteness constraint on `amount`. A missing account
    /// surfaces as whatever the port reports, not as a distinct error kind.
    pub fn set_balance_for_customer(
        &self,
        customer: &Customer,
        amount: f64,
    ) -> DomainResult<Account> {
        let canonical = self.resolve_customer(customer)?;
        self.repository.find_account_for_customer(&canonical)?;
        self.repository.set_balance(&canonical, amount)
    }

    /// Existence gate: resolve the canonical record by username, failing
    /// with `CustomerNotFound` when the username is not persisted.
    fn resolve_customer(&self, customer: &Customer) -> DomainResult<Customer> {
        self.repository
            .find_customer_by_username(customer.username())?
            .ok_or_else(|| DomainError::customer_not_found(customer.username()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use thevault_core::CustomerId;

    use super::*;
    use crate::customer::Credentials;
    use crate::iban::Iban;

    /// Hand-rolled stand-in for the repository port: canned responses keyed
    /// by username, no real storage.
    #[derive(Default)]
    struct StubRepository {
        customers: HashMap<String, Customer>,
        accounts: HashMap<String, Account>,
        balances: HashMap<String, f64>,
    }

    impl StubRepository {
        fn with_customer(mut self, customer: Customer) -> Self {
            if let Some(account) = customer.account() {
                self.accounts
                    .insert(customer.username().to_string(), account.clone());
                self.balances
                    .insert(customer.username().to_string(), account.balance());
            }
            self.customers
                .insert(customer.username().to_string(), customer);
            self
        }
    }

    impl VaultRepository for StubRepository {
        fn find_customer_by_username(&self, username: &str) -> DomainResult<Option<Customer>> {
            Ok(self.customers.get(username).cloned())
        }

        fn find_account_for_customer(&self, customer: &Customer) -> DomainResult<Option<Account>> {
            Ok(self.accounts.get(customer.username()).cloned())
        }

        fn save_account(&self, account: Account) -> DomainResult<Account> {
            Ok(account)
        }

        fn balance(&self, customer: &Customer) -> DomainResult<f64> {
            self.balances
                .get(customer.username())
                .copied()
                .ok_or_else(|| DomainError::storage("no account on record"))
        }

        fn set_balance(&self, customer: &Customer, amount: f64) -> DomainResult<Account> {
            let mut account = self
                .accounts
                .get(customer.username())
                .cloned()
                .ok_or_else(|| DomainError::storage("no account on record"))?;
            account.set_balance(amount);
            Ok(account)
        }
    }

    fn birth_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn existing_customer() -> Customer {
        let mut henk = Customer::new(
            Credentials::new(CustomerId::new(1890393), "Henknr1", "fdsaljkl"),
            "Hello",
            1890393,
            birth_date(1991, 1, 12),
        );
        let iban: Iban = "NL20RABO9876543".parse().unwrap();
        henk.link_account(Account::new(iban, 1000.0));
        henk
    }

    fn absent_customer() -> Customer {
        Customer::new(
            Credentials::new(CustomerId::new(101212), "HarryBeste", "210jklf"),
            "",
            101212,
            birth_date(1991, 1, 12),
        )
    }

    fn new_customer() -> Customer {
        Customer::new(
            Credentials::new(CustomerId::new(1528719), "ThomasBeste", "831hgtr"),
            "",
            1528719,
            birth_date(1990, 5, 10),
        )
    }

    fn service_with(customers: Vec<Customer>) -> AccountService<StubRepository> {
        let mut repo = StubRepository::default();
        for customer in customers {
            repo = repo.with_customer(customer);
        }
        AccountService::new(repo)
    }

    #[test]
    fn create_account_returns_initial_balance_and_valid_iban() {
        let service = service_with(vec![]);

        let account = service.create_account(&new_customer());

        assert_eq!(account.balance(), INITIAL_BALANCE);
        assert!(!account.iban().as_str().is_empty());
        assert!(!account.iban().as_str().contains(char::is_whitespace));
        assert_eq!(account.iban().country_code(), "NL");
        assert!(account.iban().check_digits_valid());
    }

    #[test]
    fn create_account_ignores_customer_fields() {
        let service = service_with(vec![]);

        let for_transient = service.create_account(&new_customer());
        let for_existing = service.create_account(&existing_customer());

        assert_eq!(for_transient.balance(), for_existing.balance());
        assert_eq!(for_transient.holder(), None);
        assert_eq!(for_existing.holder(), None);
    }

    #[test]
    fn save_account_is_a_pass_through() {
        let service = service_with(vec![]);
        let iban: Iban = "NL20RABO9876543".parse().unwrap();
        let account = Account::new(iban, 1000.0);

        let saved = service.save_account(account.clone()).unwrap();

        assert_eq!(saved, account);
    }

    #[test]
    fn find_account_for_existing_customer_returns_linked_account() {
        let henk = existing_customer();
        let service = service_with(vec![henk.clone()]);

        let account = service.find_account_for_customer(&henk).unwrap().unwrap();

        assert_eq!(&account, henk.account().unwrap());
    }

    #[test]
    fn find_account_for_absent_customer_fails_with_customer_not_found() {
        let service = service_with(vec![existing_customer()]);

        let err = service
            .find_account_for_customer(&absent_customer())
            .unwrap_err();

        assert_eq!(err, DomainError::customer_not_found("HarryBeste"));
    }

    #[test]
    fn balance_for_existing_customer_returns_stored_balance() {
        let henk = existing_customer();
        let service = service_with(vec![henk.clone()]);

        let balance = service.balance_for_customer(&henk).unwrap();

        assert_eq!(balance, 1000.0);
    }

    #[test]
    fn balance_for_absent_customer_fails_with_customer_not_found() {
        let service = service_with(vec![existing_customer()]);

        let err = service
            .balance_for_customer(&absent_customer())
            .unwrap_err();

        assert_eq!(err, DomainError::customer_not_found("HarryBeste"));
    }

    #[test]
    fn set_balance_returns_updated_account() {
        let henk = existing_customer();
        let service = service_with(vec![henk.clone()]);

        let account = service.set_balance_for_customer(&henk, 2000.0).unwrap();

        assert_eq!(account.balance(), 2000.0);
    }

    #[test]
    fn set_balance_for_absent_customer_fails_with_customer_not_found() {
        let service = service_with(vec![existing_customer()]);

        let err = service
            .set_balance_for_customer(&absent_customer(), 2000.0)
            .unwrap_err();

        assert_eq!(err, DomainError::customer_not_found("HarryBeste"));
    }

    #[test]
    fn gate_matches_on_username_not_on_other_fields() {
        // A caller-side copy with stale fields but a persisted username must
        // still pass the gate and act on the canonical record.
        let henk = existing_customer();
        let service = service_with(vec![henk]);

        let mut stale = existing_customer();
        stale.set_name("SomebodyElse");

        assert_eq!(service.balance_for_customer(&stale).unwrap(), 1000.0);
    }

    #[test]
    fn set_balance_accepts_negative_and_non_finite_amounts() {
        // Deliberately permissive: no overdraft policy at this layer.
        let henk = existing_customer();
        let service = service_with(vec![henk.clone()]);

        let overdrawn = service.set_balance_for_customer(&henk, -500.0).unwrap();
        assert_eq!(overdrawn.balance(), -500.0);

        let weird = service
            .set_balance_for_customer(&henk, f64::INFINITY)
            .unwrap();
        assert_eq!(weird.balance(), f64::INFINITY);
    }
}
