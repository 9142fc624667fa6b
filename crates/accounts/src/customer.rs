//! Customer model: a natural person holding identity data, at most one
//! account, and a portfolio of assets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use thevault_core::{CustomerId, Entity, ValueObject};

use crate::account::Account;

/// Login identity of a customer.
///
/// Composition instead of a user base class: nothing dispatches over user
/// kinds, so the credential fields are just embedded data. Excluded from
/// [`Customer`] structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    id: CustomerId,
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(id: CustomerId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Postal address. Not decomposed further by this domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub postal_code: String,
    pub city: String,
}

impl ValueObject for Address {}

/// A held asset position: symbol plus quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub amount: f64,
}

impl ValueObject for Asset {}

/// Customer: identity, address, birth date, 0..1 account, 0..* assets.
///
/// Equality is structural over name, address, national id, account, assets
/// (order-insignificant) and birth date. Credentials carry no identity-of-value
/// meaning and are left out.
///
/// `Deserialize` is field-for-field: decoded customers are trusted input, and
/// the account's holder back-reference is not re-checked against the
/// credentials id. For untrusted data, [`Customer::link_account`]
/// re-establishes the agreement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    credentials: Credentials,
    name: String,
    address: Option<Address>,
    national_id: i64,
    birth_date: NaiveDate,
    account: Option<Account>,
    assets: Vec<Asset>,
}

impl Customer {
    /// Short-form constructor: no address, no account, empty portfolio.
    pub fn new(
        credentials: Credentials,
        name: impl Into<String>,
        national_id: i64,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            credentials,
            name: name.into(),
            address: None,
            national_id,
            birth_date,
            account: None,
            assets: Vec::new(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn national_id(&self) -> i64 {
        self.national_id
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address;
    }

    pub fn set_assets(&mut self, assets: Vec<Asset>) {
        self.assets = assets;
    }

    /// Attach an account, keeping both sides of the relation in agreement:
    /// the account's holder back-reference is set to this customer's id.
    pub fn link_account(&mut self, mut account: Account) {
        account.set_holder(self.credentials.id());
        self.account = Some(account);
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.credentials.id
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.address == other.address
            && self.national_id == other.national_id
            && self.birth_date == other.birth_date
            && self.account == other.account
            && same_assets(&self.assets, &other.assets)
    }
}

/// Multiset comparison: each asset on one side must pair off with a distinct
/// equal asset on the other. Order is insignificant.
fn same_assets(left: &[Asset], right: &[Asset]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut taken = vec![false; right.len()];
    'outer: for asset in left {
        for (i, candidate) in right.iter().enumerate() {
            if !taken[i] && asset == candidate {
                taken[i] = true;
                continue 'outer;
            }
        }
        return false;
    }
    true
}
