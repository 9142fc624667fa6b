//! Banking domain module: customers, IBAN-identified accounts, and the
//! account service that mediates between identity lookup and balance
//! mutation.
//!
//! Pure domain logic: no IO, no HTTP, no storage. Persistence is consumed
//! through the [`VaultRepository`] port and implemented elsewhere.

pub mod account;
pub mod customer;
pub mod iban;
pub mod repository;
pub mod service;

pub use account::Account;
pub use customer::{Address, Asset, Credentials, Customer};
pub use iban::{Iban, Scheme};
pub use repository::VaultRepository;
pub use service::{AccountService, INITIAL_BALANCE};
