//! Infrastructure layer: repository port implementations.
//!
//! The domain consumes persistence through `thevault_accounts::VaultRepository`;
//! this crate provides the in-memory implementation used by tests and dev
//! setups. A real deployment would add a database-backed implementation here.

pub mod memory;


pub use memory::InMemoryVaultRepository;
