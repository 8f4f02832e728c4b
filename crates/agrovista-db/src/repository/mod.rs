//! SurrealDB repository implementations.

mod account;
mod harvest;

pub use account::SurrealAccountRepository;
pub use harvest::SurrealHarvestRepository;
