//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations live in the
//! database crate; the auth and server crates are generic over these
//! traits so they carry no storage dependency.

use crate::error::AgroResult;
use crate::models::{
    account::{Account, CreateAccount},
    harvest::{HarvestRecord, NewHarvest},
};

pub trait AccountRepository: Send + Sync {
    /// Create an identity record. Fails if the email is already taken.
    fn create(&self, input: CreateAccount) -> impl Future<Output = AgroResult<Account>> + Send;

    /// Store the (already encrypted) recovery answer for an account.
    fn set_recovery_answer(
        &self,
        email: &str,
        ciphertext: &str,
    ) -> impl Future<Output = AgroResult<()>> + Send;

    fn get_by_email(&self, email: &str) -> impl Future<Output = AgroResult<Account>> + Send;
}

/// Append-only store of harvest entries.
///
/// Implementations encrypt `quantity` before it leaves the process;
/// no plaintext quantity ever reaches the underlying collection. There
/// is no uniqueness or idempotency key; resubmitting the same input
/// creates a second record.
pub trait HarvestRepository: Send + Sync {
    fn append(&self, input: NewHarvest) -> impl Future<Output = AgroResult<HarvestRecord>> + Send;

    /// All records submitted by `owner`, in store-assigned arrival order.
    fn list_by_owner(
        &self,
        owner: &str,
    ) -> impl Future<Output = AgroResult<Vec<HarvestRecord>>> + Send;
}
