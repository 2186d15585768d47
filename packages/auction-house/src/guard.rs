//! Per-call exclusive execution.
//!
//! Every state-mutating entry point of a house runs inside [`non_reentrant`].
//! The lock is held in instance storage for the duration of the call, so a
//! collaborator that calls back into the house while custody transfers or
//! payouts are in flight is rejected with [`Error::Reentrant`].

use crate::errors::Error;
use crate::storage;
use soroban_sdk::{log, Env};

pub fn enter(env: &Env) -> Result<(), Error> {
    if storage::is_locked(env) {
        log!(env, "rejected re-entrant call");
        return Err(Error::Reentrant);
    }
    storage::set_locked(env, true);
    Ok(())
}

pub fn exit(env: &Env) {
    storage::set_locked(env, false);
}

/// Run `f` while holding the lock. An `Err` from `f` rolls the whole
/// invocation back, lock included.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error>,
{
    enter(env)?;
    let result = f();
    exit(env);
    result
}
