//! Persistent storage access for the provider directory.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::ProviderRecord;

const PROVIDER: Symbol = symbol_short!("PROVIDER");

pub fn save_provider(env: &Env, provider: &Address, record: &ProviderRecord) {
    let key = (PROVIDER, provider.clone());
    env.storage().persistent().set(&key, record);
}

pub fn get_provider(env: &Env, provider: &Address) -> Option<ProviderRecord> {
    let key = (PROVIDER, provider.clone());
    env.storage().persistent().get(&key)
}

pub fn has_provider(env: &Env, provider: &Address) -> bool {
    let key = (PROVIDER, provider.clone());
    env.storage().persistent().has(&key)
}

/// Returns the directory's view of a provider's license status.
///
/// An unregistered provider is reported as not verified rather than an
/// error; callers that need a hard failure use [`get_provider`].
pub fn is_verified(env: &Env, provider: &Address) -> bool {
    get_provider(env, provider)
        .map(|record| record.license_status)
        .unwrap_or(false)
}
