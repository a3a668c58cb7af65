//! Patient-granted provider authorization checks.

use soroban_sdk::{Address, Env};

use crate::patient;

/// Returns whether `provider` is a member of `patient`'s
/// authorized-provider set.
///
/// Absent patient record means no authorization. The membership test is
/// evaluated fresh against storage on every call; nothing is cached
/// between invocations.
pub fn is_authorized(env: &Env, patient: &Address, provider: &Address) -> bool {
    match patient::get_patient(env, patient) {
        Some(record) => record.authorized_providers.contains(provider),
        None => false,
    }
}
