//! Prescription storage, ID assignment, and the global tracking list.

use soroban_sdk::{symbol_short, Env, Symbol, Vec};

use crate::types::Prescription;

const RX: Symbol = symbol_short!("RX");
const RX_COUNTER: Symbol = symbol_short!("RX_CTR");
const RX_TRACKING: Symbol = symbol_short!("RX_LIST");

/// Assigns the next prescription ID.
///
/// IDs start at 0 and increase by exactly 1 per successful creation; the
/// counter is never reused or decremented. Read and increment happen
/// within one invocation, so no two calls can observe the same value.
pub fn next_prescription_id(env: &Env) -> u64 {
    let id: u64 = env.storage().instance().get(&RX_COUNTER).unwrap_or(0);
    env.storage().instance().set(&RX_COUNTER, &(id + 1));
    id
}

/// Total number of prescriptions ever issued.
pub fn prescription_count(env: &Env) -> u64 {
    env.storage().instance().get(&RX_COUNTER).unwrap_or(0)
}

pub fn save_prescription(env: &Env, prescription: &Prescription) {
    let key = (RX, prescription.id);
    env.storage().persistent().set(&key, prescription);
}

pub fn get_prescription(env: &Env, id: u64) -> Option<Prescription> {
    let key = (RX, id);
    env.storage().persistent().get(&key)
}

/// All issued prescription IDs, in issue order. Append-only, capacity 100.
pub fn tracking_list(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&RX_TRACKING)
        .unwrap_or(Vec::new(env))
}

pub fn save_tracking_list(env: &Env, list: &Vec<u64>) {
    env.storage().persistent().set(&RX_TRACKING, list);
}
