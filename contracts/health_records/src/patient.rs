//! Persistent storage access for patient records.
//!
//! Records are keyed by the patient's address and written exactly once at
//! registration; [`authorize_provider`](crate::HealthRecordsContract::authorize_provider)
//! is the only operation that mutates an existing record, which keeps the
//! authorization predicate read-after-write consistent.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::PatientRecord;

const PATIENT: Symbol = symbol_short!("PATIENT");

pub fn save_patient(env: &Env, patient: &Address, record: &PatientRecord) {
    let key = (PATIENT, patient.clone());
    env.storage().persistent().set(&key, record);
}

pub fn get_patient(env: &Env, patient: &Address) -> Option<PatientRecord> {
    let key = (PATIENT, patient.clone());
    env.storage().persistent().get(&key)
}

pub fn has_patient(env: &Env, patient: &Address) -> bool {
    let key = (PATIENT, patient.clone());
    env.storage().persistent().has(&key)
}
