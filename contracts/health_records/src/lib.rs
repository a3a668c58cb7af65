#![no_std]

//! Authorization-gated health records ledger.
//!
//! Three keyed tables (patients, providers, prescriptions) plus two global
//! scalars (prescription counter, tracking list) live in contract storage.
//! Every mutating operation takes the authenticated caller address and is
//! executed as one serialized transaction: an error return commits nothing.

pub mod auth;
pub mod events;
pub mod patient;
pub mod prescription;
pub mod provider;
pub mod validation;

mod types;

pub use ledger_common::LedgerError;
pub use types::{
    PatientRecord, Prescription, ProviderRecord, MAX_ACTIVE_MEDICATIONS,
    MAX_AUTHORIZED_PROVIDERS, MAX_TRACKED_PRESCRIPTIONS,
};

use ledger_common::{at_capacity, push_within_capacity};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct HealthRecordsContract;

#[contractimpl]
impl HealthRecordsContract {
    /// Register a patient record for the caller.
    ///
    /// Records are created exactly once; there is no update or
    /// re-registration path.
    pub fn register_patient(
        env: Env,
        caller: Address,
        history: String,
        genetic_data: String,
    ) -> Result<PatientRecord, LedgerError> {
        caller.require_auth();

        validation::validate_text(&history, validation::MAX_HISTORY_LEN)?;
        validation::validate_text(&genetic_data, validation::MAX_GENETIC_DATA_LEN)?;

        if patient::has_patient(&env, &caller) {
            return Err(LedgerError::DuplicateRecord);
        }

        let record = PatientRecord {
            history,
            genetic_data,
            active_medications: Vec::new(&env),
            authorized_providers: Vec::new(&env),
        };
        patient::save_patient(&env, &caller, &record);

        events::publish_patient_registered(&env, caller);

        Ok(record)
    }

    /// Get a patient record by address.
    pub fn get_patient_record(env: Env, patient_id: Address) -> Option<PatientRecord> {
        patient::get_patient(&env, &patient_id)
    }

    /// Add a provider to the caller's authorized set.
    ///
    /// The set holds at most [`MAX_AUTHORIZED_PROVIDERS`] members, keeps
    /// insertion order, and rejects duplicates. There is no
    /// deauthorization operation.
    pub fn authorize_provider(
        env: Env,
        caller: Address,
        provider_id: Address,
    ) -> Result<PatientRecord, LedgerError> {
        caller.require_auth();

        let mut record =
            patient::get_patient(&env, &caller).ok_or(LedgerError::PatientNotFound)?;

        if !provider::has_provider(&env, &provider_id) {
            return Err(LedgerError::ProviderNotFound);
        }
        if record.authorized_providers.contains(&provider_id) {
            return Err(LedgerError::AlreadyAuthorized);
        }
        if !push_within_capacity(
            &mut record.authorized_providers,
            provider_id.clone(),
            MAX_AUTHORIZED_PROVIDERS,
        ) {
            return Err(LedgerError::MaxProvidersReached);
        }

        patient::save_patient(&env, &caller, &record);

        events::publish_provider_authorized(&env, caller, provider_id);

        Ok(record)
    }

    /// Register the caller in the provider directory.
    ///
    /// License status is self-asserted and starts `true`; the ledger does
    /// no off-chain credential verification.
    pub fn register_provider(
        env: Env,
        caller: Address,
        specialty: String,
        license_number: String,
    ) -> Result<ProviderRecord, LedgerError> {
        caller.require_auth();

        validation::validate_text(&specialty, validation::MAX_SPECIALTY_LEN)?;
        validation::validate_text(&license_number, validation::MAX_LICENSE_LEN)?;

        if provider::has_provider(&env, &caller) {
            return Err(LedgerError::DuplicateProvider);
        }

        let record = ProviderRecord {
            specialty,
            license_number,
            license_status: true,
        };
        provider::save_provider(&env, &caller, &record);

        events::publish_provider_registered(&env, caller);

        Ok(record)
    }

    /// Get a provider directory entry by address.
    pub fn get_provider_profile(env: Env, provider_id: Address) -> Option<ProviderRecord> {
        provider::get_provider(&env, &provider_id)
    }

    /// License status of a provider; `false` when unregistered.
    pub fn verify_provider_credentials(env: Env, provider_id: Address) -> bool {
        provider::is_verified(&env, &provider_id)
    }

    /// Whether `provider_id` is in `patient_id`'s authorized set.
    pub fn is_authorized(env: Env, patient_id: Address, provider_id: Address) -> bool {
        auth::is_authorized(&env, &patient_id, &provider_id)
    }

    /// Issue a prescription for `patient_id` with the caller as prescriber.
    ///
    /// The caller must be in the patient's authorized-provider set. The
    /// tracking-list capacity is checked before any write, so a full list
    /// rejects the whole operation and consumes no ID.
    pub fn create_prescription(
        env: Env,
        caller: Address,
        patient_id: Address,
        medication_name: String,
        instructions: String,
        valid_from: u64,
        valid_until: u64,
    ) -> Result<u64, LedgerError> {
        caller.require_auth();

        if !auth::is_authorized(&env, &patient_id, &caller) {
            return Err(LedgerError::Unauthorized);
        }
        if valid_from >= valid_until {
            return Err(LedgerError::InvalidPrescriptionData);
        }
        validation::validate_text(&medication_name, validation::MAX_MEDICATION_LEN)?;
        validation::validate_text(&instructions, validation::MAX_INSTRUCTIONS_LEN)?;

        let mut tracked = prescription::tracking_list(&env);
        if at_capacity(&tracked, MAX_TRACKED_PRESCRIPTIONS) {
            return Err(LedgerError::PrescriptionListOverflow);
        }

        let id = prescription::next_prescription_id(&env);
        let record = Prescription {
            id,
            patient: patient_id.clone(),
            prescriber: caller.clone(),
            medication_name,
            instructions,
            valid_from,
            valid_until,
            is_active: true,
        };
        prescription::save_prescription(&env, &record);

        tracked.push_back(id);
        prescription::save_tracking_list(&env, &tracked);

        events::publish_prescription_created(&env, id, patient_id, caller);

        Ok(id)
    }

    /// Get a prescription by ID.
    pub fn get_prescription_details(env: Env, id: u64) -> Option<Prescription> {
        prescription::get_prescription(&env, id)
    }

    /// Deactivate a prescription. Only the prescriber or the patient may
    /// do so; repeating the call for an already-inactive prescription is a
    /// no-op, not an error.
    pub fn deactivate_prescription(
        env: Env,
        caller: Address,
        id: u64,
    ) -> Result<Prescription, LedgerError> {
        caller.require_auth();

        let mut record =
            prescription::get_prescription(&env, id).ok_or(LedgerError::InvalidPrescriptionData)?;

        if caller != record.prescriber && caller != record.patient {
            return Err(LedgerError::Unauthorized);
        }

        record.is_active = false;
        prescription::save_prescription(&env, &record);

        events::publish_prescription_deactivated(&env, id, caller);

        Ok(record)
    }

    /// IDs of the caller's active prescriptions, in issue order.
    ///
    /// Scans the full tracking list; acceptable because the list is capped
    /// at [`MAX_TRACKED_PRESCRIPTIONS`] entries by construction.
    pub fn get_active_patient_prescriptions(env: Env, caller: Address) -> Vec<u64> {
        let tracked = prescription::tracking_list(&env);
        let mut active = Vec::new(&env);

        for id in tracked.iter() {
            if let Some(record) = prescription::get_prescription(&env, id) {
                if record.patient == caller && record.is_active {
                    active.push_back(id);
                }
            }
        }

        active
    }

    /// Total number of prescriptions ever issued.
    pub fn get_prescription_count(env: Env) -> u64 {
        prescription::prescription_count(&env)
    }
}
