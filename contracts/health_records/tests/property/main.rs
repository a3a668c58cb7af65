//! Property tests for the health records ledger.
//!
//! Each case builds a fresh contract environment; the properties mirror
//! the ledger's hard invariants: dense prescription IDs, the bounded
//! authorized-provider set, and the validity-window ordering rule.

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

use health_records::{
    HealthRecordsContract, HealthRecordsContractClient, LedgerError, MAX_AUTHORIZED_PROVIDERS,
};

struct Harness<'a> {
    env: &'a Env,
    client: HealthRecordsContractClient<'a>,
}

impl<'a> Harness<'a> {
    fn new(env: &'a Env) -> Self {
        env.mock_all_auths();
        let contract_id = env.register(HealthRecordsContract, ());
        let client = HealthRecordsContractClient::new(env, &contract_id);
        Harness { env, client }
    }

    fn register_patient(&self) -> Address {
        let patient = Address::generate(self.env);
        self.client.register_patient(
            &patient,
            &String::from_str(self.env, "history"),
            &String::from_str(self.env, "genome"),
        );
        patient
    }

    fn register_provider(&self) -> Address {
        let provider = Address::generate(self.env);
        self.client.register_provider(
            &provider,
            &String::from_str(self.env, "General"),
            &String::from_str(self.env, "LIC-1"),
        );
        provider
    }

    fn authorized_pair(&self) -> (Address, Address) {
        let patient = self.register_patient();
        let provider = self.register_provider();
        self.client.authorize_provider(&patient, &provider);
        (patient, provider)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// **Property**: IDs from any run of successful creations are exactly
    /// `0..k`, strictly increasing with no gaps or repeats.
    #[test]
    fn prop_prescription_ids_are_dense(count in 1u64..20) {
        let env = Env::default();
        let harness = Harness::new(&env);
        let (patient, provider) = harness.authorized_pair();

        for expected in 0..count {
            let id = harness.client.create_prescription(
                &provider,
                &patient,
                &String::from_str(&env, "Aspirin"),
                &String::from_str(&env, "1/day"),
                &100,
                &200,
            );
            prop_assert_eq!(id, expected);
        }
        prop_assert_eq!(harness.client.get_prescription_count(), count);
    }

    /// **Property**: the authorized-provider set never exceeds its
    /// capacity, whatever the number of distinct authorization attempts.
    #[test]
    fn prop_provider_set_is_bounded(attempts in 1u32..12) {
        let env = Env::default();
        let harness = Harness::new(&env);
        let patient = harness.register_patient();

        for n in 0..attempts {
            let provider = harness.register_provider();
            let result = harness.client.try_authorize_provider(&patient, &provider);
            if n < MAX_AUTHORIZED_PROVIDERS {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(Ok(LedgerError::MaxProvidersReached)));
            }
        }

        let record = harness.client.get_patient_record(&patient).unwrap();
        prop_assert!(record.authorized_providers.len() <= MAX_AUTHORIZED_PROVIDERS);
    }

    /// **Property**: creation succeeds iff `valid_from < valid_until`,
    /// all other inputs held valid.
    #[test]
    fn prop_validity_window_ordering(valid_from in 0u64..500, valid_until in 0u64..500) {
        let env = Env::default();
        let harness = Harness::new(&env);
        let (patient, provider) = harness.authorized_pair();

        let result = harness.client.try_create_prescription(
            &provider,
            &patient,
            &String::from_str(&env, "Aspirin"),
            &String::from_str(&env, "1/day"),
            &valid_from,
            &valid_until,
        );

        if valid_from < valid_until {
            prop_assert_eq!(result, Ok(Ok(0)));
        } else {
            prop_assert_eq!(result, Err(Ok(LedgerError::InvalidPrescriptionData)));
        }
    }

    /// **Property**: deactivation by any address other than the
    /// prescriber or the patient is rejected and leaves the
    /// prescription active.
    #[test]
    fn prop_deactivation_is_gated(outsiders in 1usize..5) {
        let env = Env::default();
        let harness = Harness::new(&env);
        let (patient, provider) = harness.authorized_pair();

        let id = harness.client.create_prescription(
            &provider,
            &patient,
            &String::from_str(&env, "Aspirin"),
            &String::from_str(&env, "1/day"),
            &100,
            &200,
        );

        for _ in 0..outsiders {
            let outsider = Address::generate(&env);
            let result = harness.client.try_deactivate_prescription(&outsider, &id);
            prop_assert_eq!(result, Err(Ok(LedgerError::Unauthorized)));
        }

        prop_assert!(harness.client.get_prescription_details(&id).unwrap().is_active);
    }
}
