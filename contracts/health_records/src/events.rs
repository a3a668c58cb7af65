use soroban_sdk::{symbol_short, Address, Env};

/// Event published when a patient registers a record.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient: Address,
    pub timestamp: u64,
}

/// Event published when a provider joins the directory.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRegisteredEvent {
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when a patient authorizes a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAuthorizedEvent {
    pub patient: Address,
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when a prescription is issued.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionCreatedEvent {
    pub id: u64,
    pub patient: Address,
    pub prescriber: Address,
    pub timestamp: u64,
}

/// Event published when a prescription is deactivated.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionDeactivatedEvent {
    pub id: u64,
    pub caller: Address,
    pub timestamp: u64,
}

pub fn publish_patient_registered(env: &Env, patient: Address) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_provider_registered(env: &Env, provider: Address) {
    let topics = (symbol_short!("PRV_REG"), provider.clone());
    let data = ProviderRegisteredEvent {
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_provider_authorized(env: &Env, patient: Address, provider: Address) {
    let topics = (symbol_short!("PRV_AUTH"), patient.clone(), provider.clone());
    let data = ProviderAuthorizedEvent {
        patient,
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_prescription_created(env: &Env, id: u64, patient: Address, prescriber: Address) {
    let topics = (symbol_short!("RX_NEW"), patient.clone(), prescriber.clone());
    let data = PrescriptionCreatedEvent {
        id,
        patient,
        prescriber,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_prescription_deactivated(env: &Env, id: u64, caller: Address) {
    let topics = (symbol_short!("RX_OFF"), caller.clone());
    let data = PrescriptionDeactivatedEvent {
        id,
        caller,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
