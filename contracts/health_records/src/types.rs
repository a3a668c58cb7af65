use soroban_sdk::{contracttype, Address, String, Vec};

/// Maximum members of a patient's authorized-provider set.
pub const MAX_AUTHORIZED_PROVIDERS: u32 = 5;

/// Maximum entries in a patient's active-medication list.
pub const MAX_ACTIVE_MEDICATIONS: u32 = 10;

/// Maximum prescriptions the global tracking list will hold.
pub const MAX_TRACKED_PRESCRIPTIONS: u32 = 100;

/// Patient health record. Created exactly once per patient address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    pub history: String,
    pub genetic_data: String,
    pub active_medications: Vec<u64>,
    pub authorized_providers: Vec<Address>,
}

/// Provider directory entry. License status is self-asserted at
/// registration; revocation happens through an external process.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRecord {
    pub specialty: String,
    pub license_number: String,
    pub license_status: bool,
}

/// A single prescription. `Active → Inactive` is the only transition
/// and it is terminal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prescription {
    pub id: u64,
    pub patient: Address,
    pub prescriber: Address,
    pub medication_name: String,
    pub instructions: String,
    pub valid_from: u64,
    pub valid_until: u64,
    pub is_active: bool,
}
