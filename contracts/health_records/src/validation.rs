use ledger_common::LedgerError;
use soroban_sdk::String;

pub const MAX_HISTORY_LEN: u32 = 256;
pub const MAX_GENETIC_DATA_LEN: u32 = 256;
pub const MAX_SPECIALTY_LEN: u32 = 64;
pub const MAX_LICENSE_LEN: u32 = 32;
pub const MAX_MEDICATION_LEN: u32 = 64;
pub const MAX_INSTRUCTIONS_LEN: u32 = 32;

// Largest of the field limits above; scratch buffer for charset checks.
const TEXT_BUF_LEN: usize = 256;

/// Validate a free-text field.
///
/// The value must be between 1 and `max_len` bytes and contain only
/// printable ASCII (space ' ' to tilde '~').
pub fn validate_text(value: &String, max_len: u32) -> Result<(), LedgerError> {
    let len = value.len();
    if len == 0 || len > max_len {
        return Err(LedgerError::InvalidInput);
    }

    let mut buf = [0u8; TEXT_BUF_LEN];
    value.copy_into_slice(&mut buf[..len as usize]);

    for &b in &buf[..len as usize] {
        if !(32..=126).contains(&b) {
            return Err(LedgerError::InvalidInput);
        }
    }

    Ok(())
}
