//! Capacity-checked helpers for fixed-capacity on-chain lists.
//!
//! The ledger keeps several append-only collections with hard capacity
//! limits (authorized providers, active medications, the prescription
//! tracking list). Inserts must be rejected at capacity, never silently
//! truncated, so every append goes through [`push_within_capacity`].

use soroban_sdk::{Env, IntoVal, TryFromVal, Val, Vec};

/// Appends `item` to `list` only if the list is below `capacity`.
///
/// Returns `true` when the item was appended, `false` when the list is
/// already full. Insertion order is preserved.
pub fn push_within_capacity<T>(list: &mut Vec<T>, item: T, capacity: u32) -> bool
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    if list.len() >= capacity {
        return false;
    }
    list.push_back(item);
    true
}

/// Returns whether `list` has reached `capacity`.
pub fn at_capacity<T>(list: &Vec<T>, capacity: u32) -> bool
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    list.len() >= capacity
}
