//! Per-validator confirmation flags and quorum evaluation.
//!
//! Each (owner, validator) pair carries a write-once boolean under its own
//! composite key. The aggregate count lives on the owner's `HeritageConfig`;
//! the per-validator flags exist so a duplicate confirmation can be rejected
//! and so external callers can audit exactly who has confirmed.

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::registry::HeritageConfig;

// ── Storage key prefixes ─────────────────────────────────────────────────────

const CONFIRM: Symbol = symbol_short!("CNF");

// Same TTL as the owner's config record: the flags must live exactly as
// long as the configuration they confirm.
const TTL_THRESHOLD: u32 = 2_073_600;
const TTL_EXTEND_TO: u32 = 4_147_200;

// ── Storage helpers ──────────────────────────────────────────────────────────

fn confirm_key(owner: &Address, validator: &Address) -> (Symbol, Address, Address) {
    (CONFIRM, owner.clone(), validator.clone())
}

/// Whether `validator` has already confirmed inheritance for `owner`.
pub(crate) fn has_confirmed(env: &Env, owner: &Address, validator: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&confirm_key(owner, validator))
}

/// Record `validator`'s confirmation for `owner`. Write-once; callers must
/// reject duplicates via `has_confirmed` first.
pub(crate) fn record(env: &Env, owner: &Address, validator: &Address) {
    let key = confirm_key(owner, validator);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Remove every confirmation flag left by a prior configuration of `owner`.
///
/// Called on re-configuration so a stale quorum from an earlier inactivity
/// cycle cannot carry over to the replacement record.
pub(crate) fn clear(env: &Env, owner: &Address, validators: &Vec<Address>) {
    for validator in validators.iter() {
        env.storage()
            .persistent()
            .remove(&confirm_key(owner, &validator));
    }
}

// ── Quorum ───────────────────────────────────────────────────────────────────

/// Quorum is full unanimity: every named validator has confirmed.
pub(crate) fn quorum_reached(config: &HeritageConfig) -> bool {
    config.confirmations == config.validators.len()
}
