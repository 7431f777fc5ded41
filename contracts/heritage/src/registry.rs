//! Heritage configuration records: validation, storage, and constants.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::HeritageError;

// ── Storage key prefixes ─────────────────────────────────────────────────────

pub(crate) const CONFIG: Symbol = symbol_short!("CFG");

// TTL: ~240 days at 5s/ledger. Must comfortably outlive the 90-day
// inactivity window so a dormant owner's record is never archived before
// the trigger can fire.
const TTL_THRESHOLD: u32 = 2_073_600;
const TTL_EXTEND_TO: u32 = 4_147_200;

/// Inactivity window after which inheritance may be triggered: 90 days.
pub const INACTIVITY_PERIOD_SECS: u64 = 7_776_000;

/// Minimum number of validators a configuration must name.
pub const MIN_VALIDATORS: u32 = 2;

// ── Types ────────────────────────────────────────────────────────────────────

/// The full per-owner heritage record.
///
/// Created by `configure_heritage` and persisted indefinitely; there is no
/// deletion path. `is_inheritance_triggered` is monotonic within one
/// configuration lifetime, and re-configuration is the only reset.
#[contracttype]
#[derive(Clone, Debug)]
pub struct HeritageConfig {
    /// Designated recipient. Never the owner, never this contract.
    pub heir: Address,
    /// Distinct confirming parties, stored in the order given. Length >= 2;
    /// no element equals the owner or the heir.
    pub validators: Vec<Address>,
    /// Ledger timestamp of the most recent liveness ping.
    pub last_activity: u64,
    /// True once a valid configuration has been stored.
    pub is_configured: bool,
    /// Set by the inactivity check once the window has elapsed.
    pub is_inheritance_triggered: bool,
    /// Count of distinct validator confirmations received so far.
    pub confirmations: u32,
}

// ── Validation ───────────────────────────────────────────────────────────────

/// Validate a (heir, validators) pair for `owner`.
///
/// Check order matches the failure taxonomy: heir validity first, then
/// validator count, then validator-set membership and duplicates.
pub(crate) fn validate(
    env: &Env,
    owner: &Address,
    heir: &Address,
    validators: &Vec<Address>,
) -> Result<(), HeritageError> {
    // An heir set to the registry itself could never withdraw what it is
    // sent; it is not a valid recipient.
    if *heir == env.current_contract_address() {
        return Err(HeritageError::InvalidHeir);
    }
    if heir == owner {
        return Err(HeritageError::SelfInheritance);
    }
    if validators.len() < MIN_VALIDATORS {
        return Err(HeritageError::InsufficientValidators);
    }
    for i in 0..validators.len() {
        let v = validators.get_unchecked(i);
        if v == *owner || v == *heir {
            return Err(HeritageError::InvalidValidatorSet);
        }
        // Validator sets are small (typically 2-5), so the quadratic
        // duplicate scan stays cheap.
        for j in (i + 1)..validators.len() {
            if v == validators.get_unchecked(j) {
                return Err(HeritageError::InvalidValidatorSet);
            }
        }
    }
    Ok(())
}

// ── Storage helpers ──────────────────────────────────────────────────────────

pub(crate) fn config_key(owner: &Address) -> (Symbol, Address) {
    (CONFIG, owner.clone())
}

pub(crate) fn store(env: &Env, owner: &Address, config: &HeritageConfig) {
    let key = config_key(owner);
    env.storage().persistent().set(&key, config);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn load(env: &Env, owner: &Address) -> Option<HeritageConfig> {
    env.storage().persistent().get(&config_key(owner))
}
