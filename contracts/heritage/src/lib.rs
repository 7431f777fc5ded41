#![no_std]

//! # Digital Heritage
//!
//! A dead-man's-switch inheritance contract. An account owner names an heir
//! and a set of validators, then keeps the record alive with periodic
//! activity pings. After 90 days without a ping anyone may fire the
//! inheritance trigger; once every validator has confirmed, the owner's
//! token balance can be pulled to the heir through a pre-granted allowance.
//!
//! - **Liveness pings**: only the owner can reset the inactivity clock,
//!   and only while the trigger has not fired
//! - **Permissionless trigger**: the inactivity check reads time and writes
//!   a monotonic flag, so any watcher may run it
//! - **Unanimous quorum**: every named validator must confirm exactly once
//! - **Pull-based transfer**: the contract spends an allowance the owner
//!   granted it beforehand via the standard token interface

pub mod confirmation;
pub mod events;
pub mod registry;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use registry::{HeritageConfig, INACTIVITY_PERIOD_SECS};

// ── Error codes ───────────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum HeritageError {
    NotConfigured = 1,
    InvalidHeir = 2,
    SelfInheritance = 3,
    InsufficientValidators = 4,
    InvalidValidatorSet = 5,
    InheritanceTriggered = 6,
    InheritanceNotTriggered = 7,
    NotAValidator = 8,
    AlreadyConfirmed = 9,
    QuorumNotReached = 10,
    InvalidAmount = 11,
    TransferFailed = 12,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct HeritageContract;

#[contractimpl]
impl HeritageContract {
    // ── Configuration ─────────────────────────────────────────────────────────

    /// Store or replace the heritage configuration for `owner`.
    ///
    /// * `heir`       — recipient of the inheritance; must not be the owner
    ///                  or this contract.
    /// * `validators` — at least two distinct addresses, none equal to the
    ///                  owner or the heir, that must unanimously confirm
    ///                  before any transfer.
    ///
    /// Re-configuring an already-configured owner replaces the record
    /// wholesale: the inactivity clock restarts, the trigger flag resets,
    /// and every confirmation from the prior configuration is cleared, so a
    /// stale quorum can never authorize a transfer against the new record.
    pub fn configure_heritage(
        env: Env,
        owner: Address,
        heir: Address,
        validators: Vec<Address>,
    ) -> Result<(), HeritageError> {
        owner.require_auth();

        registry::validate(&env, &owner, &heir, &validators)?;

        if let Some(prev) = registry::load(&env, &owner) {
            confirmation::clear(&env, &owner, &prev.validators);
        }

        let config = HeritageConfig {
            heir: heir.clone(),
            validators: validators.clone(),
            last_activity: env.ledger().timestamp(),
            is_configured: true,
            is_inheritance_triggered: false,
            confirmations: 0,
        };
        registry::store(&env, &owner, &config);
        events::publish_configured(&env, &owner, &heir, validators.len());

        Ok(())
    }

    // ── Liveness ──────────────────────────────────────────────────────────────

    /// Record a liveness ping for `owner`, resetting the inactivity clock.
    ///
    /// Rejected once the trigger has fired: confirmations may already be
    /// accumulating and a late ping must not restart the clock under them.
    /// Returns the new `last_activity` timestamp.
    pub fn update_activity(env: Env, owner: Address) -> Result<u64, HeritageError> {
        owner.require_auth();

        let mut config = registry::load(&env, &owner).ok_or(HeritageError::NotConfigured)?;
        if config.is_inheritance_triggered {
            return Err(HeritageError::InheritanceTriggered);
        }

        let now = env.ledger().timestamp();
        config.last_activity = now;
        registry::store(&env, &owner, &config);
        events::publish_activity_updated(&env, &owner, now);

        Ok(now)
    }

    /// Evaluate the inactivity window for `owner` and fire the trigger if it
    /// has elapsed.
    ///
    /// Callable by anyone; a monitoring agent typically polls this. The
    /// trigger fires at `now - last_activity >= INACTIVITY_PERIOD_SECS`
    /// (inclusive boundary). Calls before that point, and calls after the
    /// flag is already set, are no-op successes so pollers never have to
    /// special-case "not yet due". Returns the current trigger state.
    pub fn check_inactivity(env: Env, owner: Address) -> Result<bool, HeritageError> {
        let mut config = registry::load(&env, &owner).ok_or(HeritageError::NotConfigured)?;

        if config.is_inheritance_triggered {
            return Ok(true);
        }

        let now = env.ledger().timestamp();
        let elapsed = now.saturating_sub(config.last_activity);
        if elapsed < INACTIVITY_PERIOD_SECS {
            return Ok(false);
        }

        config.is_inheritance_triggered = true;
        registry::store(&env, &owner, &config);
        events::publish_inheritance_triggered(&env, &owner, config.last_activity);

        Ok(true)
    }

    // ── Confirmation quorum ───────────────────────────────────────────────────

    /// Confirm inheritance for `owner` as one of its validators.
    ///
    /// Each validator may confirm exactly once per configuration lifetime;
    /// a duplicate confirmation fails rather than silently succeeding.
    /// Returns the updated confirmation count.
    pub fn confirm_inheritance(
        env: Env,
        validator: Address,
        owner: Address,
    ) -> Result<u32, HeritageError> {
        validator.require_auth();

        let mut config = registry::load(&env, &owner).ok_or(HeritageError::NotConfigured)?;
        if !config.is_inheritance_triggered {
            return Err(HeritageError::InheritanceNotTriggered);
        }
        if !config.validators.contains(&validator) {
            return Err(HeritageError::NotAValidator);
        }
        if confirmation::has_confirmed(&env, &owner, &validator) {
            return Err(HeritageError::AlreadyConfirmed);
        }

        confirmation::record(&env, &owner, &validator);
        config.confirmations = config.confirmations.saturating_add(1);
        registry::store(&env, &owner, &config);
        events::publish_inheritance_confirmed(&env, &owner, &validator, config.confirmations);

        Ok(config.confirmations)
    }

    // ── Transfer ──────────────────────────────────────────────────────────────

    /// Move `amount` of `token` from the owner's balance to the heir.
    ///
    /// Requires the trigger to have fired and a unanimous quorum. The owner
    /// must have approved this contract as spender on `token` beforehand;
    /// the transfer pulls from that allowance via `transfer_from`.
    ///
    /// All local checks precede the single external call, and the operation
    /// writes no local state, so a collaborator failure leaves nothing to
    /// roll back. May be invoked repeatedly for further amounts or other
    /// tokens; nothing marks the estate as settled.
    pub fn transfer_token_to_heir(
        env: Env,
        owner: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), HeritageError> {
        owner.require_auth();

        if amount <= 0 {
            return Err(HeritageError::InvalidAmount);
        }

        let config = registry::load(&env, &owner).ok_or(HeritageError::NotConfigured)?;
        if !config.is_inheritance_triggered {
            return Err(HeritageError::InheritanceNotTriggered);
        }
        if !confirmation::quorum_reached(&config) {
            return Err(HeritageError::QuorumNotReached);
        }

        let client = token::Client::new(&env, &token);
        if client
            .try_transfer_from(
                &env.current_contract_address(),
                &owner,
                &config.heir,
                &amount,
            )
            .is_err()
        {
            return Err(HeritageError::TransferFailed);
        }

        events::publish_token_transferred(&env, &owner, &config.heir, &token, amount);

        Ok(())
    }

    // ── View functions ────────────────────────────────────────────────────────

    /// Full configuration snapshot for `owner`, or `None` if unconfigured.
    pub fn get_heritage_config(env: Env, owner: Address) -> Option<HeritageConfig> {
        registry::load(&env, &owner)
    }

    /// Whether `candidate` is in `owner`'s validator set.
    pub fn is_validator(env: Env, owner: Address, candidate: Address) -> bool {
        registry::load(&env, &owner)
            .map(|c| c.validators.contains(&candidate))
            .unwrap_or(false)
    }

    /// Whether `validator` has confirmed inheritance for `owner`.
    pub fn get_validator_confirmation(env: Env, owner: Address, validator: Address) -> bool {
        confirmation::has_confirmed(&env, &owner, &validator)
    }

    /// Whether every validator of `owner` has confirmed.
    pub fn is_quorum_reached(env: Env, owner: Address) -> bool {
        registry::load(&env, &owner)
            .map(|c| confirmation::quorum_reached(&c))
            .unwrap_or(false)
    }

    /// The fixed inactivity window in seconds. Frontends use this together
    /// with `last_activity` to render the time remaining until the trigger.
    pub fn inactivity_period(_env: Env) -> u64 {
        INACTIVITY_PERIOD_SECS
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
