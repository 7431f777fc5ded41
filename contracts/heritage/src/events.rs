//! Structured event publishing for the Heritage contract.

use soroban_sdk::{symbol_short, Address, Env};

pub fn publish_configured(env: &Env, owner: &Address, heir: &Address, validator_count: u32) {
    env.events().publish(
        (symbol_short!("CFG_SET"), owner.clone()),
        (heir.clone(), validator_count),
    );
}

pub fn publish_activity_updated(env: &Env, owner: &Address, at: u64) {
    env.events()
        .publish((symbol_short!("ACT_UPD"), owner.clone()), at);
}

pub fn publish_inheritance_triggered(env: &Env, owner: &Address, last_activity: u64) {
    env.events()
        .publish((symbol_short!("INH_TRG"), owner.clone()), last_activity);
}

pub fn publish_inheritance_confirmed(
    env: &Env,
    owner: &Address,
    validator: &Address,
    confirmations: u32,
) {
    env.events().publish(
        (symbol_short!("INH_CNF"), owner.clone()),
        (validator.clone(), confirmations),
    );
}

pub fn publish_token_transferred(
    env: &Env,
    owner: &Address,
    heir: &Address,
    token: &Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("TOK_TRF"), owner.clone()),
        (heir.clone(), token.clone(), amount),
    );
}
