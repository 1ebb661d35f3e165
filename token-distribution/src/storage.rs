use soroban_sdk::{Address, Env};

use crate::types::{DataKey, DistributionTable};

pub fn set_table(env: &Env, token: &Address, table: &DistributionTable) {
    env.storage()
        .persistent()
        .set(&DataKey::Table(token.clone()), table);
}

pub fn get_table(env: &Env, token: &Address) -> Option<DistributionTable> {
    env.storage()
        .persistent()
        .get::<DataKey, DistributionTable>(&DataKey::Table(token.clone()))
}

/// A table is present exactly when the token has been registered.
pub fn has_table(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Table(token.clone()))
}
