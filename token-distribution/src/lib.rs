#![no_std]

use shared::{
    errors::{report, Error},
    events::{BALANCE_WITHDRAWN, DISTRIBUTION_REGISTERED, PAYOUT_SENT},
    ownable::AccessControl,
    types::{Amount, Payout, Share},
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, token::TokenClient, Address, Env, Vec};

mod payout;
mod storage;
mod types;
mod validation;


pub use types::DistributionTable;

use storage::{get_table, has_table, set_table};

contractmeta!(
    key = "name",
    val = "Token Distribution Contract"
);

#[contract]
pub struct TokenDistribution;

#[contractimpl]
impl TokenDistribution {
    /// Set the contract owner. Can only be called once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        AccessControl::new(&env).init(&owner)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        AccessControl::new(&env).owner()
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        AccessControl::new(&env).transfer_ownership(&caller, &new_owner)
    }

    /// Accepted from the owner but has no effect: the contract always keeps
    /// an owner able to sweep balances.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), Error> {
        AccessControl::new(&env).renounce_ownership(&caller)
    }

    /// Register how balances of `token` are split (owner only)
    ///
    /// # Arguments
    /// * `caller` - Must be the owner
    /// * `token` - Token the split applies to
    /// * `recipients` - Payout addresses, in payout order
    /// * `shares` - Share of each recipient, paired by position
    /// * `denominator` - Declared total of `shares`
    pub fn register(
        env: Env,
        caller: Address,
        token: Address,
        recipients: Vec<Address>,
        shares: Vec<Share>,
        denominator: Share,
    ) -> Result<(), Error> {
        AccessControl::new(&env).require_admin(&caller)?;

        if has_table(&env, &token) {
            return Err(report(&env, Error::AlreadyRegistered));
        }

        let table = validation::build_table(&env, recipients, shares, denominator)
            .map_err(|e| report(&env, e))?;

        set_table(&env, &token, &table);

        env.events().publish(
            (DISTRIBUTION_REGISTERED, token),
            (table.recipients.len(), table.denominator),
        );

        Ok(())
    }

    pub fn is_initialized(env: Env, token: Address) -> bool {
        has_table(&env, &token)
    }

    /// Registered recipients in payout order, empty if `token` is unregistered
    pub fn recipients_of(env: Env, token: Address) -> Vec<Address> {
        get_table(&env, &token)
            .map(|table| table.recipients)
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn share_of(env: Env, token: Address, recipient: Address) -> Share {
        get_table(&env, &token)
            .and_then(|table| table.shares.get(recipient))
            .unwrap_or(0)
    }

    pub fn denominator_of(env: Env, token: Address) -> Share {
        get_table(&env, &token)
            .map(|table| table.denominator)
            .unwrap_or(0)
    }

    /// Sweep the whole balance of `token` to the owner (owner only)
    ///
    /// Works whether or not `token` has a registered split. Returns the
    /// amount moved.
    pub fn withdraw_all(env: Env, caller: Address, token: Address) -> Result<Amount, Error> {
        let access = AccessControl::new(&env);
        access.require_admin(&caller)?;
        let owner = access.owner()?;

        let token_client = TokenClient::new(&env, &token);
        let balance = token_client.balance(&env.current_contract_address());
        if balance <= 0 {
            log!(&env, "withdrawing 0 balance token", token);
            return Err(report(&env, Error::EmptyBalance));
        }

        send(&env, &token_client, &owner, balance)?;

        env.events()
            .publish((BALANCE_WITHDRAWN, token, owner), balance);

        Ok(balance)
    }

    /// Pay out the current balance of `token` according to its registered
    /// split. Anyone may call this.
    ///
    /// Rounding dust stays in the contract.
    pub fn distribute(env: Env, token: Address) -> Result<Vec<Payout>, Error> {
        let payouts = plan(&env, &token)?;

        let token_client = TokenClient::new(&env, &token);
        for payout in payouts.iter() {
            send(&env, &token_client, &payout.recipient, payout.amount)?;
            env.events().publish(
                (PAYOUT_SENT, token.clone(), payout.recipient),
                payout.amount,
            );
        }

        Ok(payouts)
    }

    /// The payouts `distribute` would make right now, without moving funds
    pub fn preview_distribution(env: Env, token: Address) -> Result<Vec<Payout>, Error> {
        plan(&env, &token)
    }
}

/// Snapshots the balance once and splits it over the registered table.
fn plan(env: &Env, token: &Address) -> Result<Vec<Payout>, Error> {
    let table = get_table(env, token).ok_or_else(|| report(env, Error::NotRegistered))?;

    let balance = TokenClient::new(env, token).balance(&env.current_contract_address());
    if balance <= 0 {
        log!(env, "distributing 0 balance token", token.clone());
        return Err(report(env, Error::EmptyBalance));
    }

    payout::split(env, &table, balance).map_err(|e| report(env, e))
}

fn send(env: &Env, token_client: &TokenClient, to: &Address, amount: Amount) -> Result<(), Error> {
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer rejected", to.clone(), amount);
            Err(report(env, Error::TransferFailed))
        }
    }
}
