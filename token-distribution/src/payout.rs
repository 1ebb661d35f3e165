use shared::errors::Error;
use shared::types::{Amount, Payout, Share};
use soroban_sdk::{Env, Vec};

use crate::types::DistributionTable;

/// `floor(balance * share / denominator)`. Multiplies first so that the
/// only rounding is the final division.
pub fn payout_for(balance: Amount, share: Share, denominator: Share) -> Result<Amount, Error> {
    balance
        .checked_mul(Amount::from(share))
        .and_then(|scaled| scaled.checked_div(Amount::from(denominator)))
        .ok_or(Error::ArithmeticOverflow)
}

/// Splits `balance` across the table in recipient order. Every recipient
/// gets a line, including zero payouts; the remainder is left unassigned.
pub fn split(env: &Env, table: &DistributionTable, balance: Amount) -> Result<Vec<Payout>, Error> {
    let mut payouts = Vec::new(env);
    for recipient in table.recipients.iter() {
        let share = table.shares.get(recipient.clone()).unwrap_or(0);
        let amount = payout_for(balance, share, table.denominator)?;
        payouts.push_back(Payout { recipient, amount });
    }
    Ok(payouts)
}
