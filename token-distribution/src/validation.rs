use shared::address::is_zero_address;
use shared::errors::Error;
use shared::types::Share;
use soroban_sdk::{Address, Env, Map, Vec};

use crate::types::DistributionTable;

/// Checks a proposed split and builds the table to store.
///
/// Each rule runs over the whole input before the next one, so the reported
/// error depends only on which rules are broken, not on their position.
pub fn build_table(
    env: &Env,
    recipients: Vec<Address>,
    shares: Vec<Share>,
    denominator: Share,
) -> Result<DistributionTable, Error> {
    if recipients.len() != shares.len() {
        return Err(Error::LengthMismatch);
    }

    if recipients.iter().any(|r| is_zero_address(env, &r)) {
        return Err(Error::ZeroAddress);
    }

    if shares.iter().any(|s| s == 0) {
        return Err(Error::ZeroShare);
    }

    let mut share_map: Map<Address, Share> = Map::new(env);
    for (recipient, share) in recipients.iter().zip(shares.iter()) {
        if share_map.contains_key(recipient.clone()) {
            return Err(Error::DuplicateRecipient);
        }
        share_map.set(recipient, share);
    }

    let total: u64 = shares.iter().map(u64::from).sum();
    if total != u64::from(denominator) {
        return Err(Error::ShareSumMismatch);
    }

    // Only reachable with a zero denominator.
    if recipients.is_empty() {
        return Err(Error::NoRecipients);
    }

    Ok(DistributionTable {
        recipients,
        shares: share_map,
        denominator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::address::zero_account;
    use soroban_sdk::{testutils::Address as _, vec};

    #[test]
    fn test_build_table_keeps_recipient_order() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let c = Address::generate(&env);

        let table = build_table(
            &env,
            vec![&env, c.clone(), a.clone(), b.clone()],
            vec![&env, 5, 3, 2],
            10,
        )
        .unwrap();

        assert_eq!(table.recipients, vec![&env, c.clone(), a.clone(), b.clone()]);
        assert_eq!(table.shares.get(c), Some(5));
        assert_eq!(table.shares.get(a), Some(3));
        assert_eq!(table.shares.get(b), Some(2));
        assert_eq!(table.denominator, 10);
    }

    #[test]
    fn test_zero_address_reported_before_zero_share() {
        let env = Env::default();
        let a = Address::generate(&env);

        // Zero share sits before the zero address, the address rule still wins.
        let result = build_table(
            &env,
            vec![&env, a, zero_account(&env)],
            vec![&env, 0, 100],
            100,
        );
        assert_eq!(result, Err(Error::ZeroAddress));
    }

    #[test]
    fn test_zero_share_reported_before_duplicate() {
        let env = Env::default();
        let a = Address::generate(&env);

        let result = build_table(&env, vec![&env, a.clone(), a], vec![&env, 100, 0], 100);
        assert_eq!(result, Err(Error::ZeroShare));
    }

    #[test]
    fn test_duplicate_reported_before_sum_mismatch() {
        let env = Env::default();
        let a = Address::generate(&env);

        let result = build_table(&env, vec![&env, a.clone(), a], vec![&env, 70, 70], 100);
        assert_eq!(result, Err(Error::DuplicateRecipient));
    }

    #[test]
    fn test_large_shares_do_not_overflow_sum() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        let result = build_table(
            &env,
            vec![&env, a, b],
            vec![&env, u32::MAX, u32::MAX],
            u32::MAX,
        );
        assert_eq!(result, Err(Error::ShareSumMismatch));
    }

    #[test]
    fn test_empty_table_rejected() {
        let env = Env::default();
        let result = build_table(&env, Vec::new(&env), Vec::new(&env), 0);
        assert_eq!(result, Err(Error::NoRecipients));

        let result = build_table(&env, Vec::new(&env), Vec::new(&env), 100);
        assert_eq!(result, Err(Error::ShareSumMismatch));
    }
}
