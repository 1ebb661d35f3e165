use soroban_sdk::{Address, Env, String};

/// Account strkey of the all-zero ed25519 key.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
/// Contract strkey of the all-zero contract id.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn zero_account(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn zero_contract(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_CONTRACT))
}

/// True for either null address. Nothing can sign for them, so funds sent
/// there are lost.
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == zero_account(env) || *address == zero_contract(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_null_addresses_are_zero() {
        let env = Env::default();
        assert!(is_zero_address(&env, &zero_account(&env)));
        assert!(is_zero_address(&env, &zero_contract(&env)));
    }

    #[test]
    fn test_generated_address_is_not_zero() {
        let env = Env::default();
        let address = Address::generate(&env);
        assert!(!is_zero_address(&env, &address));
    }
}
