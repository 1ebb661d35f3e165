use soroban_sdk::{contracttype, Address};

pub type Amount = i128;
pub type Share = u32;

/// One line of a proportional split: what `recipient` receives.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub recipient: Address,
    pub amount: Amount,
}
