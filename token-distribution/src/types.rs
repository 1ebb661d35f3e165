use shared::types::Share;
use soroban_sdk::{contracttype, Address, Map, Vec};

/// A token's registered split. Stored once and never changed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionTable {
    pub recipients: Vec<Address>, // payout order
    pub shares: Map<Address, Share>,
    pub denominator: Share,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Table(Address), // token -> DistributionTable
}
