use soroban_sdk::{symbol_short, Symbol};

// Ownership events
pub const OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("own_xfer");
pub const RENOUNCE_IGNORED: Symbol = symbol_short!("renounce");

// Distribution events
pub const DISTRIBUTION_REGISTERED: Symbol = symbol_short!("dist_reg");
pub const PAYOUT_SENT: Symbol = symbol_short!("dist_pay");
pub const BALANCE_WITHDRAWN: Symbol = symbol_short!("withdraw");
