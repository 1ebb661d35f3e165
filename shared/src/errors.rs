use soroban_sdk::{contracterror, log, Env, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum Error {
    // Ownership
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,

    // Registration
    AlreadyRegistered = 4,
    LengthMismatch = 5,
    ZeroAddress = 6,
    ZeroShare = 7,
    DuplicateRecipient = 8,
    ShareSumMismatch = 9,

    // Distribution
    NotRegistered = 10,
    EmptyBalance = 11,
    TransferFailed = 12,

    NoRecipients = 13,
    ArithmeticOverflow = 14,
}

impl Error {
    /// Stable human readable reason, written to the diagnostic log when the
    /// error is raised.
    pub const fn message(&self) -> &'static str {
        match self {
            Error::NotInitialized => "contract owner not initialized",
            Error::AlreadyInitialized => "contract owner already initialized",
            Error::Unauthorized => "caller is not the owner",
            Error::AlreadyRegistered => "TokenDistribution has been registered",
            Error::LengthMismatch => {
                "destinationAddresses.length is different from destinationShare.length"
            }
            Error::ZeroAddress => "destinationAddr is point to zero address",
            Error::ZeroShare => "destinationShare is set to zero",
            Error::DuplicateRecipient => "destinationShare already set",
            Error::ShareSumMismatch => "totalShare is different from baseShare setting",
            Error::NotRegistered => "TokenDistribution not registered yet",
            Error::EmptyBalance => "zero balance token",
            Error::TransferFailed => "token transfer rejected",
            Error::NoRecipients => "no destination addresses",
            Error::ArithmeticOverflow => "payout arithmetic overflow",
        }
    }
}

/// Writes the error's message to the diagnostic log and hands the error back,
/// so call sites can `return Err(report(&env, Error::..))`.
pub fn report(env: &Env, err: Error) -> Error {
    let code = err as u32;
    log!(env, "error", code, String::from_str(env, err.message()));
    err
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(Error::Unauthorized as u32, 3);
        assert_eq!(Error::AlreadyRegistered as u32, 4);
        assert_eq!(Error::ShareSumMismatch as u32, 9);
        assert_eq!(Error::NotRegistered as u32, 10);
        assert_eq!(Error::EmptyBalance as u32, 11);
        assert_eq!(Error::TransferFailed as u32, 12);
    }

    #[test]
    fn test_registration_messages_are_distinct() {
        let errors = [
            Error::AlreadyRegistered,
            Error::LengthMismatch,
            Error::ZeroAddress,
            Error::ZeroShare,
            Error::DuplicateRecipient,
            Error::ShareSumMismatch,
            Error::NotRegistered,
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in errors.iter().skip(i + 1) {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
