use soroban_sdk::{contracttype, log, Address, Env};

use crate::{
    address::is_zero_address,
    errors::{report, Error},
    events::{OWNERSHIP_TRANSFERRED, RENOUNCE_IGNORED},
};

#[contracttype]
#[derive(Clone)]
pub enum OwnableKey {
    Owner,
}

/// Single-owner access control kept in instance storage.
///
/// Ownership can be handed over but never given up: `renounce_ownership`
/// is accepted from the owner and leaves the owner in place.
pub struct AccessControl {
    env: Env,
}

impl AccessControl {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    pub fn has_owner(&self) -> bool {
        self.env.storage().instance().has(&OwnableKey::Owner)
    }

    pub fn owner(&self) -> Result<Address, Error> {
        self.env
            .storage()
            .instance()
            .get::<OwnableKey, Address>(&OwnableKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Sets the first owner. Fails once an owner exists.
    pub fn init(&self, owner: &Address) -> Result<(), Error> {
        if self.has_owner() {
            return Err(report(&self.env, Error::AlreadyInitialized));
        }
        owner.require_auth();

        if is_zero_address(&self.env, owner) {
            return Err(report(&self.env, Error::ZeroAddress));
        }

        self.set_owner(owner);
        self.env
            .events()
            .publish((OWNERSHIP_TRANSFERRED,), (Option::<Address>::None, owner.clone()));
        Ok(())
    }

    pub fn is_admin(&self, caller: &Address) -> bool {
        match self.owner() {
            Ok(owner) => owner == *caller,
            Err(_) => false,
        }
    }

    /// Authenticates `caller` and checks it holds the owner capability.
    pub fn require_admin(&self, caller: &Address) -> Result<(), Error> {
        let owner = self.owner().map_err(|e| report(&self.env, e))?;
        caller.require_auth();

        if *caller != owner {
            return Err(report(&self.env, Error::Unauthorized));
        }
        Ok(())
    }

    pub fn transfer_ownership(&self, caller: &Address, new_owner: &Address) -> Result<(), Error> {
        self.require_admin(caller)?;

        if is_zero_address(&self.env, new_owner) {
            return Err(report(&self.env, Error::ZeroAddress));
        }

        self.set_owner(new_owner);
        self.env.events().publish(
            (OWNERSHIP_TRANSFERRED,),
            (Some(caller.clone()), new_owner.clone()),
        );
        Ok(())
    }

    /// Renouncing is disabled. The call is authenticated and recorded, but
    /// the owner is left unchanged.
    pub fn renounce_ownership(&self, caller: &Address) -> Result<(), Error> {
        self.require_admin(caller)?;

        log!(&self.env, "renounce ignored", caller.clone());
        self.env.events().publish((RENOUNCE_IGNORED,), caller.clone());
        Ok(())
    }

    fn set_owner(&self, owner: &Address) {
        self.env.storage().instance().set(&OwnableKey::Owner, owner);
    }
}
