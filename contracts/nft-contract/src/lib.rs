#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

mod minting;
mod transfer;

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub(crate) enum DataKey {
    Admin,         // Issuance authority, set once at initialization
    Counter,       // Last issued token id
    Owner(u32),    // Current owner of each token by id
    Approved(u32), // Per-token operator grant, cleared on transfer
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    TokenNotFound = 4,
}

#[contract]
pub struct NFTContract;

#[contractimpl]
impl NFTContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(TokenError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Counter, &0u32);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        Self::read_admin(&env)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, TokenError> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(TokenError::TokenNotFound)
    }

    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Approved(token_id))
    }

    /// Internal helper to fetch the issuance authority.
    fn read_admin(env: &Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(TokenError::NotInitialized)
    }
}

#[cfg(test)]
mod test;
