#![cfg(test)]

use crate::{NFTContract, NFTContractClient, TokenError};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

fn setup<'a>() -> (Env, Address, NFTContractClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(NFTContract, ());
    let client = NFTContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, admin, client)
}

#[test]
fn test_mint_assigns_increasing_ids() {
    let (env, admin, client) = setup();

    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);

    assert_eq!(client.mint(&admin, &user1), 1);
    assert_eq!(client.mint(&admin, &user2), 2);

    assert_eq!(client.owner_of(&1), user1);
    assert_eq!(client.owner_of(&2), user2);
}

#[test]
fn test_mint_requires_issuance_authority() {
    let (env, admin, client) = setup();

    let stranger = Address::generate(&env);
    let recipient = Address::generate(&env);

    assert_eq!(
        client.try_mint(&stranger, &recipient),
        Err(Ok(TokenError::Unauthorized))
    );

    // The failed mint must not consume an identifier.
    assert_eq!(client.mint(&admin, &recipient), 1);
}

#[test]
fn test_owner_of_unknown_token() {
    let (_env, _admin, client) = setup();

    assert_eq!(client.try_owner_of(&7), Err(Ok(TokenError::TokenNotFound)));
}

#[test]
fn test_initialize_only_once() {
    let (env, _admin, client) = setup();

    let other = Address::generate(&env);
    assert_eq!(
        client.try_initialize(&other),
        Err(Ok(TokenError::AlreadyInitialized))
    );
}

#[test]
fn test_mint_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(NFTContract, ());
    let client = NFTContractClient::new(&env, &contract_id);

    let caller = Address::generate(&env);
    let recipient = Address::generate(&env);

    assert_eq!(
        client.try_mint(&caller, &recipient),
        Err(Ok(TokenError::NotInitialized))
    );
}

#[test]
fn test_owner_can_transfer() {
    let (env, admin, client) = setup();

    let owner = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_id = client.mint(&admin, &owner);
    client.transfer(&owner, &token_id, &recipient);

    assert_eq!(client.owner_of(&token_id), recipient);
}

#[test]
fn test_stranger_cannot_transfer() {
    let (env, admin, client) = setup();

    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);

    let token_id = client.mint(&admin, &owner);

    assert_eq!(
        client.try_transfer(&stranger, &token_id, &stranger),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(client.owner_of(&token_id), owner);
}

#[test]
fn test_transfer_unknown_token() {
    let (env, _admin, client) = setup();

    let someone = Address::generate(&env);
    assert_eq!(
        client.try_transfer(&someone, &9, &someone),
        Err(Ok(TokenError::TokenNotFound))
    );
}

#[test]
fn test_approved_operator_can_transfer_once() {
    let (env, admin, client) = setup();

    let owner = Address::generate(&env);
    let operator = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_id = client.mint(&admin, &owner);
    client.approve(&owner, &token_id, &operator);
    assert_eq!(client.get_approved(&token_id), Some(operator.clone()));

    client.transfer(&operator, &token_id, &recipient);
    assert_eq!(client.owner_of(&token_id), recipient);

    // The grant is consumed by the transfer.
    assert_eq!(client.get_approved(&token_id), None);
    assert_eq!(
        client.try_transfer(&operator, &token_id, &operator),
        Err(Ok(TokenError::Unauthorized))
    );
}

#[test]
fn test_approval_cleared_by_owner_transfer() {
    let (env, admin, client) = setup();

    let owner = Address::generate(&env);
    let operator = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_id = client.mint(&admin, &owner);
    client.approve(&owner, &token_id, &operator);

    client.transfer(&owner, &token_id, &recipient);

    // A stale grant must not survive an ownership change.
    assert_eq!(client.get_approved(&token_id), None);
    assert_eq!(
        client.try_transfer(&operator, &token_id, &operator),
        Err(Ok(TokenError::Unauthorized))
    );
}

#[test]
fn test_only_owner_can_approve() {
    let (env, admin, client) = setup();

    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);

    let token_id = client.mint(&admin, &owner);

    assert_eq!(
        client.try_approve(&stranger, &token_id, &stranger),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(client.get_approved(&token_id), None);
}

#[test]
fn test_approve_unknown_token() {
    let (env, _admin, client) = setup();

    let someone = Address::generate(&env);
    assert_eq!(
        client.try_approve(&someone, &3, &someone),
        Err(Ok(TokenError::TokenNotFound))
    );
}

#[test]
fn test_admin_view() {
    let (_env, admin, client) = setup();

    assert_eq!(client.admin(), admin);
}
