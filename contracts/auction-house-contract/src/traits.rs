use crate::errors::{AuctionError, RegistryError};
use crate::types::{Auction, CreationEntry};
use soroban_sdk::{contractclient, Address, Env};

/// Interface for the auction house contract.
pub trait AuctionHouseTrait {
    /// Configure the single payment token all escrows custody bids in.
    fn initialize(env: Env, pay_token: Address) -> Result<(), RegistryError>;

    /// Open a new escrow for `token_id`, closing `duration` seconds from now.
    fn create_auction(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u32,
        duration: u64,
    ) -> Result<u32, RegistryError>;

    /// Open a new escrow closing at an absolute ledger time instead of a
    /// duration from now.
    fn create_auction_at(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u32,
        deadline: u64,
    ) -> Result<u32, RegistryError>;

    fn bid(env: Env, auction_id: u32, bidder: Address, amount: i128) -> Result<(), AuctionError>;

    fn withdraw(env: Env, auction_id: u32, caller: Address) -> Result<(), AuctionError>;

    /// Settle an auction whose deadline has passed. Deliberately open to any
    /// caller so the auction finalizes without the seller's cooperation.
    fn end_auction(env: Env, auction_id: u32) -> Result<(), AuctionError>;

    fn get_auction(env: Env, auction_id: u32) -> Option<Auction>;

    fn get_refund(env: Env, auction_id: u32, bidder: Address) -> i128;

    fn get_entry(env: Env, index: u32) -> Option<CreationEntry>;

    fn total_auctions(env: Env) -> u32;

    fn pay_token(env: Env) -> Result<Address, AuctionError>;
}

/// Client-side view of the NFT registry entrypoints the auction house
/// invokes: an ownership lookup at creation and the custody move at
/// settlement.
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    fn owner_of(env: Env, token_id: u32) -> Address;

    fn transfer(env: Env, spender: Address, token_id: u32, to: Address);
}
