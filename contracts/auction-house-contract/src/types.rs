use soroban_sdk::{contracttype, Address};

/// One escrow record per auction: the item under the hammer, the leading
/// offer and the lifecycle flag. Superseded offers live in the refund
/// ledger, not here.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub id: u32,
    pub nft_contract: Address,
    pub token_id: u32,
    pub seller: Address,
    pub deadline: u64,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub state: AuctionState,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AuctionState {
    Open,
    Ended,
}

/// Append-only registry row recorded at creation time.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CreationEntry {
    pub auction_id: u32,
    pub token_id: u32,
    pub seller: Address,
}
