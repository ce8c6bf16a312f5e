use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol for auction creation events.
pub const CREATE: Symbol = symbol_short!("created");

// Symbol for bid events.
pub const BID: Symbol = symbol_short!("bid");

// Symbol for refund withdrawal events.
pub const REFUND: Symbol = symbol_short!("refund");

// Symbol for settlement events.
pub const SETTLE: Symbol = symbol_short!("settled");

/// Creation notification: everything an external observer needs to find the
/// new escrow and authorize custody over the asset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub auction_id: u32,
    pub token_id: u32,
    pub seller: Address,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawn {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettled {
    pub auction_id: u32,
    pub winner: Option<Address>,
    pub final_price: Option<i128>,
    pub timestamp: u64,
}
