use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 101,
    NotInitialized = 102,
    InvalidDuration = 103,
    Unauthorized = 104,
    AssetNotFound = 105,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    AuctionNotFound = 201,
    AuctionClosed = 202,
    TooEarly = 203,
    DeadlinePassed = 204,
    BidTooLow = 205,
    NothingToWithdraw = 206,
    TransferFailed = 207,
    NotInitialized = 208,
}
