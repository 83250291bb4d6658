use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    MarketNotListed = 100,
    MarketAlreadyListed = 101,

    InvalidAmount = 303,
    NotLiquidatable = 320,
    TooMuchRepay = 321,
    ZeroSeizure = 322,
    InsufficientCollateral = 323,

    MathOverflowError = 400,
    MustBeLtePercentageFactor = 401,
    MustBeGtPercentageFactor = 403,
}
