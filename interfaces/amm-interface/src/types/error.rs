use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    IdenticalAddresses = 100,
    PairExists = 101,
    UnsortedTokens = 102,

    InsufficientOutputAmount = 200,
    InsufficientLiquidity = 201,
    InvalidTo = 202,
    InsufficientInputAmount = 203,
    KConstant = 204,
    FlashSwapUnsupported = 205,

    MathOverflowError = 400,
}
