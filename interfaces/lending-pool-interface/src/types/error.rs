use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    InvalidAmount = 303,
    NotEnoughLiquidity = 304,
    FlashLoanReceiverError = 310,
    RepaymentShortfall = 311,

    MathOverflowError = 400,
    MustBeLtePercentageFactor = 401,
}
