use common::SwapMathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Unauthorized = 2,

    MalformedRequest = 100,
    InvalidAmount = 101,
    LoanInProgress = 102,
    FlashLoanNotExecuted = 103,

    PairNotFound = 200,
    InsufficientLiquidity = 201,
    InsufficientOutputAmount = 202,
    InsufficientCollateral = 203,
    NothingSeized = 204,

    MathOverflowError = 400,
}

impl From<SwapMathError> for Error {
    fn from(err: SwapMathError) -> Self {
        match err {
            SwapMathError::InsufficientLiquidity => Error::InsufficientLiquidity,
            SwapMathError::InsufficientOutputAmount => Error::InsufficientOutputAmount,
            SwapMathError::InsufficientInputAmount => Error::InsufficientCollateral,
            SwapMathError::MathOverflow => Error::MathOverflowError,
        }
    }
}
