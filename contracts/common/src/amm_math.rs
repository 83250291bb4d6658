/// Fee numerator of a constant product pair, 0.3% fee is charged from input
pub const SWAP_FEE_NUMERATOR: i128 = 997;
pub const SWAP_FEE_DENOMINATOR: i128 = 1000;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SwapMathError {
    InsufficientInputAmount,
    InsufficientOutputAmount,
    InsufficientLiquidity,
    MathOverflow,
}

/// Returns the minimal input amount that makes a constant product pair
/// give out at least `amount_out` of the other asset.
///
/// amount_in = reserve_in * amount_out * 1000 / ((reserve_out - amount_out) * 997) + 1
///
/// The trailing `+ 1` rounds the truncated quotient up, on exact division the
/// result is one unit above the minimum.
pub fn get_amount_in(
    amount_out: i128,
    reserve_in: i128,
    reserve_out: i128,
) -> Result<i128, SwapMathError> {
    if amount_out <= 0 {
        return Err(SwapMathError::InsufficientOutputAmount);
    }

    if reserve_in <= 0 || reserve_out <= 0 || reserve_out <= amount_out {
        return Err(SwapMathError::InsufficientLiquidity);
    }

    let numerator = reserve_in
        .checked_mul(amount_out)
        .and_then(|n| n.checked_mul(SWAP_FEE_DENOMINATOR))
        .ok_or(SwapMathError::MathOverflow)?;

    let denominator = (reserve_out - amount_out)
        .checked_mul(SWAP_FEE_NUMERATOR)
        .ok_or(SwapMathError::MathOverflow)?;

    (numerator / denominator)
        .checked_add(1)
        .ok_or(SwapMathError::MathOverflow)
}

/// Returns output amount of a constant product pair for the given input amount.
pub fn get_amount_out(
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
) -> Result<i128, SwapMathError> {
    if amount_in <= 0 {
        return Err(SwapMathError::InsufficientInputAmount);
    }

    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(SwapMathError::InsufficientLiquidity);
    }

    let amount_in_with_fee = amount_in
        .checked_mul(SWAP_FEE_NUMERATOR)
        .ok_or(SwapMathError::MathOverflow)?;

    let numerator = amount_in_with_fee
        .checked_mul(reserve_out)
        .ok_or(SwapMathError::MathOverflow)?;

    let denominator = reserve_in
        .checked_mul(SWAP_FEE_DENOMINATOR)
        .and_then(|d| d.checked_add(amount_in_with_fee))
        .ok_or(SwapMathError::MathOverflow)?;

    Ok(numerator / denominator)
}
