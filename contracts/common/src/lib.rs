#![deny(warnings)]
#![no_std]

#[cfg(test)]
extern crate std;

mod amm_math;
mod fixedi128;

pub use amm_math::*;
pub use fixedi128::*;

/// Percent representation
pub const PERCENTAGE_FACTOR: u32 = 10_000;
