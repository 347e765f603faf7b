#![deny(warnings)]
#![no_std]

mod percentage_math;
#[cfg(test)]
mod test;

pub use percentage_math::*;

/// Denominator of a whole-number percentage, e.g. 150 stands for 150%
pub const PERCENT_DENOMINATOR: u32 = 100;
