use soroban_fixed_point_math::FixedPoint;

use crate::PERCENT_DENOMINATOR;

pub trait PercentageMath {
    /// Calculates `self * percent / 100` rounded down.
    /// Returns `None` on overflow or when `self` is negative
    fn percent_mul_floor(self, percent: u32) -> Option<i128>;
}

impl<V: Into<i128>> PercentageMath for V {
    fn percent_mul_floor(self, percent: u32) -> Option<i128> {
        let value: i128 = self.into();
        if value.is_negative() {
            return None;
        }

        value.fixed_mul_floor(i128::from(percent), i128::from(PERCENT_DENOMINATOR))
    }
}
