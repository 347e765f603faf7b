use crate::PercentageMath;

mod percentage_math {

    use super::*;

    #[test]
    fn percent_mul_floor() {
        assert_eq!(1_000i128.percent_mul_floor(150), Some(1_500));
        assert_eq!(10i128.percent_mul_floor(100), Some(10));
    }

    #[test]
    fn percent_mul_floor_truncates() {
        // 7 * 150 / 100 = 10.5
        assert_eq!(7i128.percent_mul_floor(150), Some(10));
        // 1 * 33 / 100 = 0.33
        assert_eq!(1i128.percent_mul_floor(33), Some(0));
        // 199 * 1 / 100 = 1.99
        assert_eq!(199i128.percent_mul_floor(1), Some(1));
    }

    #[test]
    fn percent_mul_floor_zero() {
        assert_eq!(0i128.percent_mul_floor(150), Some(0));
        assert_eq!(1_000i128.percent_mul_floor(0), Some(0));
    }

    #[test]
    fn percent_mul_floor_one_ether() {
        let amount = 1_000_000_000_000_000_000i128;
        assert_eq!(
            amount.percent_mul_floor(150),
            Some(1_500_000_000_000_000_000)
        );
    }

    #[test]
    fn percent_mul_floor_from_narrow_types() {
        assert_eq!(200u64.percent_mul_floor(150), Some(300));
        assert_eq!(3u32.percent_mul_floor(50), Some(1));
    }

    #[test]
    fn percent_mul_floor_negative() {
        assert_eq!((-1i128).percent_mul_floor(150), None);
    }

    #[test]
    fn percent_mul_floor_overflow() {
        assert_eq!(i128::MAX.percent_mul_floor(150), None);
    }
}
