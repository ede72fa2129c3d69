use proptest::prelude::*;
use radix_core::{bit_length, density};

proptest! {
    #[test]
    fn density_is_at_least_half_and_below_one(n in 1u64..) {
        let d = density(n).unwrap();
        let denominator = 1u128 << d.denominator_log2();
        prop_assert!(2 * n as u128 >= denominator, "{} below one half", d);
        prop_assert!((n as u128) < denominator, "{} reached one", d);
    }

    #[test]
    fn float_view_stays_in_range(n in 1u64..(1u64 << 52)) {
        let d = density(n).unwrap().as_f64();
        prop_assert!((0.5..1.0).contains(&d), "density {} out of range for {}", d, n);
    }

    #[test]
    fn denominator_is_next_power_of_two(n in 1u64..) {
        let d = density(n).unwrap();
        prop_assert_eq!(d.denominator_log2(), bit_length(n));
        prop_assert!((n as u128) < (1u128 << d.denominator_log2()));
    }

    #[test]
    fn doubling_preserves_density(n in 1u64..(1u64 << 62)) {
        prop_assert_eq!(density(n).unwrap(), density(n * 2).unwrap());
    }

    #[test]
    fn ordering_agrees_with_float_when_far_apart(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        let (da, db) = (density(a).unwrap(), density(b).unwrap());
        let (fa, fb) = (da.as_f64(), db.as_f64());
        if (fa - fb).abs() > 1e-9 {
            prop_assert_eq!(da < db, fa < fb);
        }
    }
}
