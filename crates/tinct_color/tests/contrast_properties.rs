//! Property-based tests for contrast and suggestion invariants.

use proptest::prelude::*;
use tinct_color::{
    calculate_contrast_ratio, classify, contrast_ratio, parse_color, suggest_better_colors, Color,
    ContrastContext, WcagLevel,
};

fn color_strategy() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn ratio_with_itself_is_one(c in color_strategy()) {
        let hex = c.to_hex();
        prop_assert_eq!(calculate_contrast_ratio(&hex, &hex), 1.0);
    }

    #[test]
    fn ratio_is_symmetric(a in color_strategy(), b in color_strategy()) {
        prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn ratio_is_bounded(a in color_strategy(), b in color_strategy()) {
        let ratio = contrast_ratio(&a, &b);
        prop_assert!((1.0..=21.0).contains(&ratio), "ratio={ratio}");
    }

    #[test]
    fn hex_round_trips(c in color_strategy()) {
        prop_assert_eq!(parse_color(&c.to_hex()), Some(c));
    }

    #[test]
    fn hsl_round_trip_is_close(c in color_strategy()) {
        // Whole-degree hue plus whole-percent saturation/lightness bounds the
        // drift to a few units on the mid channel of saturated colors.
        let back = c.to_hsl().to_color();
        for (x, y) in c.to_array().into_iter().zip(back.to_array()) {
            prop_assert!((i16::from(x) - i16::from(y)).abs() <= 5, "{c} -> {back}");
        }
    }

    #[test]
    fn suggestions_meet_target(
        fg in color_strategy(),
        bg in color_strategy(),
        target in 1.0f64..12.0,
    ) {
        let suggestions = suggest_better_colors(&fg.to_hex(), &bg.to_hex(), target);
        prop_assert!(suggestions.len() <= 3);
        for s in suggestions {
            prop_assert!(s.ratio >= target, "{s:?}");
        }
    }

    #[test]
    fn verdict_is_monotonic_in_ratio(lo in 1.0f64..21.0, hi in 1.0f64..21.0) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        for level in [WcagLevel::Aa, WcagLevel::Aaa] {
            let ctx = ContrastContext::with_level(level);
            if classify(lo, &ctx).is_accessible {
                prop_assert!(classify(hi, &ctx).is_accessible);
            }
        }
    }
}
