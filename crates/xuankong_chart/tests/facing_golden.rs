//! Golden tests for the mountain/facing resolver.
//!
//! Hand-derived from the period-9 chart `[8,4,6,7,9,2,3,5,1]` and the
//! sector cell pairings.

use xuankong_chart::{ALL_METHODS, CalcMethod, fly_star_sequence, mountain_facing_from_angle};
use xuankong_compass::Mountain;

#[test]
fn period_nine_on_center_all_sectors() {
    // (facing deg, mountain star, reversed, water star, reversed)
    let expected = [
        (0.0, 4, false, 5, false),
        (45.0, 6, true, 3, false),
        (90.0, 2, true, 7, true),
        (135.0, 1, false, 8, false),
        (180.0, 5, false, 4, false),
        (225.0, 3, false, 6, true),
        (270.0, 7, true, 2, true),
        (315.0, 8, false, 1, false),
    ];
    for (deg, m, mr, w, wr) in expected {
        let r = mountain_facing_from_angle(deg, 9, CalcMethod::ShenShi45);
        assert_eq!(r.sub_facing, None, "facing {deg}");
        assert_eq!(r.mountain_star, m, "mountain star at {deg}");
        assert_eq!(r.mountain_reversed, mr, "mountain parity at {deg}");
        assert_eq!(r.water_star, w, "water star at {deg}");
        assert_eq!(r.water_reversed, wr, "water parity at {deg}");
    }
}

#[test]
fn opposite_facings_swap_seed_stars() {
    // a house and its about-face swap mountain and water seeds
    for period in 1..=9u8 {
        for i in 0..8 {
            let deg = i as f64 * 45.0;
            let here = mountain_facing_from_angle(deg, period, CalcMethod::ShenShi45);
            let there = mountain_facing_from_angle(deg + 180.0, period, CalcMethod::ShenShi45);
            assert_eq!(here.mountain_star, there.water_star, "period {period} deg {deg}");
            assert_eq!(here.water_star, there.mountain_star, "period {period} deg {deg}");
        }
    }
}

#[test]
fn seed_stars_sum_to_period_pattern() {
    // on sector centers the two seeds always straddle the period star:
    // mountain + water == 2 * period (mod 9, in star arithmetic)
    for period in 1..=9u8 {
        for i in 0..8 {
            let deg = i as f64 * 45.0;
            let r = mountain_facing_from_angle(deg, period, CalcMethod::ShenShi45);
            let sum = (r.mountain_star + r.water_star) as i32;
            let twice = 2 * period as i32;
            assert_eq!(
                (sum - twice).rem_euclid(9),
                0,
                "period {period} facing {deg}"
            );
        }
    }
}

#[test]
fn main_facing_labels() {
    let south = mountain_facing_from_angle(180.0, 8, CalcMethod::ShenShi45);
    assert_eq!(south.main_facing, Mountain::Wu);
    assert_eq!(south.main_facing.label(), "午");
    let jian = mountain_facing_from_angle(185.0, 8, CalcMethod::ShenShi45);
    assert_eq!(jian.sub_facing.map(|m| m.label()), Some("丁"));
}

#[test]
fn period_grid_matches_generator() {
    assert_eq!(fly_star_sequence(9, false), [8, 4, 6, 7, 9, 2, 3, 5, 1]);
    assert_eq!(fly_star_sequence(8, false), [7, 3, 5, 6, 8, 1, 2, 4, 9]);
}

#[test]
fn schools_agree_on_center() {
    for period in 1..=9u8 {
        for i in 0..24 {
            let deg = i as f64 * 15.0;
            let baseline = mountain_facing_from_angle(deg, period, ALL_METHODS[0]);
            for method in &ALL_METHODS[1..] {
                assert_eq!(
                    mountain_facing_from_angle(deg, period, *method),
                    baseline,
                    "period {period} mountain {i} method {method}"
                );
            }
        }
    }
}

#[test]
fn schools_diverge_in_jian_zone() {
    // Zi leaning into Gui: Shen Shi substitutes, Zhong Zhou does not
    let shen = mountain_facing_from_angle(5.0, 9, CalcMethod::ShenShi45);
    let zhong = mountain_facing_from_angle(5.0, 9, CalcMethod::ZhongZhou45);
    assert_eq!(shen.sub_facing, Some(Mountain::Gui));
    assert_eq!(zhong.sub_facing, Some(Mountain::Gui));
    assert_eq!(shen.mountain_star, 6);
    assert_eq!(shen.water_star, 1);
    assert_eq!(zhong.mountain_star, 4);
    assert_eq!(zhong.water_star, 5);
}

#[test]
fn gen_leaning_yin_zhong_zhou_keeps_base() {
    // Gen leaning into Yin: same trigram, same polarity -> Zhong Zhou
    // keeps the base stars, Shen Shi substitutes (visible on the water
    // star; the mountain target 乾 happens to substitute onto itself)
    let shen = mountain_facing_from_angle(51.0, 9, CalcMethod::ShenShi45);
    let zhong = mountain_facing_from_angle(51.0, 9, CalcMethod::ZhongZhou45);
    assert_eq!(shen.sub_facing, Some(Mountain::Yin));
    assert_eq!(zhong.sub_facing, Some(Mountain::Yin));
    assert_eq!(zhong.mountain_star, 6);
    assert!(zhong.mountain_reversed);
    assert_eq!(zhong.water_star, 3);
    assert_eq!(shen.water_star, 2);
}

#[test]
fn human_dragon_tables_differ_between_schools() {
    // Gui leaning into Chou (period 3): both schools substitute; the water
    // star targets 寅, where the two tables disagree (9 vs 7)
    let shen = mountain_facing_from_angle(20.0, 3, CalcMethod::ShenShi45);
    let zhong = mountain_facing_from_angle(20.0, 3, CalcMethod::ZhongZhou45);
    assert_eq!(shen.sub_facing, Some(Mountain::Chou));
    assert_eq!(zhong.sub_facing, Some(Mountain::Chou));
    assert_eq!(shen.mountain_star, 7);
    assert!(shen.mountain_reversed);
    assert_eq!(zhong.mountain_star, 7);
    assert!(zhong.mountain_reversed);
    assert_eq!(shen.water_star, 9);
    assert!(!shen.water_reversed);
    assert_eq!(zhong.water_star, 7);
    assert!(!zhong.water_reversed);
}
