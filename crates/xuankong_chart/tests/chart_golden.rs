//! Golden tests for the full chart pipeline: persisted JSON record in,
//! renderable overlays out.

use xuankong_chart::{
    CalcMethod, FengShuiData, ViewMode, compose_chart, configure_project, fly_star_sequence,
    fly_stars_for_year, switch_view_mode,
};

const SOUTH_PERIOD_NINE: &str = r#"{
    "blacks": {"start": 9},
    "reds": {"start": 4, "reversed": false},
    "blues": {"start": 5, "reversed": false},
    "purples": {"start": 3, "calculated_at": "2024-02-04T00:00:00Z",
                "offset": 0, "view_mode": "auto"},
    "method": "shen_shi_45"
}"#;

#[test]
fn south_period_nine_overlays() {
    let config = FengShuiData::from_json(SOUTH_PERIOD_NINE).unwrap();
    let view = compose_chart(&config, 2024);
    assert_eq!(view.display_year, 2024);
    assert_eq!(view.stars.blacks, [8, 4, 6, 7, 9, 2, 3, 5, 1]);
    assert_eq!(view.stars.reds, [3, 8, 1, 2, 4, 6, 7, 9, 5]);
    assert_eq!(view.stars.blues, [4, 9, 2, 3, 5, 7, 8, 1, 6]);
    assert_eq!(view.stars.purples, [2, 7, 9, 1, 3, 5, 6, 8, 4]);
}

#[test]
fn every_overlay_is_a_permutation() {
    let config = FengShuiData::from_json(SOUTH_PERIOD_NINE).unwrap();
    for year in 2020..2040 {
        let stars = fly_stars_for_year(&config, year);
        for seq in [stars.blacks, stars.reds, stars.blues, stars.purples] {
            let mut sorted = seq;
            sorted.sort_unstable();
            assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9], "year {year}");
        }
    }
}

#[test]
fn annual_overlay_tracks_elapsed_years() {
    let config = FengShuiData::from_json(SOUTH_PERIOD_NINE).unwrap();
    assert_eq!(
        fly_stars_for_year(&config, 2024).purples,
        fly_star_sequence(3, false)
    );
    assert_eq!(
        fly_stars_for_year(&config, 2025).purples,
        fly_star_sequence(2, false)
    );
    assert_eq!(
        fly_stars_for_year(&config, 2033).purples,
        fly_star_sequence(3, false),
        "nine years later the cycle repeats"
    );
}

#[test]
fn composition_is_pure() {
    let config = FengShuiData::from_json(SOUTH_PERIOD_NINE).unwrap();
    let a = compose_chart(&config, 2026);
    let b = compose_chart(&config, 2026);
    assert_eq!(a, b);
}

#[test]
fn configured_project_round_trips_through_json() {
    let config = configure_project(185.0, 8, CalcMethod::ZhongZhou3, 2025);
    let json = config.to_json().unwrap();
    let decoded = FengShuiData::from_json(&json).unwrap();
    assert_eq!(config, decoded);
    assert_eq!(decoded.method, CalcMethod::ZhongZhou3);
    assert_eq!(
        compose_chart(&decoded, 2025),
        compose_chart(&config, 2025)
    );
}

#[test]
fn manual_pin_then_auto_return() {
    let mut config = configure_project(0.0, 8, CalcMethod::ShenShi45, 2020);
    switch_view_mode(&mut config.purples, ViewMode::Manual, 2026);
    assert_eq!(config.purples.manual_year, Some(2020));
    config.purples.manual_year = Some(2035);
    let pinned = compose_chart(&config, 2026);
    assert_eq!(pinned.display_year, 2035);

    switch_view_mode(&mut config.purples, ViewMode::Auto, 2026);
    let tracking = compose_chart(&config, 2026);
    assert_eq!(tracking.display_year, 2026);
    assert_eq!(config.purples.offset, 6);
}

#[test]
fn legacy_record_without_method_or_timestamp() {
    // older records carry neither method nor annual metadata; they render
    // with the default school and no year drift
    let config = FengShuiData::from_json(
        r#"{"blacks":{"start":7},"reds":{"start":8,"reversed":true},
            "blues":{"start":6},"purples":{"start":5}}"#,
    )
    .unwrap();
    assert_eq!(config.method, CalcMethod::ShenShi45);
    let stars = fly_stars_for_year(&config, 2099);
    assert_eq!(stars.reds, fly_star_sequence(8, true));
    assert_eq!(stars.purples, fly_star_sequence(5, false));
}
