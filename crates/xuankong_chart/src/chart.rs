//! Full chart composition: persisted configuration to renderable overlays.
//!
//! Pure orchestration over [`fly_star_sequence`]: resolve the year the
//! annual overlay should reflect, roll the annual start by the drift since
//! its reference timestamp, and expand all four channels. One call per
//! render; identical inputs give identical output.

use chrono::{DateTime, Datelike, NaiveDate};
use xuankong_compass::annual_star_from_year;

use crate::chart_types::{
    AnnualChannel, ChartView, FengShuiData, FixedChannel, FlyStarData, StarChannel, ViewMode,
};
use crate::facing::{CalcMethod, mountain_facing_from_angle};
use crate::fly_star::fly_star_sequence;

/// Year of an annual channel's reference timestamp.
///
/// Accepts full ISO-8601 timestamps and bare dates; anything else
/// (including the empty string) yields `None`, which downstream treats as
/// "no drift" rather than an error.
pub fn reference_year(channel: &AnnualChannel) -> Option<i32> {
    let s = channel.calculated_at.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.year());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.year());
    }
    None
}

/// Expand a configuration into the four grid overlays for a year.
///
/// The period, water and mountain channels use their stored starts; the
/// annual channel first rolls its start backward by the years elapsed
/// since its reference timestamp, then always flies forward.
pub fn fly_stars_for_year(config: &FengShuiData, year: i32) -> FlyStarData {
    let drift = reference_year(&config.purples)
        .map(|y0| year - y0)
        .unwrap_or(0);
    FlyStarData {
        blacks: fly_star_sequence(config.blacks.start, false),
        reds: fly_star_sequence(config.reds.start, config.reds.reversed),
        blues: fly_star_sequence(config.blues.start, config.blues.reversed),
        purples: fly_star_sequence(config.purples.start - drift, false),
    }
}

/// Year the annual overlay should reflect.
///
/// Auto mode tracks the reference year plus the stored drift offset;
/// manual mode pins an explicit year. Either falls back to `now_year`
/// when the needed anchor is missing.
pub fn display_year(channel: &AnnualChannel, now_year: i32) -> i32 {
    match channel.view_mode {
        ViewMode::Manual => match channel.manual_year {
            Some(y) => y,
            None => auto_year(channel, now_year),
        },
        ViewMode::Auto => auto_year(channel, now_year),
    }
}

fn auto_year(channel: &AnnualChannel, now_year: i32) -> i32 {
    match reference_year(channel) {
        Some(y0) => y0 + channel.offset,
        None => now_year,
    }
}

/// Switch the annual channel's year selection mode.
///
/// Entering manual mode pins the currently displayed year if no pin is
/// set; returning to auto re-anchors the drift offset so the display
/// lands on `now_year`.
pub fn switch_view_mode(channel: &mut AnnualChannel, mode: ViewMode, now_year: i32) {
    match mode {
        ViewMode::Manual => {
            if channel.manual_year.is_none() {
                channel.manual_year = Some(display_year(channel, now_year));
            }
        }
        ViewMode::Auto => {
            channel.offset = match reference_year(channel) {
                Some(y0) => now_year - y0,
                None => 0,
            };
        }
    }
    channel.view_mode = mode;
}

/// Compose the renderable chart for the current moment.
pub fn compose_chart(config: &FengShuiData, now_year: i32) -> ChartView {
    let year = display_year(&config.purples, now_year);
    ChartView {
        display_year: year,
        stars: fly_stars_for_year(config, year),
    }
}

/// Build the persisted configuration for a newly set up project.
///
/// Resolves the facing once and folds the result into the channels: the
/// period seeds the fixed chart, the water and mountain stars (with their
/// flying directions) seed the red and blue channels, and the year's
/// roaming star seeds the annual channel anchored at that year.
pub fn configure_project(
    facing_deg: f64,
    period: u8,
    method: CalcMethod,
    year: i32,
) -> FengShuiData {
    let facing = mountain_facing_from_angle(facing_deg, period, method);
    FengShuiData {
        blacks: FixedChannel {
            start: period as i32,
        },
        reds: StarChannel {
            start: facing.water_star as i32,
            reversed: facing.water_reversed,
        },
        blues: StarChannel {
            start: facing.mountain_star as i32,
            reversed: facing.mountain_reversed,
        },
        purples: AnnualChannel {
            start: annual_star_from_year(year) as i32,
            reversed: false,
            calculated_at: format!("{year:04}-01-01T00:00:00Z"),
            offset: 0,
            view_mode: ViewMode::Auto,
            manual_year: None,
        },
        method,
    }
}
