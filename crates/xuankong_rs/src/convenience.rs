//! One-call helpers over the compass + chart pipeline.

use chrono::{Datelike, Utc};
use xuankong_chart::{CalcMethod, ChartView, compose_chart, configure_project};
use xuankong_compass::period_from_year;

/// Current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Set up a project and compose its chart in one call.
///
/// `setup_year` anchors the annual channel (the year the project was
/// configured); `view_year` is the year the chart should display.
pub fn project_chart(
    facing_deg: f64,
    period: u8,
    method: CalcMethod,
    setup_year: i32,
    view_year: i32,
) -> ChartView {
    let mut config = configure_project(facing_deg, period, method, setup_year);
    config.purples.offset = view_year - setup_year;
    compose_chart(&config, view_year)
}

/// Chart for a facing and a year, deriving the period from the year and
/// using the default method.
pub fn quick_chart(facing_deg: f64, year: i32) -> ChartView {
    project_chart(
        facing_deg,
        period_from_year(year),
        CalcMethod::default(),
        year,
        year,
    )
}
