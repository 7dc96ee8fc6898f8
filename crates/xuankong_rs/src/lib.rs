//! Convenience wrapper for the xuankong flying-star engine.
//!
//! Re-exports the full public surface of the compass and chart crates and
//! adds one-call helpers for the common whole-pipeline flows, so most
//! callers only need `use xuankong_rs::*`.
//!
//! # Quick start
//!
//! ```rust
//! use xuankong_rs::*;
//!
//! // a south-facing period-9 house, set up in 2024
//! let facing = mountain_facing_from_angle(180.0, 9, CalcMethod::ShenShi45);
//! assert_eq!(facing.mountain_star, 5);
//!
//! let view = project_chart(180.0, 9, CalcMethod::ShenShi45, 2024, 2026);
//! assert_eq!(view.display_year, 2026);
//! ```

pub mod convenience;

pub use convenience::{current_year, project_chart, quick_chart};

// Re-export compass types so callers don't need xuankong_compass directly.
pub use xuankong_compass::{
    ALL_MOUNTAINS, ALL_SECTORS, ALL_TRIGRAMS, ALL_YUAN, Dragon, Mountain, Polarity, Sector,
    Trigram, Yuan, annual_star_from_year, jian_neighbor, normalize_angle, period_from_year,
    signed_deviation, yuan_from_period,
};

// Re-export the chart surface.
pub use xuankong_chart::{
    ALL_METHODS, AnnualChannel, CalcMethod, CELL_NAMES, ChartError, ChartView, FORWARD_BASE,
    FengShuiData, FixedChannel, FlyStarData, MountainFacing, PALACE_TRIGRAMS, ParseMethodError,
    REVERSE_BASE, StarChannel, ViewMode, compose_chart, configure_project, display_year,
    fly_star_sequence, fly_stars_for_year, mountain_facing_from_angle, reference_year,
    switch_view_mode,
};
