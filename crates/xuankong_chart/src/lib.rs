//! Xuan Kong Fei Xing chart computation.
//!
//! This crate provides:
//! - Flying-star sequence generation over the fixed Lo Shu cell order
//! - The mountain/facing resolver (replacement stars, Jian sub-facings,
//!   flying direction)
//! - The persisted chart configuration record and the composer that
//!   expands it into renderable grid overlays
//!
//! All computation is pure and synchronous; the only fallible surface is
//! decoding persisted JSON.

pub mod chart;
pub mod chart_types;
pub mod error;
pub mod facing;
pub mod fly_star;

pub use chart::{
    compose_chart, configure_project, display_year, fly_stars_for_year, reference_year,
    switch_view_mode,
};
pub use chart_types::{
    AnnualChannel, ChartView, FengShuiData, FixedChannel, FlyStarData, StarChannel, ViewMode,
};
pub use error::ChartError;
pub use facing::{
    ALL_METHODS, CalcMethod, MountainFacing, ParseMethodError, mountain_facing_from_angle,
};
pub use fly_star::{CELL_NAMES, FORWARD_BASE, PALACE_TRIGRAMS, REVERSE_BASE, fly_star_sequence};
