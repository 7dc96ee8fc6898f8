//! Persisted chart configuration and the derived grid overlays.
//!
//! [`FengShuiData`] is the plain JSON record the surrounding application
//! stores per project: four independent star channels plus the method tag.
//! [`FlyStarData`] is its ephemeral expansion into four parallel 9-cell
//! overlays of one physical grid; it is recomputed on every render and
//! never persisted.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::facing::CalcMethod;

/// The fixed period channel: a start only, never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedChannel {
    /// Starting star (1..9; out-of-range values wrap silently).
    pub start: i32,
}

/// A water or mountain star channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarChannel {
    /// Starting star (1..9; out-of-range values wrap silently).
    pub start: i32,
    /// Whether the channel flies reversed.
    #[serde(default)]
    pub reversed: bool,
}

/// How the annual overlay picks its display year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Track the current year relative to the reference timestamp.
    Auto,
    /// Pin a fixed year.
    Manual,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Auto
    }
}

/// The annual (roaming star) channel.
///
/// The start is anchored to the year of `calculated_at`; rendering for a
/// different year rolls the start backward by the elapsed years. The
/// reversed flag is persisted for symmetry with the other channels but the
/// annual overlay always flies forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualChannel {
    /// Starting star at the reference year (1..9; wraps silently).
    pub start: i32,
    #[serde(default)]
    pub reversed: bool,
    /// Reference timestamp, ISO-8601. An unparseable or empty value means
    /// "no drift": the start is used as stored.
    #[serde(default, alias = "calculatedAt")]
    pub calculated_at: String,
    /// Year drift applied in auto mode.
    #[serde(default)]
    pub offset: i32,
    /// Year selection mode.
    #[serde(default, alias = "viewMode")]
    pub view_mode: ViewMode,
    /// Pinned year for manual mode.
    #[serde(default, alias = "manualYear")]
    pub manual_year: Option<i32>,
}

/// Persisted per-project chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FengShuiData {
    /// Fixed period channel.
    pub blacks: FixedChannel,
    /// Water star channel.
    pub reds: StarChannel,
    /// Mountain star channel.
    pub blues: StarChannel,
    /// Annual star channel.
    pub purples: AnnualChannel,
    /// Calculation method; absent in older records.
    #[serde(default)]
    pub method: CalcMethod,
}

impl FengShuiData {
    /// Decode a persisted JSON record.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode for persistence.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Opt-in range check for the four channel starts.
    ///
    /// The engine never requires this: out-of-range starts wrap modulo 9
    /// onto a valid star. Callers that want to reject a corrupt
    /// record at the boundary can.
    pub fn validate(&self) -> Result<(), ChartError> {
        for (channel, start) in [
            ("blacks", self.blacks.start),
            ("reds", self.reds.start),
            ("blues", self.blues.start),
            ("purples", self.purples.start),
        ] {
            if !(1..=9).contains(&start) {
                return Err(ChartError::StarOutOfRange { channel, start });
            }
        }
        Ok(())
    }
}

/// The four grid overlays derived from a [`FengShuiData`] for one year.
///
/// Each array assigns a star to the 9 cells in the fixed cell order
/// `[NW, N, NE, W, Center, E, SW, S, SE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlyStarData {
    /// Period chart.
    pub blacks: [u8; 9],
    /// Water star overlay.
    pub reds: [u8; 9],
    /// Mountain star overlay.
    pub blues: [u8; 9],
    /// Annual star overlay for the requested year.
    pub purples: [u8; 9],
}

/// One renderable chart: the overlays plus the year they were resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartView {
    /// Year the annual overlay reflects.
    pub display_year: i32,
    /// The four overlays.
    pub stars: FlyStarData,
}
