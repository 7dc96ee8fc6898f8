//! Mountain/facing resolution: from a facing bearing, a construction
//! period and a school method to the seed stars of a chart.
//!
//! The resolver reads the period chart at the two cells paired with the
//! facing's compass sector, then routes each base star through the dragon
//! machinery: the star's home trigram (or, for star 5, the palace it
//! occupies) names a trigram, the house dragon picks one of that trigram's
//! three mountains, and that target mountain decides both the replacement
//! star (when the bearing is off-center into the Jian zone) and the flying
//! direction (yang forward, yin reversed).
//!
//! Two schools are supported. Shen Shi substitutes whenever the bearing is
//! off-center; Zhong Zhou substitutes only when the sub-facing crosses a
//! trigram boundary or differs in polarity from the main facing. Each
//! school is offered with a 3.0 or 4.5 degree Jian tolerance.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use xuankong_compass::{
    Dragon, Mountain, Polarity, Sector, Trigram, jian_neighbor, normalize_angle,
};

use crate::fly_star::{PALACE_TRIGRAMS, fly_star_sequence};

/// Calculation method: school plus Jian tolerance in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcMethod {
    /// Shen Shi school, 3.0 degree tolerance.
    #[serde(rename = "shen_shi_3")]
    ShenShi3,
    /// Shen Shi school, 4.5 degree tolerance.
    #[serde(rename = "shen_shi_45")]
    ShenShi45,
    /// Zhong Zhou school, 3.0 degree tolerance.
    #[serde(rename = "zhong_zhou_3")]
    ZhongZhou3,
    /// Zhong Zhou school, 4.5 degree tolerance.
    #[serde(rename = "zhong_zhou_45")]
    ZhongZhou45,
}

/// All four methods.
pub const ALL_METHODS: [CalcMethod; 4] = [
    CalcMethod::ShenShi3,
    CalcMethod::ShenShi45,
    CalcMethod::ZhongZhou3,
    CalcMethod::ZhongZhou45,
];

impl CalcMethod {
    /// Stable tag used in persisted configuration and on the CLI.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ShenShi3 => "shen_shi_3",
            Self::ShenShi45 => "shen_shi_45",
            Self::ZhongZhou3 => "zhong_zhou_3",
            Self::ZhongZhou45 => "zhong_zhou_45",
        }
    }

    /// Jian tolerance: bearings within this many degrees of a mountain
    /// center count as on-center.
    pub const fn threshold_deg(self) -> f64 {
        match self {
            Self::ShenShi3 | Self::ZhongZhou3 => 3.0,
            Self::ShenShi45 | Self::ZhongZhou45 => 4.5,
        }
    }

    /// Whether this is a Shen Shi school variant.
    pub const fn is_shen_shi(self) -> bool {
        matches!(self, Self::ShenShi3 | Self::ShenShi45)
    }
}

impl Default for CalcMethod {
    fn default() -> Self {
        Self::ShenShi45
    }
}

impl Display for CalcMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error from parsing a [`CalcMethod`] tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError(String);

impl Display for ParseMethodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown calculation method: {}", self.0)
    }
}

impl Error for ParseMethodError {}

impl FromStr for CalcMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_METHODS
            .into_iter()
            .find(|m| m.tag() == s)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

/// Cells of the flying-star grid supplying the mountain and water base
/// stars, per facing sector: `(mountain cell, water cell)`, indexed by
/// [`Sector::index`].
const SECTOR_STAR_CELLS: [(usize, usize); 8] = [
    (1, 7), // N
    (2, 6), // NE
    (5, 3), // E
    (8, 0), // SE
    (7, 1), // S
    (6, 2), // SW
    (3, 5), // W
    (0, 8), // NW
];

/// Shen Shi replacement stars per target mountain, from the classical
/// substitution verse: 子癸甲申 take 1, 壬卯乙未坤 take 2, 乾亥辰巽巳戌
/// take 6, 酉辛丑艮丙 take 7, 寅午庚丁 take 9.
const REPLACEMENT_STARS: [u8; 24] = [
    1, 1, 7, 7, 9, 1, 2, 2, 6, 6, 6, 7, 9, 9, 2, 2, 1, 9, 7, 7, 6, 6, 6, 2,
];

/// Zhong Zhou replacement stars: as above, except the human dragons 寅 and
/// 申 follow their trigram's sky mountain (艮 and 坤 respectively).
const REPLACEMENT_STARS_ZHONG_ZHOU: [u8; 24] = [
    1, 1, 7, 7, 7, 1, 2, 2, 6, 6, 6, 7, 9, 9, 2, 2, 2, 9, 7, 7, 6, 6, 6, 2,
];

/// Resolved facing of a building: the seed numbers for a full chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountainFacing {
    /// Mountain the building faces.
    pub main_facing: Mountain,
    /// Neighboring mountain when the bearing leans into the Jian zone.
    pub sub_facing: Option<Mountain>,
    /// Mountain star (1..9).
    pub mountain_star: u8,
    /// Whether the mountain star flies reversed.
    pub mountain_reversed: bool,
    /// Water star (1..9).
    pub water_star: u8,
    /// Whether the water star flies reversed.
    pub water_reversed: bool,
}

struct StarParity {
    star: u8,
    reversed: bool,
}

/// Route one base star through the dragon machinery.
///
/// `cell` is the grid cell the base star was read from; it names the
/// borrowed palace when the base star is 5. `house_dragon` is the dragon
/// of the mountain the house presents on that side (sitting mountain for
/// the mountain star, facing mountain for the water star).
fn resolve_star(
    base_star: u8,
    cell: usize,
    house_dragon: Dragon,
    replacement: Option<&[u8; 24]>,
) -> StarParity {
    let trigram = if base_star == 5 {
        match PALACE_TRIGRAMS[cell] {
            Some(t) => t,
            // the sector pairing never reads the center cell
            None => unreachable!("center cell cannot supply a base star"),
        }
    } else {
        match Trigram::from_star(base_star) {
            Some(t) => t,
            None => unreachable!("base star {base_star} outside 1..9"),
        }
    };
    let target = trigram.mountains()[house_dragon.slot()];
    let star = match replacement {
        Some(table) => table[target.index() as usize],
        None => base_star,
    };
    StarParity {
        star,
        reversed: target.polarity() == Polarity::Yin,
    }
}

/// Pick the replacement table for an off-center bearing, or `None` when no
/// substitution applies.
fn replacement_table(
    main: Mountain,
    sub: Option<Mountain>,
    method: CalcMethod,
) -> Option<&'static [u8; 24]> {
    let sub = sub?;
    let applies = if method.is_shen_shi() {
        true
    } else {
        main.trigram() != sub.trigram() || main.polarity() != sub.polarity()
    };
    if !applies {
        return None;
    }
    Some(if method.is_shen_shi() {
        &REPLACEMENT_STARS
    } else {
        &REPLACEMENT_STARS_ZHONG_ZHOU
    })
}

/// Resolve a facing bearing against a construction period.
///
/// Reads the period chart at the sector's mountain/water cells, detects a
/// sub-facing with the method's tolerance, and routes both base stars
/// through replacement and parity. Total for any bearing and any period
/// 1..9.
pub fn mountain_facing_from_angle(
    facing_deg: f64,
    period: u8,
    method: CalcMethod,
) -> MountainFacing {
    let angle = normalize_angle(facing_deg);
    let main = Mountain::from_angle(angle);
    let sector = Sector::from_angle(angle);

    let grid = fly_star_sequence(period as i32, false);
    let (mountain_cell, water_cell) = SECTOR_STAR_CELLS[sector.index() as usize];
    let base_mountain = grid[mountain_cell];
    let base_water = grid[water_cell];

    let sub = jian_neighbor(angle, main, method.threshold_deg());
    let replacement = replacement_table(main, sub, method);

    // the house sits on the opposite mountain and presents its dragon to
    // the mountain star; the facing mountain's dragon drives the water star
    let sitting = main.opposite();
    let mountain = resolve_star(base_mountain, mountain_cell, sitting.dragon(), replacement);
    let water = resolve_star(base_water, water_cell, main.dragon(), replacement);

    MountainFacing {
        main_facing: main,
        sub_facing: sub,
        mountain_star: mountain.star,
        mountain_reversed: mountain.reversed,
        water_star: water.star,
        water_reversed: water.reversed,
    }
}
