//! The 8 compass sectors (45 degrees each, north-centered).
//!
//! Sectors pick which two cells of a flying-star grid supply the mountain
//! and water base stars for a facing; the finer 24-mountain ring decides
//! everything else.

use crate::angle::normalize_angle;

/// The 8 sectors in ring order (index 0 = north).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

/// All 8 sectors in ring order.
pub const ALL_SECTORS: [Sector; 8] = [
    Sector::North,
    Sector::Northeast,
    Sector::East,
    Sector::Southeast,
    Sector::South,
    Sector::Southwest,
    Sector::West,
    Sector::Northwest,
];

impl Sector {
    /// Compass abbreviation.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::Northeast => "NE",
            Self::East => "E",
            Self::Southeast => "SE",
            Self::South => "S",
            Self::Southwest => "SW",
            Self::West => "W",
            Self::Northwest => "NW",
        }
    }

    /// 0-based ring index (North=0 .. Northwest=7).
    pub const fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::Northeast => 1,
            Self::East => 2,
            Self::Southeast => 3,
            Self::South => 4,
            Self::Southwest => 5,
            Self::West => 6,
            Self::Northwest => 7,
        }
    }

    /// Center bearing of this sector in degrees (`index * 45`).
    pub const fn center_deg(self) -> f64 {
        self.index() as f64 * 45.0
    }

    /// Sector containing a compass bearing.
    ///
    /// Each sector spans `[center - 22.5, center + 22.5)`.
    pub fn from_angle(deg: f64) -> Sector {
        let idx = (((normalize_angle(deg) + 22.5) / 45.0).floor() as usize) % 8;
        ALL_SECTORS[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SECTORS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn centers_map_back() {
        for s in ALL_SECTORS {
            assert_eq!(Sector::from_angle(s.center_deg()), s);
        }
    }

    #[test]
    fn cardinal_bearings() {
        assert_eq!(Sector::from_angle(0.0), Sector::North);
        assert_eq!(Sector::from_angle(90.0), Sector::East);
        assert_eq!(Sector::from_angle(180.0), Sector::South);
        assert_eq!(Sector::from_angle(270.0), Sector::West);
    }

    #[test]
    fn boundary_rolls_forward() {
        assert_eq!(Sector::from_angle(22.49), Sector::North);
        assert_eq!(Sector::from_angle(22.5), Sector::Northeast);
        assert_eq!(Sector::from_angle(337.49), Sector::Northwest);
        assert_eq!(Sector::from_angle(337.5), Sector::North);
    }

    #[test]
    fn negative_bearing() {
        assert_eq!(Sector::from_angle(-20.0), Sector::North);
        assert_eq!(Sector::from_angle(-45.0), Sector::Northwest);
    }
}
